mod calculator_flow;
mod config_file;
mod rendering;
