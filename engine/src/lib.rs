//! Application state for BuildCost.
//!
//! This crate owns the calculator state machine and its collaborators,
//! without TUI dependencies.

mod app;
mod config;
mod print;
mod share;

pub use app::{
    App, Collaborators, EstimateForm, MAX_AREA_CHARS, NOTICE_LIFETIME, Notice, NoticeKind,
};
pub use config::{
    ASCII_ENV_VAR, AppConfig, AppSettings, BuildcostConfig, ConfigError, DEFAULT_SHARE_URL,
    DefaultsConfig, FormDefaults, PrintConfig, ShareConfig, config_dir, config_path,
};
pub use print::{PrintError, PrintTarget, QuoteFilePrinter};
pub use share::{
    ClipboardShare, NoShare, SHARE_UNSUPPORTED_NOTICE, ShareError, SharePayload, ShareTarget,
};

pub use buildcost_core::{CurrencyStyle, format_inr};
pub use buildcost_types::{
    Area, CalculationResult, CityType, ConstructionType, EstimateInput, MaterialPercent,
    ui::{FormField, UiOptions, View},
};
