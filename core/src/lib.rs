//! Estimation core for BuildCost.
//!
//! Everything here is a pure function of its arguments:
//! the estimator itself, rupee formatting, and the text handed to the
//! share and print collaborators.

pub mod currency;
mod estimator;
pub mod report;

pub use currency::{CurrencyStyle, format_inr};
pub use estimator::{estimate, estimate_from_text};
pub use report::{quote_text, rate_label, share_text};
