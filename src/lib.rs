pub mod cli;
pub mod command;
mod error;
pub(crate) mod options;
pub mod utils;

pub use error::{RangerError, RangerErrorSuggestion, RangerResult};
