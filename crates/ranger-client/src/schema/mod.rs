mod diff;
mod parse;

pub use diff::needs_reconciliation;
pub use parse::parse;
