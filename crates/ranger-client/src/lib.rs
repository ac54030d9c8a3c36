mod error;

/// The gateway collaborator: the trait every operation runs against,
/// plus the HTTP implementation of it.
pub mod gateway;

/// Operations that drive remote state: schema publication and resolver
/// listing/reconciliation.
pub mod operations;

/// Local schema handling: SDL parsing and declared-vs-remote diffing.
pub mod schema;

/// Types shared across operations.
pub mod shared;

/// Sources of declared operations (local SDL or remote introspection).
pub mod source;

pub use error::RangerClientError;
