mod runner;
mod types;

pub use runner::run;
pub use types::{
    OperationOutcome, ResolverSyncInput, ResolverSyncResponse, SyncAction, SyncFailure,
};
