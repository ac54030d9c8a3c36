pub(crate) mod output;
pub(crate) mod resolver;
pub(crate) mod schema;
pub(crate) mod sync;

pub use output::{OutputFormat, RangerOutput};
pub use resolver::Resolver;
pub use schema::Schema;
pub use sync::Sync;
