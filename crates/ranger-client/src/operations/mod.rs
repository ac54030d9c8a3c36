pub mod resolver;
pub mod schema;
