pub mod logger;
pub mod parsers;
