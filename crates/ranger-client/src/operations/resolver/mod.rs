pub mod list;
pub mod sync;
