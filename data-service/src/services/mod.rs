pub mod query;
pub mod stats;
pub mod store;

pub use store::{Record, RecordStore};
