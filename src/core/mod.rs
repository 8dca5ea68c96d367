pub mod estimate;
pub mod handle;
pub mod ids;
pub mod query;
pub mod report;
pub mod schedule;
pub mod store;
