mod worker;

pub use worker::{build_workers, handlers, table_loaders};
