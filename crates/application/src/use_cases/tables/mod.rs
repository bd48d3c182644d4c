mod load_tables;

pub use load_tables::{LoadReport, LoadTablesUseCase};
