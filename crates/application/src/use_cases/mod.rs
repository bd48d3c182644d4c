pub mod dns;
pub mod tables;

pub use dns::{AnswerSynthesizer, HandleDnsQueryUseCase, Resolution, ResolveQueryUseCase};
pub use tables::{LoadReport, LoadTablesUseCase};
