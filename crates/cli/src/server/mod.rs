pub mod dns;
#[cfg(unix)]
pub mod reload;

pub use dns::{start_dns_server, Endpoints};
