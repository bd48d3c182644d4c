//! hostsd Application Layer
//!
//! Ports describe what the query pipeline needs from the outside world;
//! use cases implement resolution, answer synthesis and table loading
//! against those ports.
pub mod ports;
pub mod use_cases;
