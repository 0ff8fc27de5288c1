//! Expose mindoc's internal API for use in integration tests. While it
//! *could* be useful, we do not recommend using this API in production code;
//! the binary is the supported surface.
pub mod cli;
pub mod config;
pub mod convert;
pub mod output;
pub mod watch;
