//! Command implementations.
//!
//! - **check**: score Python files group by group and report
//! - **init**: write a default `.hintcheck.toml`

pub mod check;
pub mod init;

pub use check::{handle_check, CheckConfig};
pub use init::init_config;
