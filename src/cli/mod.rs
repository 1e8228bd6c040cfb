//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod show;
pub mod status;

pub use args::{Cli, Commands, ShowFormat};
