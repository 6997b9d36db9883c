//! Text host for the storefront: drives the cart engine from line commands and
//! re-renders the whole view after each one.

pub mod command;
pub mod config;
pub mod render;
pub mod session;

pub use command::{Command, CommandError};
pub use config::ShellConfig;
pub use session::Shell;
