pub mod commands;
pub mod core;
pub mod forms;
pub mod help;
pub mod output;
pub mod registry;
pub mod render;
pub mod shell;

pub use self::core::{CliMode, CommandError, LoopControl, ShellContext};
pub use shell::{run_cli, run_script};
