pub mod args;
pub mod runner;

pub use args::{
    get_log_level_from_verbose, parse_cli, Cli, Commands, InputArgs, SelectArgs,
    SelectStringArgs, YesNoArgs,
};
pub use runner::{execute, run};
