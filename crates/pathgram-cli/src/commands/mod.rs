// One module per subcommand; main.rs only parses arguments and dispatches.

pub mod query;
pub mod route;
pub mod stats;
