//! One module per subcommand.  Each exposes an `execute` function.

pub mod add_qrc;
pub mod add_url;
pub mod create_db;
pub mod generate;
pub mod list;
pub mod remove;
