mod collect;
mod config_cmd;

pub use collect::CollectCommand;
pub use config_cmd::ConfigCommand;
