mod settings;

pub use settings::{build_cli, AppConfig, RunMode};
