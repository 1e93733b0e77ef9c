pub mod builder;
pub mod configuration;
pub mod error;
pub mod models;
pub mod run;
pub mod scanner;

pub use configuration::Settings;
pub use models::Cli;
pub use run::run;
