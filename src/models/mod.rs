pub mod cli;
pub mod gallery;

pub use cli::Cli;
pub use gallery::Gallery;
