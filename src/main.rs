use clap::Parser;
use env_logger::{Builder, Env, Target};
use log::error;
use logpuzzle::{run, Cli, Settings};
use std::process;

#[tokio::main]
async fn main() {
    // Init logging, stdout is reserved for the url list
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr);
    builder.init();

    if std::env::args_os().len() <= 1 {
        println!("{}", Cli::usage());
        process::exit(1);
    }

    // Parse Args
    let args = Cli::parse();

    // Parse Settings
    let settings = match Settings::new(&args.config_file) {
        Ok(s) => s,
        Err(e) => {
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    // Run
    if let Err(e) = run(&args, &settings, &mut std::io::stdout()).await {
        error!("Application error: {:#}", e);
        process::exit(1);
    }
}
