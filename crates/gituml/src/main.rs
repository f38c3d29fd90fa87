//! gituml: render git commit history as a PlantUML graph
//!
//! This binary crate converts a repository's commit history since a given
//! date into a PlantUML document connecting commits, their parents, and
//! the files they touched.

use clap::Parser;
use tracing::error;

use gituml::config::Config;
use gituml::runner;

fn main() {
    let config = Config::parse();

    // Initialize tracing subscriber; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config.validate() {
        error!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = runner::run(&config) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
