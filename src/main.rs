use clap::Parser;
use tracing::error;

use cloc_integration::cli::{self, Cli};

fn main() {
    cli::init_tracing();
    let cli = Cli::parse();

    let code = match cli::run(&cli) {
        Ok(code) => code,
        Err(err) => {
            error!("Error: {:#}", err);
            cli::exit_code_for(&err)
        }
    };
    std::process::exit(code);
}
