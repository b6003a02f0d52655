use clap::Parser;

use essay_publisher::cli::{dispatch, Cli, USAGE};
use essay_publisher::error::{ExitCode, PublishError};
use essay_publisher::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.verbose);
    }

    match dispatch(&cli) {
        Ok(path) => {
            println!("✓ Created: {}", path.display());
            std::process::exit(ExitCode::SUCCESS);
        }
        Err(PublishError::MissingArgument) => {
            eprintln!("{USAGE}");
            std::process::exit(PublishError::MissingArgument.exit_code());
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
