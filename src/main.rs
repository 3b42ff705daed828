use clap::Parser;
use siteconf::cli::{self, Cli};
use siteconf_observability::init_basic_console_logging;
use tracing::error;

fn main() {
    let cli = Cli::parse();

    // Held until exit so buffered file logs get flushed.
    let log_guard = match &cli.log_dir {
        Some(dir) => match siteconf_observability::init_file_logging(dir) {
            Ok(guard) => Some(guard),
            Err(e) => {
                init_basic_console_logging();
                error!(log_dir = %dir.display(), error = %e, "Failed to set up file logging");
                None
            }
        },
        None => {
            init_basic_console_logging();
            None
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = cli::run(&cli, &mut stdout) {
        error!("{:#}", e);
        eprintln!("❌ {:#}", e);
        drop(log_guard);
        std::process::exit(1);
    }
}
