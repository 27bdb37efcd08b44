use std::io;
use std::sync::Mutex;

use bstree::settings::{LoggingSettings, Settings};
use bstree::shell::{CliArgs, Shell};
use bstree::ShellError;
use tracing::{info, Level};

fn main() -> Result<(), ShellError> {
    let args = CliArgs::parse_args();

    if args.generate_config {
        Settings::default().save_to_file(&args.config)?;
        println!("Generated default settings: {}", args.config.display());
        println!("Edit this file and start bst-shell again to use it.");
        return Ok(());
    }

    let mut settings = Settings::from_file(&args.config)?;
    args.apply(&mut settings);
    settings.validate()?;

    init_logging(&settings.logging)?;
    if !settings.shell.color {
        colored::control::set_override(false);
    }
    info!(version = env!("CARGO_PKG_VERSION"), config = %args.config.display(), "starting bst-shell");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), settings);
    shell.seed(&args.values)?;
    shell.run()
}

/// Installs the global subscriber. Logs never go to stdout so they can't
/// interleave with the menu.
fn init_logging(logging: &LoggingSettings) -> Result<(), ShellError> {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let level = match logging.level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    match (logging.output.as_str(), &logging.log_file) {
        ("file", Some(log_file)) => {
            if let Some(parent) = log_file.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;

            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(false),
                )
                .with(LevelFilter::from_level(level))
                .try_init()?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(false),
                )
                .with(LevelFilter::from_level(level))
                .try_init()?;
        }
    }

    Ok(())
}
