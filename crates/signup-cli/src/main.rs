mod commands;
mod console;

use anyhow::Result;
use clap::{Parser, Subcommand};
use signup_validation_core::{Locale, ValidatorConfig};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "signup")]
#[command(version, about = "Signup form validator", long_about = None)]
struct Cli {
    /// Config file (default: ./signup.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Message language: en or ko
    #[arg(short, long, global = true)]
    locale: Option<Locale>,

    /// Quiet period before revalidating typed input, in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// More log output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a complete form, as on submit
    Check {
        #[arg(long, default_value = "")]
        username: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        password: String,

        #[arg(long, default_value = "")]
        confirm_password: String,
    },

    /// Replay `field=value` lines from stdin as keystrokes
    ///
    /// Each line updates the field and fires the input trigger; the field is
    /// revalidated once typing pauses. A line reading `submit` validates the
    /// whole form.
    Watch {
        /// Pause between lines, to simulate typing speed
        #[arg(long, default_value = "0")]
        pace_ms: u64,
    },
}

impl Cli {
    /// File settings with command-line overrides applied
    fn settings(&self) -> Result<ValidatorConfig> {
        let mut config = match &self.config {
            Some(path) => ValidatorConfig::load(path)?,
            None => ValidatorConfig::load_default()?,
        };
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.debounce.delay_ms = delay_ms;
        }
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.settings()?;

    // Execute command
    match cli.command {
        Commands::Check {
            username,
            email,
            password,
            confirm_password,
        } => {
            let accepted =
                commands::check::execute(&config, &username, &email, &password, &confirm_password);
            if !accepted {
                std::process::exit(1);
            }
        }
        Commands::Watch { pace_ms } => {
            commands::watch::execute(&config, pace_ms).await?;
        }
    }

    Ok(())
}
