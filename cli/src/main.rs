mod backend;

use clap::{Parser, Subcommand};
use content::ContactSubmission;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::backend::{BackendClient, CliError};

#[derive(Parser, Debug)]
#[command(name = "fixerupper-cli", about = "Operator CLI for the Fixerupper site backend")]
struct Cli {
    #[arg(long, env = "FIXERUPPER_BACKEND_URL", default_value = "http://127.0.0.1:8001")]
    base_url: String,

    /// Log each request at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replace the gallery with the backend's default projects.
    Seed {
        /// Seed without deleting the current gallery first.
        #[arg(long)]
        keep_existing: bool,
    },
    /// Print the gallery as JSON.
    Gallery,
    /// Print the testimonials as JSON.
    Testimonials,
    /// Submit a contact request.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: String,
    },
    /// Check that the backend answers.
    Ping,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let backend = BackendClient::new(&cli.base_url)?;

    match cli.command {
        Command::Seed { keep_existing } => {
            let report = backend.reseed(keep_existing).await?;
            tracing::info!(cleared = report.cleared, seeded = report.seeded, "gallery reseeded");
            println!("seeded");
        }
        Command::Gallery => print_json(&backend.gallery().await?)?,
        Command::Testimonials => print_json(&backend.testimonials().await?)?,
        Command::Contact { name, email, phone, message } => {
            backend.submit_contact(&ContactSubmission { name, email, phone, message }).await?;
            println!("sent");
        }
        Command::Ping => {
            let status = backend.ping().await?;
            println!("ok ({status}) {}", cli.base_url);
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "fixerupper_cli=debug,info" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
        .init();
}
