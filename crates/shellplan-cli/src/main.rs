use std::str::FromStr;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use openai_agent::{ClientConfig, OpenAiClient, DEFAULT_MODEL};
use shellplan_core::SchemaVariant;
use shellplan_server::generate::OpenAiGenerator;
use shellplan_server::state::AppState;

#[derive(Parser)]
#[command(
    name = "shellplan",
    about = "Turn a natural-language task into a reviewable shell plan",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web UI server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "3141")]
        port: u16,

        /// Output schema variant: steps, action, actions, state-machines
        #[arg(long, default_value = "state-machines")]
        variant: String,

        /// Model name passed to the generation API
        #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
        model: String,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },

    /// Print the JSON Schema sent to the API for a variant
    Schema {
        /// Output schema variant: steps, action, actions, state-machines
        #[arg(long, default_value = "state-machines")]
        variant: String,
    },
}

fn main() {
    // .env first: the API credential usually lives there. A missing key is
    // not checked here — it surfaces when the first generation call is made.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Serve {
            port,
            variant,
            model,
            no_open,
        } => serve(port, &variant, model, !no_open),
        Commands::Schema { variant } => print_schema(&variant),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn serve(port: u16, variant: &str, model: String, open_browser: bool) -> anyhow::Result<()> {
    let variant = SchemaVariant::from_str(variant)?;
    let client = OpenAiClient::new(ClientConfig::from_env(model.clone()))?;
    let generator = Arc::new(OpenAiGenerator::new(client));
    let state = AppState::new(generator, variant, model);

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(shellplan_server::serve(state, port, open_browser))
}

fn print_schema(variant: &str) -> anyhow::Result<()> {
    let variant = SchemaVariant::from_str(variant)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&variant.response_schema())?
    );
    Ok(())
}
