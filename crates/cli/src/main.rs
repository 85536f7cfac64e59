mod config_commands;
mod console;
mod pool_commands;

use std::path::{Path, PathBuf};

use {
    anyhow::Context,
    clap::{Parser, Subcommand},
    spud_auto_reply::{AutoReply, RngSource, StdRngSource},
    spud_config::SpudConfig,
    tokio::io::BufReader,
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "spud", about = "Spud — snarky potato for group chats")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Config file (overrides discovery of ./spud.toml and ~/.config/spud/).
    #[arg(long, global = true, env = "SPUD_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with spud on stdin/stdout (default when no subcommand is provided).
    Console {
        /// Treat the session as a direct message, so every line is addressed.
        #[arg(long)]
        direct: bool,
        /// Seed the random source to replay a session.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Classify a single message and print the outcome.
    Classify {
        message: String,
        /// The message was addressed to spud (mention or DM).
        #[arg(short, long)]
        addressed: bool,
        #[arg(long)]
        seed: Option<u64>,
        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Load every response pool and report its size.
    Pools,
    /// Configuration inspection.
    Config {
        #[command(subcommand)]
        action: config_commands::ConfigAction,
    },
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout carries only replies.
    if cli.json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub(crate) fn load_config(path: Option<&Path>) -> anyhow::Result<SpudConfig> {
    let config = match path {
        Some(path) => spud_config::load_config(path),
        None => spud_config::discover_and_load(),
    };
    config.context("loading config")
}

fn rng_source(seed: Option<u64>) -> StdRngSource {
    match seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_os(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_telemetry(&cli);

    info!(version = env!("CARGO_PKG_VERSION"), "spud starting");

    match cli.command {
        None => run_console(cli.config.as_deref(), false, None).await,
        Some(Commands::Console { direct, seed }) => {
            run_console(cli.config.as_deref(), direct, seed).await
        },
        Some(Commands::Classify {
            message,
            addressed,
            seed,
            json,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            let auto_reply = AutoReply::from_config(&config)?;
            let mut rng = rng_source(seed);
            let category = auto_reply
                .dispatcher()
                .dispatch(&message, addressed, &mut rng);
            let response = category.and_then(|c| auto_reply.pools().draw(c, &mut rng));
            if json {
                let outcome = serde_json::json!({ "category": category, "response": response });
                println!("{outcome}");
            } else {
                match (category, response) {
                    (Some(category), Some(line)) => println!("{category}: {line}"),
                    (Some(category), None) => println!("{category}: (empty pool)"),
                    (None, _) => println!("none"),
                }
            }
            Ok(())
        },
        Some(Commands::Pools) => {
            let config = load_config(cli.config.as_deref())?;
            pool_commands::handle_pools(&config)
        },
        Some(Commands::Config { action }) => {
            config_commands::handle_config(action, cli.config.as_deref())
        },
    }
}

async fn run_console(
    config: Option<&Path>,
    direct: bool,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let config = load_config(config)?;
    // Every pool must load before the first message is read.
    let auto_reply = AutoReply::from_config(&config)?;
    let outbound = console::ConsoleOutbound::new(tokio::io::stdout());
    let mut rng = rng_source(seed);
    let reader = BufReader::new(tokio::io::stdin());
    console::run_console(&auto_reply, reader, &outbound, &mut rng, direct).await?;
    Ok(())
}
