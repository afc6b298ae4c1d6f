mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "char_codec=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let settings = cli::resolve_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Encode {
            text,
            no_special,
            special,
            format,
        } => {
            let wrap_special = if no_special {
                false
            } else {
                special || settings.wrap_special
            };
            let format = cli::resolve_format(format.as_deref(), &settings)?;
            cli::encode_text(text, wrap_special, format)?;
        }
        Commands::Decode { ids, strict, format } => {
            let format = cli::resolve_format(format.as_deref(), &settings)?;
            cli::decode_ids(&ids, strict || settings.strict_ids, format)?;
        }
        Commands::Breakdown { text, format } => {
            let format = cli::resolve_format(format.as_deref(), &settings)?;
            cli::show_breakdown(text, format)?;
        }
        Commands::Vocab {
            kind,
            search,
            format,
        } => {
            let format = cli::resolve_format(format.as_deref(), &settings)?;
            cli::list_vocab(kind.as_deref(), search, format)?;
        }
        Commands::Stats { format } => {
            let format = cli::resolve_format(format.as_deref(), &settings)?;
            cli::show_stats(format)?;
        }
    }

    Ok(())
}
