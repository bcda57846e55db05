use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use threader::app::AppContext;
use threader::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Listen => {
            commands::listen(&ctx).await?;
        }
        Commands::Convert {
            url,
            reply_to,
            author,
        } => {
            commands::convert(&ctx, &url, &reply_to, author.as_deref()).await?;
        }
        Commands::Chunk { path } => {
            commands::chunk(&ctx, path.as_deref()).await?;
        }
    }

    Ok(())
}
