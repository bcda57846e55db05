use std::path::Path;

use tokio::io::{AsyncReadExt, BufReader};
use tracing::info;

use crate::app::{AppContext, Result};
use crate::chunker::{char_len, pack_segments, split_into_sentences};
use crate::config::ThreadConfig;
use crate::domain::PostId;
use crate::listener::run_stream;

pub async fn listen(ctx: &AppContext) -> Result<()> {
    let threader = ctx.threader();
    let stdin = BufReader::new(tokio::io::stdin());

    info!(
        tweet_size = ctx.config.thread.tweet_size,
        "Listening for posts on stdin"
    );

    tokio::select! {
        result = run_stream(stdin, &threader) => {
            let stats = result?;
            info!(
                events = stats.events,
                errors = stats.errors,
                malformed = stats.malformed,
                "Stream ended"
            );
        }
        signal = shutdown_signal() => {
            signal?;
            info!("Shutting down");
        }
    }

    Ok(())
}

pub async fn convert(
    ctx: &AppContext,
    url: &str,
    reply_to: &str,
    author: Option<&str>,
) -> Result<()> {
    let author = author
        .map(|a| format!("@{}", a.trim_start_matches('@')))
        .unwrap_or_default();

    let chain = ctx
        .threader()
        .convert_url(url, &author, &PostId::new(reply_to))
        .await?;

    println!("Posted {} segments under {}", chain.len(), chain.root());
    Ok(())
}

pub async fn chunk(ctx: &AppContext, path: Option<&Path>) -> Result<()> {
    let text = match path {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            text
        }
    };

    for line in chunk_lines(&text, &ctx.config.thread) {
        println!("{line}");
    }
    Ok(())
}

fn chunk_lines(text: &str, config: &ThreadConfig) -> Vec<String> {
    pack_segments(split_into_sentences(text), config)
        .iter()
        .enumerate()
        .map(|(i, segment)| format!("{:>3} ({:>3}) {}", i + 1, char_len(segment), segment))
        .collect()
}

async fn shutdown_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::select! {
            _ = sigterm.recv() => {},
            _ = sigint.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
    }

    Ok(())
}
