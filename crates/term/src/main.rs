mod command;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rboard_api::client::{Client, Config};
use rboard_views::app::App;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use command::{Command, HELP};

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal client for a bulletin-board REST API")]
struct Args {
    /// Root url of the bulletin-board API
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cfg = Config::new(args.base_url);
    debug!("Using API at {}", cfg.base_url());
    let mut app = App::start(Arc::new(Client::new(Some(cfg))))
        .await
        .context("failed to start")?;

    println!("{}", app.render());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("! {}", e);
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Go(route) => app.navigate(route).await?,
            Command::Refresh => app.refresh().await?,
            Command::Submit => {
                app.submit().await?;
            }
            Command::Clear => app.clear_input(),
            Command::Text(text) => {
                if !app.input(&text) {
                    println!("! nothing to type into here (try :help)");
                    continue;
                }
            }
        }
        for alert in app.take_alerts() {
            println!("! {}", alert);
        }
        println!("{}", app.render());
    }
    Ok(())
}
