use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use echo_core::{BodyEncoding, ClientConfig, UiState};

mod transport;

use transport::UreqTransport;

/// Send messages to an echo server and show what comes back
#[derive(Parser, Debug)]
#[command(name = "echo-client", version, about, long_about = None)]
struct Cli {
    /// Message to send; omit to read one message per line from stdin
    message: Option<String>,

    /// Server URL to POST to
    #[arg(short, long)]
    url: Option<String>,

    /// Request body encoding: form or plain
    #[arg(short, long)]
    encoding: Option<BodyEncoding>,

    /// JSON file with server_url, message and encoding defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                ClientConfig::from_json(&raw)?
            }
            None => ClientConfig::default(),
        };
        if let Some(url) = &self.url {
            config.server_url = url.clone();
        }
        if let Some(encoding) = self.encoding {
            config.encoding = encoding;
        }
        Ok(config)
    }
}

fn render(state: &UiState) {
    if !state.error().is_empty() {
        eprintln!("❌ {}", state.error());
    }
    if !state.response().is_empty() {
        println!("{}", state.response());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    let mut state = UiState::new(&config);
    let mut transport = UreqTransport::new();

    if let Some(message) = cli.message {
        state.message = message;
        let sent = state.send(&mut transport);
        render(&state);
        if !sent {
            std::process::exit(1);
        }
        return Ok(());
    }

    println!(
        "POST {} ({}) - one message per line, Ctrl-D to quit",
        state.url,
        config.encoding.content_type()
    );
    for line in io::stdin().lock().lines() {
        state.message = line.context("reading stdin")?;
        state.send(&mut transport);
        render(&state);
    }
    Ok(())
}
