mod lookup;
mod resolve;
mod types;

use std::io::Write;

use lookup::{run_lookup, TrackClient};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use types::Command;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trackpeek=info".into()),
        )
        .init();

    let backend_url =
        std::env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:5050".to_string());
    let client = TrackClient::new(&backend_url);

    // One-shot mode: arguments form a single command line.
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        println!("{}", run_lookup(&client, Command::parse(&args.join(" "))).await);
        return;
    }

    info!("Using backend at {}", backend_url);
    println!("trackpeek - paste a Spotify track URL or ID (quit to exit)");
    println!("commands: track | features | analysis | complete <url-or-id>, search <query>");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        match Command::parse(&line) {
            Command::Quit => break,
            command => println!("{}", run_lookup(&client, command).await),
        }
    }
}
