//! Oakvale - Entry Point
//!
//! Runs either the command server (`serve`) or the interactive terminal
//! client (`play`). The client drives the same submitter the tests
//! exercise, against a live server.

use clap::{Parser, Subcommand};
use oakvale::client::{CommandSubmitter, HttpTransport, InputField, Transcript};
use oakvale::core::error::Result;
use oakvale::game::GameSession;
use oakvale::server::{serve, AppState};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser)]
#[command(name = "oakvale", about = "Text adventure game with an HTTP command interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the game server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
    /// Play interactively against a running server
    Play {
        /// Base URL of the game server
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        url: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("oakvale=info")),
        )
        .init();

    let cli = Cli::parse();
    let rt = Runtime::new()?;

    match cli.command {
        Commands::Serve { addr } => {
            tracing::info!("Oakvale server starting...");
            rt.block_on(serve(&addr, AppState::new(GameSession::new())))
        }
        Commands::Play { url } => rt.block_on(play(&url)),
    }
}

/// Interactive readline loop against a running server
async fn play(url: &str) -> Result<()> {
    let input = InputField::new();
    let transcript = Transcript::new();
    let transport = Arc::new(HttpTransport::new(url));
    let submitter = CommandSubmitter::new(input.clone(), transcript.clone(), transport);

    println!("=== ADVENTURE QUEST ===");
    println!("A text-based adventure game full of exploration and danger.");
    println!("Type 'help' for commands, 'quit' to leave.");
    println!();

    let stdin = io::stdin();
    let mut printed = 0;
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let quitting = matches!(line.trim(), "quit" | "exit");

        input.set(line);
        if let Some(handle) = submitter.submit() {
            // Await arrival so the loop prints responses in order
            if let Err(error) = handle.await {
                tracing::error!(%error, "submission task panicked");
            }
        }

        let entries = transcript.entries();
        for entry in &entries[printed..] {
            println!("{}", entry);
        }
        printed = entries.len();

        if quitting {
            break;
        }
    }

    println!("\nGoodbye!");
    Ok(())
}
