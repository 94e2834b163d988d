use std::{
    env,
    io::{self, BufRead, Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use precis_client::{
    actions::{copy_to_clipboard, deliver_summary},
    error::ClientError,
    flow::SummarizeFlow,
    render::render_history,
    services::handler::Services,
};
use precis_core::history::SledHistoryStore;

#[derive(Parser)]
#[command(name = "precis", version, about = "Summarize text through the precis relay")]
struct Cli {
    /// Base URL of the relay server
    #[arg(
        long,
        env = "PRECIS_SERVER_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    server: String,

    /// Directory holding the local summary history
    #[arg(long, env = "PRECIS_HISTORY_DIR", global = true)]
    history_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize TEXT, the contents of --file, or standard input
    Summarize {
        text: Option<String>,
        #[arg(long, short)]
        file: Option<PathBuf>,
        /// Copy the summary to the clipboard
        #[arg(long)]
        copy: bool,
        /// Save the summary as summary.txt in DIR
        #[arg(long, value_name = "DIR")]
        download: Option<PathBuf>,
    },
    /// Show past summaries, newest first
    History,
    /// Delete every stored summary
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

fn default_history_dir() -> PathBuf {
    env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".precis")
        .join("history")
}

fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(file) = file {
        return std::fs::read_to_string(&file)
            .with_context(|| format!("Failed to read {}", file.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read standard input")?;
    Ok(buffer)
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let history_dir = cli.history_dir.unwrap_or_else(default_history_dir);
    let history = SledHistoryStore::open(&history_dir)
        .with_context(|| format!("Failed to open history at {}", history_dir.display()))?;

    let flow = SummarizeFlow::new(Services::new(cli.server), history);

    match cli.command {
        Commands::Summarize {
            text,
            file,
            copy,
            download,
        } => {
            let input = read_input(text, file)?;

            if input.trim().is_empty() {
                return Err(ClientError::EmptyInput.into());
            }

            eprintln!("Generating summary... please wait.");
            let entry = flow.submit(&input).await?;
            println!("{}", entry.summary);

            let saved = deliver_summary(&entry.summary, copy, download.as_deref(), |text| {
                copy_to_clipboard(text)?;
                eprintln!("Summary copied to the clipboard.");
                Ok(())
            })?;

            if let Some(path) = saved {
                eprintln!("Summary saved to {}", path.display());
            }
        }
        Commands::History => {
            println!("{}", render_history(&flow.history()?));
        }
        Commands::Clear { yes } => {
            if yes || confirm("Clear the whole summary history?")? {
                flow.clear_history()?;
                println!("{}", render_history(&[]));
            } else {
                eprintln!("History left untouched.");
            }
        }
    }

    Ok(())
}
