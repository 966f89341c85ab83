/**
 * CodeShare CLI - Main Entry Point
 *
 * Terminal client for a CodeShare workspace: list, post, upload and watch.
 * The passphrase gate is asked once per invocation.
 */

use std::io::{BufRead, Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use futures_util::StreamExt;
use tokio::sync::mpsc;

use codeshare::client::gate::{PassphraseGate, PROMPT};
use codeshare::client::view::{is_code, is_large_draft, ViewState, ViewUpdate};
use codeshare::client::{config, ApiClient, ClientError, ObjectStore, UploadProgress};
use codeshare::shared::{FileAttachment, Message};

#[derive(Debug, Parser)]
#[command(name = "codeshare", version, about = "Share text and code with your workspace")]
struct Cli {
    /// Config file (defaults to <config dir>/codeshare/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Answer to the passphrase prompt
    #[arg(long, env = "CODESHARE_PASSPHRASE_ANSWER", hide_env_values = true)]
    passphrase: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every message
    List,
    /// Post a message; reads stdin when no text is given
    Post {
        text: Option<String>,
        /// Attach a file (uploaded to the object store first)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Author name for this post
        #[arg(long)]
        user: Option<String>,
    },
    /// Upload a file and print its attachment metadata
    Upload { path: PathBuf },
    /// Print messages as they are posted
    Watch,
}

#[tokio::main]
async fn main() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let mut app_config = config::load(cli.config.as_deref())?;

    let mut gate = PassphraseGate::new(app_config.passphrase.clone());
    if !gate.is_open() {
        let answer = match cli.passphrase {
            Some(answer) => answer,
            None => prompt(PROMPT)?,
        };
        if !gate.attempt(&answer) {
            return Err(ClientError::Locked);
        }
    }

    match cli.command {
        Command::List => {
            let client = ApiClient::new(app_config);
            for message in client.list_messages().await? {
                print_message(&message);
            }
        }
        Command::Post { text, file, user } => {
            if let Some(user) = user {
                app_config.user = user;
            }
            let text = match text {
                Some(text) => text,
                None if file.is_some() => String::new(),
                None => read_stdin()?,
            };
            if is_large_draft(&text) {
                eprintln!("Large message ({} characters); others will be notified instead of sent the text", text.chars().count());
            }

            let attachment = match file {
                Some(path) => Some(upload(&ObjectStore::from_config(&app_config)?, &path).await?),
                None => None,
            };

            let client = ApiClient::new(app_config);
            let message = client.post(&text, attachment).await?;
            print_message(&message);
        }
        Command::Upload { path } => {
            let file = upload(&ObjectStore::from_config(&app_config)?, &path).await?;
            println!("{}", serde_json::to_string_pretty(&file).map_err(codeshare::shared::SharedError::from)?);
        }
        Command::Watch => watch(ApiClient::new(app_config)).await?,
    }

    Ok(())
}

async fn watch(client: ApiClient) -> Result<(), ClientError> {
    let mut view = ViewState::new();
    let mut events = client.subscribe().await?;

    for message in view.replace(client.list_messages().await?) {
        print_message(&message);
    }

    while let Some(event) = events.next().await {
        match view.apply(event?) {
            ViewUpdate::Appended(message) => print_message(&message),
            ViewUpdate::AlreadyShown { id } => {
                tracing::trace!("[Watch] Message {} already listed", id);
            }
            ViewUpdate::RefreshNeeded { id } => {
                tracing::debug!("[Watch] Large message {} posted, refreshing", id);
                for message in view.replace(client.list_messages().await?) {
                    print_message(&message);
                }
            }
        }
    }

    Ok(())
}

async fn upload(store: &ObjectStore, path: &std::path::Path) -> Result<FileAttachment, ClientError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<UploadProgress>();
    let reporter = tokio::spawn(async move {
        while let Some(progress) = rx.recv().await {
            eprint!("\rUploading... {}%", progress.percent());
        }
        eprintln!();
    });

    let result = store.upload_file(path, Some(tx)).await;
    // sender is dropped with the upload future, which ends the reporter
    let _ = reporter.await;
    result
}

fn print_message(message: &Message) {
    let time = chrono::DateTime::parse_from_rfc3339(&message.ts)
        .map(|t| t.with_timezone(&chrono::Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|_| message.ts.clone());

    println!("[{}] {}", time, message.user);
    if is_code(&message.text) {
        for line in message.text.lines() {
            println!("    | {}", line);
        }
    } else if !message.text.is_empty() {
        println!("    {}", message.text);
    }
    if let Some(file) = &message.file {
        println!("    📎 {} ({} bytes) {}", file.name, file.size, file.url);
    }
}

fn prompt(question: &str) -> Result<String, ClientError> {
    eprint!("{} ", question);
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn read_stdin() -> Result<String, ClientError> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}
