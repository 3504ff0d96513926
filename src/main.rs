//! # talkie
//!
//! Command-line front end for the lesson and week clients.
//!
//! ```bash
//! talkie lessons list
//! talkie lessons create --title "Colours" --week 65f0c1
//! talkie weeks get 65f0c1
//! RUST_LOG=debug talkie --config talkie.json weeks delete 65f0c1
//! ```
//!
//! Results are printed to stdout as pretty JSON; logs go to stderr.

use clap::{Parser, Subcommand};
use resource_framework::tracing::setup_tracing;
use resource_framework::ActorClient;
use serde::Serialize;
use std::path::PathBuf;
use talkie_client::config::ClientConfig;
use talkie_client::lifecycle::TalkieSystem;
use talkie_client::model::{LessonCreate, LessonId, WeekId};
use talkie_client::token_store;
use tracing::{info, Instrument};

#[derive(Parser, Debug)]
#[command(name = "talkie")]
#[command(version, about = "Manage talkietotz lessons and weeks", long_about = None)]
struct Cli {
    /// Path to the JSON config file
    #[arg(short, long, value_name = "FILE", default_value = "talkie.json")]
    config: PathBuf,

    #[command(subcommand)]
    resource: Resource,
}

#[derive(Subcommand, Debug)]
enum Resource {
    /// Work with lessons
    Lessons {
        #[command(subcommand)]
        command: LessonCommand,
    },
    /// Work with weeks
    Weeks {
        #[command(subcommand)]
        command: ItemCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ItemCommand {
    /// List the whole collection
    List,
    /// Show one item
    Get { id: String },
    /// Delete one item
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
enum LessonCommand {
    #[command(flatten)]
    Item(ItemCommand),
    /// Create a lesson
    Create {
        #[arg(long)]
        title: String,
        /// Week the lesson belongs to
        #[arg(long, value_name = "WEEK_ID")]
        week: Option<String>,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_lessons(
    system: &TalkieSystem,
    command: LessonCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = &system.lesson_client;
    match command {
        LessonCommand::Item(ItemCommand::List) => print_json(&client.fetch_all().await?),
        LessonCommand::Item(ItemCommand::Get { id }) => {
            print_json(&client.fetch_by_id(LessonId::from(id)).await?)
        }
        LessonCommand::Item(ItemCommand::Delete { id }) => {
            client.delete(LessonId::from(id)).await?;
            print_json(&client.state().success)
        }
        LessonCommand::Create { title, week } => {
            let mut params = LessonCreate::new(title);
            params.week_id = week;
            print_json(&client.create_lesson(params).await?)
        }
    }
}

async fn run_weeks(
    system: &TalkieSystem,
    command: ItemCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = &system.week_client;
    match command {
        ItemCommand::List => print_json(&client.fetch_all().await?),
        ItemCommand::Get { id } => print_json(&client.fetch_by_id(WeekId::from(id)).await?),
        ItemCommand::Delete { id } => {
            client.delete(WeekId::from(id)).await?;
            print_json(&client.state().success)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    let cli = Cli::parse();

    let mut config = ClientConfig::load(&cli.config)?;
    // Each command makes its own request.
    config.prefetch = false;

    let store = token_store::from_env(&config.token_key, &config.token_file);
    let system = TalkieSystem::start(&config, store.as_ref()).await?;

    let span = tracing::info_span!("command");
    let outcome = async {
        info!(command = ?cli.resource, "Running");
        match cli.resource {
            Resource::Lessons { command } => run_lessons(&system, command).await,
            Resource::Weeks { command } => run_weeks(&system, command).await,
        }
    }
    .instrument(span)
    .await;

    system.shutdown().await?;
    outcome
}
