//! Manifold CLI
//!
//! Front end for editing multi-source processing configurations and shipping
//! them to the gateway.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use manifold_core::gateway::SOURCE_CONFIG;
use manifold_core::sources::{
    DatabaseSource, HttpSource, KafkaSource, PollInterval, PollUnit, SourceDescriptor,
};

mod commands;
mod session;

/// Manifold - configuration front end for the data processing gateway
#[derive(Parser)]
#[command(name = "manifold")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "manifold.yaml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Manifold project
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,

        /// Project name (defaults to directory name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Edit the pending descriptor buffer
    Source {
        #[command(subcommand)]
        command: SourceCommands,
    },

    /// Commit the pending descriptors as a named configuration entry
    Commit {
        /// Configuration name
        name: String,
    },

    /// Show the pending buffer and the configuration table
    Status,

    /// Seed the local table from the gateway
    Load {
        /// Drop the local table before seeding
        #[arg(long)]
        replace: bool,

        /// Configuration kind stored under this gateway key
        #[arg(long, default_value = SOURCE_CONFIG)]
        config_type: String,
    },

    /// Push the whole configuration table to the gateway
    Sync {
        /// Configuration kind stored under this gateway key
        #[arg(long, default_value = SOURCE_CONFIG)]
        config_type: String,
    },

    /// Deploy one configuration entry's descriptors
    Deploy {
        /// Entry identifier
        id: u64,

        /// Configuration kind stored under this gateway key
        #[arg(long, default_value = SOURCE_CONFIG)]
        config_type: String,
    },
}

#[derive(Subcommand)]
enum SourceCommands {
    /// Append a descriptor to the pending buffer
    Add {
        #[command(subcommand)]
        source: AddSource,
    },

    /// List pending descriptors
    List,

    /// Remove a pending descriptor by position
    Remove {
        /// Zero-based position in the pending buffer
        index: usize,
    },
}

#[derive(Subcommand)]
enum AddSource {
    /// Polled relational database
    Database {
        /// Database engine (postgres, mysql, ...)
        #[arg(long, default_value = "postgres")]
        engine: String,

        /// Host name or address
        #[arg(long)]
        host: String,

        /// TCP port
        #[arg(long, default_value_t = 5432)]
        port: u16,

        /// Login user
        #[arg(long)]
        user: String,

        /// Login password
        #[arg(long)]
        password: String,

        /// Database name
        #[arg(long)]
        database: String,

        /// Poll interval magnitude
        #[arg(long, default_value_t = 5)]
        every: u64,

        /// Poll interval unit
        #[arg(long, value_enum, default_value = "minute")]
        unit: PollUnitArg,
    },

    /// CSV or XLSX file shipped inline
    File {
        /// Path of the file to attach
        path: PathBuf,

        /// Poll interval magnitude
        #[arg(long, default_value_t = 15)]
        every: u64,

        /// Poll interval unit
        #[arg(long, value_enum, default_value = "minute")]
        unit: PollUnitArg,
    },

    /// Polled HTTP endpoint
    Http {
        /// Endpoint URL
        url: String,

        /// Poll interval magnitude
        #[arg(long, default_value_t = 5)]
        every: u64,

        /// Poll interval unit
        #[arg(long, value_enum, default_value = "minute")]
        unit: PollUnitArg,
    },

    /// Kafka topic (push-based)
    Kafka {
        /// Broker address
        #[arg(long)]
        broker: String,

        /// Broker port
        #[arg(long, default_value = "9092")]
        port: String,

        /// Topic name
        #[arg(long)]
        topic: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PollUnitArg {
    Second,
    Minute,
    Hour,
}

impl From<PollUnitArg> for PollUnit {
    fn from(unit: PollUnitArg) -> Self {
        match unit {
            PollUnitArg::Second => PollUnit::Second,
            PollUnitArg::Minute => PollUnit::Minute,
            PollUnitArg::Hour => PollUnit::Hour,
        }
    }
}

async fn build_descriptor(source: AddSource) -> Result<SourceDescriptor> {
    Ok(match source {
        AddSource::Database {
            engine,
            host,
            port,
            user,
            password,
            database,
            every,
            unit,
        } => SourceDescriptor::Database(DatabaseSource {
            engine,
            host,
            port,
            user,
            password,
            database,
            poll: PollInterval {
                every,
                unit: unit.into(),
            },
        }),
        AddSource::File { path, every, unit } => {
            let poll = PollInterval {
                every,
                unit: unit.into(),
            };
            let file = manifold_core::ingest::ingest_file(&path, poll)
                .await
                .with_context(|| format!("Failed to attach file {}", path.display()))?;
            SourceDescriptor::File(file)
        }
        AddSource::Http { url, every, unit } => SourceDescriptor::Http(HttpSource {
            url,
            poll: PollInterval {
                every,
                unit: unit.into(),
            },
        }),
        AddSource::Kafka {
            broker,
            port,
            topic,
        } => SourceDescriptor::Kafka(KafkaSource {
            broker,
            port,
            topic,
        }),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Init { path, name } => {
            commands::init::run(&path, name.as_deref()).await?;
        }
        Commands::Source { command } => match command {
            SourceCommands::Add { source } => {
                let descriptor = build_descriptor(source).await?;
                commands::source::add(&cli.config, descriptor).await?;
            }
            SourceCommands::List => {
                commands::source::list(&cli.config).await?;
            }
            SourceCommands::Remove { index } => {
                commands::source::remove(&cli.config, index).await?;
            }
        },
        Commands::Commit { name } => {
            commands::commit::run(&cli.config, &name).await?;
        }
        Commands::Status => {
            commands::status::run(&cli.config).await?;
        }
        Commands::Load {
            replace,
            config_type,
        } => {
            commands::load::run(&cli.config, &config_type, replace).await?;
        }
        Commands::Sync { config_type } => {
            commands::sync::run(&cli.config, &config_type).await?;
        }
        Commands::Deploy { id, config_type } => {
            commands::deploy::run(&cli.config, id, &config_type).await?;
        }
    }

    Ok(())
}
