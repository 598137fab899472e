//! CLI entry point for devblog-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devblog_rs::commands::render::RenderFormat;

#[derive(Parser)]
#[command(name = "devblog-rs")]
#[command(version)]
#[command(about = "A small static blog generator with comment and sponsor widgets", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Clean the public folder
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, page, widget)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Render a single document and print it
    Render {
        /// Document id (slug)
        id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = RenderFormat::Regions)]
        format: RenderFormat,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "devblog_rs=debug,info"
    } else {
        "devblog_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Generate => {
            let blog = devblog_rs::Blog::new(&base_dir)?;
            tracing::info!("Generating static files...");
            blog.generate()?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let blog = devblog_rs::Blog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let blog = devblog_rs::Blog::new(&base_dir)?;
            devblog_rs::commands::list::run(&blog, &r#type)?;
        }

        Commands::Render { id, format } => {
            let blog = devblog_rs::Blog::new(&base_dir)?;
            devblog_rs::commands::render::run(&blog, &id, format)?;
        }

        Commands::Version => {
            println!("devblog-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
