//! CLI entry point for blog-content

use anyhow::Result;
use blog_content::config::Mode;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blog-content")]
#[command(version)]
#[command(about = "Inspect the posts of a file-backed markdown blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Execution context: development lists drafts
    #[arg(short, long, global = true, env = "BLOG_ENV")]
    mode: Option<Mode>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List visible posts, newest first
    #[command(alias = "ls")]
    List {
        /// Print metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single post by its slug
    Show {
        /// Directory name of the post
        slug: String,

        /// Print the post as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the page path of every visible post
    Paths,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_content=debug,info"
    } else {
        "blog_content=info"
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

    let mut blog = blog_content::Blog::new(&base_dir)?;
    if let Some(mode) = cli.mode {
        blog.set_mode(mode);
    }
    tracing::debug!(
        "Content root {:?} in {} mode",
        blog.content_dir,
        blog.config.mode
    );

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::List { json } => {
            blog_content::commands::list::run(&blog, json, &mut stdout)?;
        }

        Commands::Show { slug, json } => {
            blog_content::commands::show::run(&blog, &slug, json, &mut stdout)?;
        }

        Commands::Paths => {
            blog_content::commands::paths::run(&blog, &mut stdout)?;
        }

        Commands::Version => {
            writeln!(stdout, "blog-content version {}", env!("CARGO_PKG_VERSION"))?;
        }
    }

    Ok(())
}
