//! CLI entry point for learnarai

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use learnarai::i18n::Lang;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "learnarai")]
#[command(version)]
#[command(about = "A bilingual blog server for markdown posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the blog (default)
    #[command(alias = "s")]
    Serve {
        /// Port to listen on, overrides the configured port
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(short, long, default_value = "0.0.0.0")]
        ip: String,
    },

    /// List posts in the order the home page shows them
    List {
        /// Locale to list posts for (en, th)
        #[arg(short, long, default_value = "th", value_parser = parse_lang)]
        lang: Lang,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Tag the post with a locale prefix (en, th)
        #[arg(short, long, value_parser = parse_lang)]
        lang: Option<Lang>,
    },
}

fn parse_lang(s: &str) -> Result<Lang, String> {
    Lang::from_code(s).ok_or_else(|| format!("unsupported language {:?}, expected en or th", s))
}

/// `PORT` for when `serve` is implied and clap never saw the argument
fn port_from_env() -> Result<Option<u16>> {
    match std::env::var("PORT") {
        Ok(port) if !port.is_empty() => Ok(Some(
            port.parse()
                .with_context(|| format!("Invalid PORT value {:?}", port))?,
        )),
        _ => Ok(None),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "learnarai=debug,info"
    } else {
        "learnarai=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let blog = learnarai::Blog::new(&base_dir)?;

    let command = match cli.command {
        Some(command) => command,
        None => Commands::Serve {
            port: port_from_env()?,
            ip: "0.0.0.0".to_string(),
        },
    };

    match command {
        Commands::Serve { port, ip } => {
            let port = port.unwrap_or(blog.config.port);
            tracing::info!("Serving posts from {:?}", blog.posts_dir);
            learnarai::server::start(&blog, &ip, port).await?;
        }

        Commands::List { lang } => {
            learnarai::commands::list::run(&blog, lang)?;
        }

        Commands::New { title, lang } => {
            tracing::info!("Creating new post with title: {}", title);
            learnarai::commands::new::run(&blog, &title, lang)?;
        }
    }

    Ok(())
}
