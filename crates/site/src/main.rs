//! termfolio
//!
//! Serves a personal site as a browsable faux shell.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use site::config::{default_config_path, Config};
use site::render::{html, text};
use site::{logging, Prompt, Response, Router, SiteServer};
use vfs::build_root;

/// termfolio - a personal site browsed like a shell session.
#[derive(Parser, Debug)]
#[command(name = "termfolio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Serve the site over HTTP
    Serve {
        /// Listen address, overriding the configuration (e.g. 0.0.0.0:8080)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Render one path to stdout
    Render {
        /// Request path, as it would appear in a URL
        #[arg(default_value = "/")]
        path: String,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: RenderFormat,

        /// Disable ANSI colours in text output
        #[arg(long)]
        no_color: bool,
    },

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Output format for `render`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    /// Shell-like text
    Text,
    /// The HTML page the server would send
    Html,
    /// The routed response as JSON
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);

    // Init writes the file before anything else reads it
    if let Commands::Config(ConfigCommands::Init { force }) = &cli.command {
        if config_path.exists() && !force {
            anyhow::bail!(
                "Config file already exists at {} (use --force to overwrite)",
                config_path.display()
            );
        }
        Config::default().save(&config_path)?;
        println!("Wrote {}", config_path.display());
        return Ok(());
    }

    // Load configuration
    let mut config = Config::load(&config_path)?;

    // Apply environment variable overrides
    config.apply_env_overrides();

    if let Commands::Serve { bind: Some(bind) } = &cli.command {
        config.server.bind = bind.clone();
    }

    // Validate configuration
    config.validate()?;

    let _guard = logging::init(&config.logging, cli.verbose)?;
    tracing::debug!("Using config file: {:?}", config_path);

    match cli.command {
        Commands::Serve { .. } => {
            let server = SiteServer::from_config(&config)?;
            server.run()?;
        }
        Commands::Render {
            path,
            format,
            no_color,
        } => {
            let router = Router::new(build_root(&config.tree.metadata(Utc::now())));
            let prompt = Prompt::from(&config.prompt);
            let (_, response) = router.route_raw(&path);
            let color = !no_color && std::io::stdout().is_terminal();

            match format {
                RenderFormat::Text => print!("{}", render_text(&response, &prompt, color)),
                RenderFormat::Html => print!("{}", html::page(&response, &prompt)),
                RenderFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&response)
                        .context("Failed to serialize response")?
                ),
            }

            if matches!(response, Response::NotFound(_)) {
                std::process::exit(1);
            }
        }
        Commands::Config(ConfigCommands::Show) => {
            print!("{}", config.to_toml()?);
        }
        Commands::Config(ConfigCommands::Init { .. }) => {}
    }

    Ok(())
}

fn render_text(response: &Response, prompt: &Prompt, color: bool) -> String {
    match response {
        Response::Page(transcript) | Response::NotFound(transcript) => {
            text::render(transcript, prompt, color)
        }
        Response::Terminal { cwd, header } => format!(
            "{}(interactive terminal at {cwd}; open it in a browser)\n",
            text::render(header, prompt, color)
        ),
        Response::Redirect(target) => format!("-> {target}\n"),
        Response::Download { path } => format!("{path}: static file, served as a download\n"),
    }
}
