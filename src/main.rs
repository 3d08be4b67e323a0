// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Quill main entry point - CLI for template expansion and tool inspection.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::Level;

use quill::config::{self, QuillConfig};
use quill::telemetry::{init_telemetry, TelemetryConfig};
use quill::template::{EditorContext, Notifier, NullNotifier, TemplateEngine};
use quill::tools::ToolRegistry;

/// Quill - editor template variables and LLM tool dispatch.
#[derive(Parser)]
#[command(name = "quill")]
#[command(author, version, about = "Editor template variables and LLM tool dispatch", long_about = None)]
struct Cli {
    /// Show debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Show trace output
    #[arg(long, global = true)]
    trace: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for quill.
#[derive(Subcommand)]
enum Commands {
    /// Expand ${variable} placeholders in a template string
    Expand {
        /// Template text, e.g. "notes/${datetime|yyyy-MM-DD}-${selectedText|untitled}.md"
        template: String,

        /// Active file path
        #[arg(long, env = "QUILL_FILE")]
        file: Option<PathBuf>,

        /// Workspace root folder
        #[arg(long, env = "QUILL_WORKSPACE_ROOT")]
        workspace_root: Option<PathBuf>,

        /// Workspace folder owning the active file (defaults to the
        /// workspace root when the file lives under it)
        #[arg(long)]
        file_workspace_folder: Option<PathBuf>,

        /// Current selection text
        #[arg(long)]
        selection: Option<String>,
    },

    /// List the recognized template variables
    Vars {
        /// Workspace root, for config-defined variables
        #[arg(long, env = "QUILL_WORKSPACE_ROOT")]
        workspace_root: Option<PathBuf>,
    },

    /// Print the tool advertisement in OpenAI function-calling format
    Tools,

    /// Execute a registered tool by name
    Call {
        /// Tool name, e.g. get_current_weather
        name: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

/// Notifier that prints accessor messages to stderr.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn info(&self, message: &str) {
        eprintln!("{} {message}", "note:".yellow().bold());
    }
}

fn log_level(cli: &Cli) -> Level {
    if cli.trace {
        Level::TRACE
    } else if cli.debug {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// Build an engine with the default variables plus config-defined ones.
fn build_engine(config: &QuillConfig) -> TemplateEngine {
    let mut engine = TemplateEngine::with_defaults();
    config.apply_to(&mut engine);
    engine
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = init_telemetry(&TelemetryConfig::default().with_level(log_level(&cli)))?;

    match cli.command {
        Commands::Expand {
            template,
            file,
            workspace_root,
            file_workspace_folder,
            selection,
        } => {
            let config = config::load_config(workspace_root.as_deref())?;
            let engine = build_engine(&config);

            let notifier: Arc<dyn Notifier> = if config.notifications_enabled() {
                Arc::new(StderrNotifier)
            } else {
                Arc::new(NullNotifier)
            };

            let file_workspace_folder = file_workspace_folder.or_else(|| {
                match (&file, &workspace_root) {
                    (Some(f), Some(root)) if f.starts_with(root) => Some(root.clone()),
                    _ => None,
                }
            });

            let mut ctx = EditorContext::new().with_notifier(notifier);
            if let Some(file) = file {
                ctx = ctx.with_file(file);
            }
            if let Some(root) = workspace_root {
                ctx = ctx.with_workspace_root(root);
            }
            if let Some(folder) = file_workspace_folder {
                ctx = ctx.with_file_workspace_folder(folder);
            }
            if let Some(selection) = selection {
                ctx = ctx.with_selection(selection);
            }

            println!("{}", engine.expand(&template, &ctx)?);
        }

        Commands::Vars { workspace_root } => {
            let config = config::load_config(workspace_root.as_deref())?;
            let engine = build_engine(&config);
            for name in engine.vars().names() {
                println!("{}", name.cyan());
            }
        }

        Commands::Tools => {
            let registry = ToolRegistry::with_defaults();
            println!("{}", serde_json::to_string_pretty(&registry.to_openai_tools())?);
        }

        Commands::Call { name, args } => {
            let input: serde_json::Value = serde_json::from_str(&args)
                .map_err(|e| anyhow::anyhow!("--args is not valid JSON: {e}"))?;

            let registry = ToolRegistry::with_defaults();
            match registry.execute_tool(&name, input).await {
                Some(payload) => println!("{payload}"),
                None => println!("{}", "null".dimmed()),
            }
        }
    }

    Ok(())
}
