use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docnode::{Node, storage};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docnode")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a document tree and print it as JSON
    Render {
        #[arg(long)]
        schema: String,
        #[arg(long)]
        root: String,
        #[arg(long)]
        input: String,
        #[arg(long)]
        hide: Option<String>,
        #[arg(long)]
        output: Option<String>,
    },
    /// Check that the document survives a serialize/construct round trip
    Check {
        #[arg(long)]
        schema: String,
        #[arg(long)]
        root: String,
        #[arg(long)]
        input: String,
    },
    /// List declared node types and their settings
    Types {
        #[arg(long)]
        schema: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render {
            schema,
            root,
            input,
            hide,
            output,
        } => {
            let schema = Arc::new(storage::load_schema(&schema)?);
            let raw = storage::load_raw(&input)?;
            let mut node = Node::construct(&schema, &root, &raw)
                .with_context(|| format!("Failed to build {} from {}", root, input))?;

            if let Some(path) = hide {
                let policy = storage::load_hide_policy(&path)?;
                let hidden = policy.apply(&mut node);
                tracing::info!(hidden, "applied hide policy");
            }

            let json = node.to_json()?;
            match output {
                Some(path) => {
                    storage::save_json(&path, &json)?;
                    println!("Wrote {} to {}", root, path);
                }
                None => println!("{}", serde_json::to_string_pretty(&json)?),
            }
        }
        Commands::Check {
            schema,
            root,
            input,
        } => {
            let schema = Arc::new(storage::load_schema(&schema)?);
            let raw = storage::load_raw(&input)?;

            let first = Node::construct(&schema, &root, &raw)?.to_json()?;
            let second = Node::construct(&schema, &root, &first)?.to_json()?;

            if first == second {
                println!("Round trip OK for {}", input);
            } else {
                anyhow::bail!("Round trip changed the document built from {}", input);
            }
        }
        Commands::Types { schema } => {
            let schema = storage::load_schema(&schema)?;
            for node_type in schema.types() {
                println!("{}", node_type.name);
                for (name, setting) in &node_type.settings {
                    let mut flags = Vec::new();
                    if setting.required {
                        flags.push("required".to_string());
                    }
                    if let Some(default) = &setting.default {
                        flags.push(format!("default {:?}", default));
                    }
                    println!("  {}: {} {}", name, setting.shape, flags.join(", "));
                }
            }
        }
    }

    Ok(())
}
