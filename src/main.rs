use anyhow::Context;
use catalog_import::utils::DEFAULT_CONFIG_FILE;
use catalog_import::{
    read_config, rename_images, reshape_catalog, RenameOutcome, RenameSummary, ReshapeOptions,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Catalog Import - reshape supplier lists and rename product photos
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file; built-in defaults apply when it does not exist
    #[arg(
        short,
        long,
        global = true,
        env = "CATALOG_IMPORT_CONFIG",
        default_value = DEFAULT_CONFIG_FILE
    )]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Turn the supplier list into the web-ready catalog CSV
    Reshape {
        /// Supplier list to read
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Catalog file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Supplier code written to the Proveedor column
        #[arg(short, long)]
        supplier: Option<String>,

        /// Prefix for the Imagen column, e.g. "/Uploads/Sanchez Import/Fotos_Sanchez_Import/"
        #[arg(long)]
        image_base_path: Option<String>,
    },

    /// Rename mapped images to {code}.jpg
    RenameImages {
        /// Directory holding the images
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Report what would be renamed without touching any file
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is kept for status lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = read_config(&args.config)
        .await
        .with_context(|| format!("Failed to load config {}", args.config.display()))?
        .unwrap_or_default();

    match args.command {
        Command::Reshape {
            input,
            output,
            supplier,
            image_base_path,
        } => {
            let options = ReshapeOptions {
                input: input.unwrap_or(config.input_csv),
                output: output.unwrap_or(config.output_csv),
                supplier_id: supplier.unwrap_or(config.supplier_id),
                image_base_path: image_base_path.or(config.image_base_path),
            };

            let result = reshape_catalog(options).await?;
            println!("CSV generated: {}", result.output.display());
        }
        Command::RenameImages { dir, dry_run } => {
            let image_dir = dir.unwrap_or(config.image_dir);
            let outcomes = rename_images(&image_dir, &config.image_mapping, dry_run).await?;

            for outcome in &outcomes {
                match outcome {
                    RenameOutcome::Renamed { old, new } => println!("Renamed: {} -> {}", old, new),
                    RenameOutcome::WouldRename { old, new } => {
                        println!("Would rename: {} -> {}", old, new)
                    }
                    RenameOutcome::NotFound { old } => println!("Not found: {}", old),
                }
            }

            let summary = RenameSummary::from_outcomes(&outcomes);
            info!(
                "Renamed {}, would rename {}, not found {}",
                summary.renamed, summary.would_rename, summary.not_found
            );
        }
    }

    Ok(())
}
