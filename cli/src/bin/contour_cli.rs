use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use cli::{JsonDocumentReader, QuoteSummary};
use color_eyre::eyre::Result;
use contour::{Pipeline, PngContourRenderer};
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Reconstruct closed contours from CAD drawing fixtures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct contours and print a quote summary
    Quote {
        /// Path to a JSON document fixture
        #[arg(short, long)]
        input: PathBuf,
        /// Render the traced contours to this PNG
        #[arg(long)]
        render: Option<PathBuf>,
        /// Emit the summary as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Quote {
            input,
            render,
            json,
        } => quote(input, render.as_deref(), *json),
    }
}

fn quote(input: &Path, render: Option<&Path>, json: bool) -> Result<()> {
    let mut builder = Pipeline::builder();
    if let Some(path) = render {
        builder = builder.with_renderer(PngContourRenderer::new(path));
    }
    let pipeline = builder.build();

    info!(?input, "processing document");
    let contours = pipeline.open_and_process(&JsonDocumentReader, input)?;
    let summary = QuoteSummary::from_contours(&contours);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("contours:   {}", summary.contours);
        println!("area:       {:.3}", summary.total_area);
        println!("cut length: {:.3}", summary.total_cut_length);
    }

    Ok(())
}
