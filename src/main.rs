//! GenomeView CLI entry point
//!
//! Loads a FASTA (+ optional GFF) genome and answers one query against it,
//! printing the result as JSON on stdout.

use clap::{Args, Parser, Subcommand, ValueEnum};
use genome_view::core::{LoadOptions, Palette, ProjectionConfig, Session};
use genome_view::RecordMode;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// FASTA record handling (CLI enum)
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum RecordModeArg {
    /// Read the first record only; later records are ignored
    #[default]
    #[value(name = "first")]
    First,
    /// Fold later records (header lines included) into the first
    #[value(name = "concat")]
    Concat,
}

impl From<RecordModeArg> for RecordMode {
    fn from(arg: RecordModeArg) -> Self {
        match arg {
            RecordModeArg::First => RecordMode::FirstRecord,
            RecordModeArg::Concat => RecordMode::Concatenate,
        }
    }
}

#[derive(Parser)]
#[command(name = "genome-view")]
#[command(about = "Load FASTA/GFF genomes and query windowed track views")]
#[command(version)]
#[command(author = "GenomeView Contributors")]
struct Cli {
    /// FASTA record handling: 'first' stops at the second header, 'concat' folds it in
    #[arg(long = "fasta-mode", global = true, default_value = "first")]
    fasta_mode: RecordModeArg,

    /// Minimum rendered feature width in pixels
    #[arg(long = "min-width", global = true, default_value = "2.0")]
    min_width: f64,

    #[command(subcommand)]
    command: Commands,
}

/// Genome input files
#[derive(Args)]
struct InputArgs {
    /// FASTA file (plain, .gz or .bz2)
    fasta: PathBuf,
    /// GFF3 annotation file (plain, .gz or .bz2)
    #[arg(short = 'g', long)]
    gff: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the genome summary
    Info {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print all features
    Features {
        #[command(flatten)]
        input: InputArgs,
        /// Only features overlapping this 1-based start
        #[arg(long, requires = "end")]
        start: Option<u64>,
        /// Only features overlapping this 1-based end
        #[arg(long, requires = "start")]
        end: Option<u64>,
    },
    /// Print a slice of the sequence ([start, end), 0-based)
    Region {
        #[command(flatten)]
        input: InputArgs,
        #[arg(allow_negative_numbers = true)]
        start: i64,
        #[arg(allow_negative_numbers = true)]
        end: i64,
    },
    /// Find a feature by name (case-insensitive)
    Find {
        #[command(flatten)]
        input: InputArgs,
        name: String,
    },
    /// Project features into a pixel window
    Viewport {
        #[command(flatten)]
        input: InputArgs,
        #[arg(allow_negative_numbers = true)]
        start: i64,
        #[arg(allow_negative_numbers = true)]
        end: i64,
        /// Target width in pixels
        #[arg(short = 'w', long, default_value = "1000")]
        width: i64,
    },
    /// Load several FASTA files and list them
    List {
        /// FASTA files
        #[arg(required = true)]
        fasta: Vec<PathBuf>,
    },
}

fn load(session: &mut Session, input: &InputArgs) -> anyhow::Result<()> {
    let start = Instant::now();
    eprintln!("Loading genome: {:?}", input.fasta);

    let info = session
        .load_from_files(input.fasta.as_path(), input.gff.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load genome: {}", e))?;

    eprintln!(
        "Genome '{}' loaded in {:.2}s ({} bp, {} features)",
        info.id,
        start.elapsed().as_secs_f64(),
        info.length,
        info.num_genes
    );
    if let Some(stats) = session.load_stats() {
        eprintln!("\n=== GFF Statistics ===");
        eprintln!("Data rows:       {}", stats.total);
        eprintln!("Parsed:          {}", stats.parsed);
        eprintln!("Skipped:         {}", stats.skipped);
        eprintln!("Comments:        {}", stats.comments);
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_json_or_empty<T: Serialize>(value: Option<T>) -> anyhow::Result<()> {
    match value {
        Some(v) => print_json(&v),
        None => print_json(&serde_json::json!({})),
    }
}

#[derive(Serialize)]
struct InfoReport<'a> {
    #[serde(flatten)]
    info: genome_view::GenomeInfo,
    active_key: Option<&'a str>,
    gc_content: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = LoadOptions::new(cli.fasta_mode.into());
    let projection = ProjectionConfig {
        min_width: cli.min_width,
        palette: Palette::default(),
    };
    let mut session = Session::with_config(options, projection);

    match cli.command {
        Commands::Info { input } => {
            load(&mut session, &input)?;
            let report = session.active_info().map(|info| InfoReport {
                info,
                active_key: session.active_id(),
                gc_content: session
                    .active_id()
                    .and_then(|id| session.store().get(id))
                    .map(|g| g.gc_content()),
            });
            print_json_or_empty(report)?;
        }

        Commands::Features { input, start, end } => {
            load(&mut session, &input)?;
            match (start, end) {
                (Some(s), Some(e)) => print_json(&session.features_in(s, e))?,
                _ => print_json(&session.features())?,
            }
        }

        Commands::Region { input, start, end } => {
            load(&mut session, &input)?;
            println!("{}", session.sequence_region(start, end));
        }

        Commands::Find { input, name } => {
            load(&mut session, &input)?;
            print_json_or_empty(session.find_feature_by_name(&name))?;
        }

        Commands::Viewport { input, start, end, width } => {
            load(&mut session, &input)?;
            print_json(&session.viewport(start, end, width))?;
        }

        Commands::List { fasta } => {
            for path in &fasta {
                let input = InputArgs {
                    fasta: path.clone(),
                    gff: None,
                };
                load(&mut session, &input)?;
            }
            print_json(&session.list_genomes())?;
        }
    }

    Ok(())
}
