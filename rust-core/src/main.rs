use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{info, warn};

use flack_coset::interfaces::{Algorithm, ReportFormat};
use flack_coset::jobs::{process_task, run_job_file, Task};
use flack_coset::lattice::{from_row_major, LatticeTransform};
use flack_coset::symmetries::PointGroup;

#[derive(Parser)]
#[command(name = "coset")]
#[command(about = "Twin laws from Flack's coset decomposition of crystallographic point groups")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run every task of a COSET job file
    Run {
        /// Job file path
        job_file: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },
    /// Decompose a catalog supergroup by a catalog subgroup
    Decompose {
        /// Holohedry symbol of the lattice, e.g. m-3m
        #[arg(long)]
        supergroup: String,

        /// Holohedry or rotation group symbol of the crystal, e.g. mmm or 222
        #[arg(long)]
        subgroup: String,

        /// Flack algorithm, A or B
        #[arg(short, long, default_value = "B")]
        algorithm: String,

        /// Re-activate inversion partners of the representatives (algorithm B, acentric subgroups)
        #[arg(long)]
        extended: bool,

        /// Subgroup to supergroup basis as nine numbers in row-major order
        #[arg(short, long)]
        transform: Option<String>,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },
    /// Print the operator catalog with fingerprints
    Catalog {
        /// Only this holohedry, by symbol (6/mmm) or catalog id
        #[arg(short, long)]
        group: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting coset v{}", flack_coset::VERSION);

    match cli.command {
        Commands::Run { job_file, format } => run(job_file, format.into()),
        Commands::Decompose {
            supergroup,
            subgroup,
            algorithm,
            extended,
            transform,
            format,
        } => decompose(
            &supergroup,
            &subgroup,
            &algorithm,
            extended,
            transform.as_deref(),
            format.into(),
        ),
        Commands::Catalog { group } => catalog(group.as_deref()),
    }
}

fn run(job_file: PathBuf, format: ReportFormat) -> Result<()> {
    let summary = run_job_file(&job_file, format)
        .with_context(|| format!("failed to run job file {}", job_file.display()))?;
    println!(
        "Program processed {} tasks input from file {}",
        summary.processed,
        job_file.display()
    );
    if summary.failed > 0 {
        warn!("{} of {} tasks failed", summary.failed, summary.processed);
    }
    Ok(())
}

fn parse_transform(text: &str) -> Result<LatticeTransform> {
    let values = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().with_context(|| format!("bad matrix element {:?}", s)))
        .collect::<Result<Vec<_>>>()?;
    let values: [f64; 9] = match values.try_into() {
        Ok(v) => v,
        Err(v) => bail!("a transformation needs 9 numbers, got {}", v.len()),
    };
    Ok(LatticeTransform::new(from_row_major(&values))?)
}

fn decompose(
    supergroup: &str,
    subgroup: &str,
    algorithm: &str,
    extended: bool,
    transform: Option<&str>,
    format: ReportFormat,
) -> Result<()> {
    let mut algorithm = Algorithm::from_directive(algorithm)?;
    if extended {
        if algorithm == Algorithm::B {
            algorithm = Algorithm::ExtendedB;
        } else {
            warn!("--extended only applies to algorithm B, ignoring it");
        }
    }

    let title = format!("{} crystal, {} lattice", subgroup, supergroup);
    let mut task = Task::new(title, algorithm, supergroup, subgroup)?;
    if let Some(text) = transform {
        task = task.with_transform(parse_transform(text)?);
    }

    let report = process_task(task)?;
    println!("{}", report.render(format)?);
    Ok(())
}

fn catalog(group: Option<&str>) -> Result<()> {
    let groups = match group {
        Some(name) => match name.parse::<u32>() {
            Ok(id) => vec![PointGroup::from_id(id)?],
            Err(_) => vec![PointGroup::from_name(name)?],
        },
        None => PointGroup::ALL.to_vec(),
    };

    for pg in groups {
        println!("Point group {} ({} operators)", pg, pg.order());
        for (i, op) in pg.select_operators().iter().enumerate() {
            let fp = op.fingerprint();
            let decoded = fp
                .decode()
                .with_context(|| format!("operator {} of {} does not decode", i + 1, pg))?;
            let difference = decoded - op.matrix();
            println!("{:3}  {:#07x}  {}", i + 1, fp, fp.bit_string());
            for row in 0..3 {
                println!(
                    "     {:4.0}{:4.0}{:4.0}   {:6.2}{:6.2}{:6.2}",
                    decoded[(row, 0)] + 0.0,
                    decoded[(row, 1)] + 0.0,
                    decoded[(row, 2)] + 0.0,
                    difference[(row, 0)] + 0.0,
                    difference[(row, 1)] + 0.0,
                    difference[(row, 2)] + 0.0
                );
            }
        }
        println!();
    }
    Ok(())
}
