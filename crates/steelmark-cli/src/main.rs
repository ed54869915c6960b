use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use steelmark_base::Guid;
use steelmark_io::{InterchangeObject, export_catalog, import_catalog, resolve_grade, to_json};
use steelmark_material::{SteelGrade, catalog};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "steelmark")]
#[command(about = "Structural steel material records for model interchange")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    List,
    Show(ShowArgs),
    Export(ExportArgs),
    Inspect(InspectArgs),
}

#[derive(Args)]
struct ShowArgs {
    material: SteelGrade,
}

#[derive(Args)]
struct ExportArgs {
    #[arg(long)]
    out: PathBuf,
    /// Defaults to every built-in grade.
    #[arg(long = "material")]
    materials: Vec<SteelGrade>,
    #[arg(long)]
    with_application_id: bool,
}

#[derive(Args)]
struct InspectArgs {
    #[arg(long = "in")]
    input: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::List => list(),
        Command::Show(args) => show(args),
        Command::Export(args) => export(args),
        Command::Inspect(args) => inspect(args),
    }
}

fn list() -> Result<()> {
    for record in catalog() {
        println!("{record}");
    }
    Ok(())
}

fn show(args: ShowArgs) -> Result<()> {
    let text = to_json(&args.material.into()).context("failed to encode material")?;
    println!("{text}");
    Ok(())
}

fn export(args: ExportArgs) -> Result<()> {
    let objects = build_objects(args.materials, args.with_application_id);

    export_catalog(&args.out, &objects)
        .with_context(|| format!("failed to export catalog to {}", args.out.display()))?;
    info!(path = %args.out.display(), count = objects.len(), "catalog export complete");
    Ok(())
}

/// An empty selection means every built-in grade.
fn build_objects(
    materials: Vec<SteelGrade>,
    with_application_id: bool,
) -> Vec<InterchangeObject> {
    let grades = if materials.is_empty() {
        SteelGrade::ALL.to_vec()
    } else {
        materials
    };

    grades
        .into_iter()
        .map(|grade| {
            let object = InterchangeObject::from(grade);
            if with_application_id {
                object.with_application_id(Guid::new())
            } else {
                object
            }
        })
        .collect()
}

fn inspect(args: InspectArgs) -> Result<()> {
    let objects = import_catalog(&args.input)
        .with_context(|| format!("failed to read catalog {}", args.input.display()))?;

    for object in &objects {
        println!("{}", describe(object));
    }
    info!(count = objects.len(), "catalog inspected");
    Ok(())
}

fn describe(object: &InterchangeObject) -> String {
    let label = match resolve_grade(&object.record) {
        Ok(grade) => grade.to_string(),
        Err(err) => {
            warn!(%err, "object does not match a built-in grade");
            "unknown".to_string()
        }
    };
    match object.application_id {
        Some(id) => format!("{} [{label}] {id}", object.record),
        None => format!("{} [{label}]", object.record),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
