use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;

use ifc_mapper::export::{export_csv, export_json};
use ifc_mapper::ui::App;
use ifc_mapper::workflow::Workflow;

#[derive(Parser, Debug)]
#[command(name = "ifc-mapper")]
#[command(about = "IFC Mapper - convert non-BIM building data files to IFC element records")]
#[command(version)]
struct Args {
    /// Data files to process (Excel, CSV, Word or text)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Seed for the simulated extraction (reproducible runs)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Skip the wizard and export the auto-mapped result to CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Skip the wizard and export the auto-mapped result to JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.csv.is_some() || args.json.is_some() {
        let mut workflow = Workflow::new(args.seed);
        workflow.complete_upload(args.files)?;
        workflow.complete_preview();
        let suggestions = workflow.mappings().clone();
        workflow.complete_mapping(suggestions);
        workflow.complete_fill();

        if let Some(csv_path) = &args.csv {
            export_csv(workflow.processed(), csv_path)?;
            println!("Exported to CSV: {}", csv_path.display());
        }

        if let Some(json_path) = &args.json {
            export_json(workflow.processed(), json_path)?;
            println!("Exported to JSON: {}", json_path.display());
        }

        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(args.files, args.seed).run(terminal);
    ratatui::restore();
    result
}
