// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use rotation_engine::config::EngineConfig;
use rotation_engine::logging;
use rotation_engine::pipeline::{RotationPipeline, RunOutcome};
use rotation_engine::providers::LocalWorkbook;
use rotation_engine::taxonomy::Taxonomy;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the week sheets and the report file
    #[arg(short, long, default_value = "./data")]
    data_dir: String,

    /// Engine configuration file (TOML)
    #[arg(short, long)]
    config: Option<String>,

    /// Taxonomy file (TOML) replacing the built-in exercise families
    #[arg(short, long)]
    taxonomy: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_from_env()?;

    let args = Args::parse();

    let config = EngineConfig::load(args.config)?;
    let taxonomy = Taxonomy::load(args.taxonomy)?;

    info!(
        data_dir = %args.data_dir,
        weeks = config.week_sheets.len(),
        report = %config.report_sheet,
        "Starting rotation analysis run"
    );

    let workbook = LocalWorkbook::new(&args.data_dir, config.report_sheet.as_str());
    let pipeline = RotationPipeline::new(&config, &taxonomy);

    match pipeline.run(&workbook, &workbook).await? {
        RunOutcome::NoWeekSheets => info!("No week sheets found"),
        RunOutcome::NoExercises => info!("No training rows present"),
        RunOutcome::Completed(summary) => info!(
            exercises = summary.exercises,
            overused = summary.overused,
            balanced = summary.balanced,
            underused = summary.underused,
            report_updated = summary.report_updated,
            "Rotation analysis complete"
        ),
    }

    Ok(())
}
