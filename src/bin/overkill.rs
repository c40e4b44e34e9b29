use line_overkill::command::{OverkillCommand, OverkillSummary};
use line_overkill::config::overkill::{self, OverkillToolConfig};
use line_overkill::io::{load_drawing, write_json_file};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = overkill::load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    let mut drawing = load_drawing(&config.input).map_err(|e| e.to_string())?;
    let summary = OverkillCommand::new(config.reduce.clone())
        .execute(&mut drawing)
        .map_err(|e| e.to_string())?;

    write_json_file(&config.output.drawing_json, &drawing).map_err(|e| e.to_string())?;
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &summary).map_err(|e| e.to_string())?;
    }

    print_summary(&config, &summary);
    Ok(())
}

fn print_summary(config: &OverkillToolConfig, summary: &OverkillSummary) {
    println!(
        "Number of lines deleted: {} of {} selected",
        summary.report.casualty_count(),
        summary.selected
    );
    for group in &summary.report.groups {
        println!(
            "  {:<20} segments={:<6} deleted={:<6} comparisons={}",
            group.category.label(),
            group.segments,
            group.casualties,
            group.comparisons
        );
    }
    let timing = &summary.report.timing;
    println!(
        "  partition={:.3}ms reduce={:.3}ms total={:.3}ms",
        timing.partition_ms, timing.reduce_ms, timing.total_ms
    );
    println!(
        "Saved reduced drawing to {}",
        config.output.drawing_json.display()
    );
    if let Some(path) = &config.output.report_json {
        println!("Saved report to {}", path.display());
    }
}

fn usage() -> String {
    "Usage: overkill <config.json>".to_string()
}
