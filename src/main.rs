use doodle_stylizer::codec::write_json_file;
use doodle_stylizer::{config, Stylizer};
use std::env;
use std::fs;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "doodle_stylizer".to_string());
    let config = config::parse_cli(&program)?;

    let bytes = fs::read(&config.input)
        .map_err(|e| format!("Failed to read {}: {e}", config.input.display()))?;

    let stylizer = Stylizer::new(config.params.clone());
    let outcome = stylizer
        .process_with_diagnostics(&bytes)
        .map_err(|e| e.to_string())?;

    fs::write(&config.output, &outcome.png)
        .map_err(|e| format!("Failed to write {}: {e}", config.output.display()))?;
    println!(
        "Stylized {} -> {} ({}x{}, {:.3} ms)",
        config.input.display(),
        config.output.display(),
        outcome.report.canvas_width,
        outcome.report.canvas_height,
        outcome.report.timings.total_ms
    );

    if let Some(path) = &config.json_report {
        write_json_file(path, &outcome.report)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}
