//! Config and CLI argument handling for the demo binary.
//!
//! Parameters can be overridden from a JSON file; the file only needs to
//! list the knobs it changes thanks to `#[serde(default)]` on
//! [`StylizeParams`].

use crate::stylizer::StylizeParams;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct DemoConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Where to write the per-stage JSON report, if requested.
    pub json_report: Option<PathBuf>,
    pub params: StylizeParams,
}

/// Load stylization parameters from a JSON file.
pub fn load_params(path: &Path) -> Result<StylizeParams, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

/// Parse command-line arguments into a demo configuration.
pub fn parse_cli(program: &str) -> Result<DemoConfig, String> {
    parse_args(program, env::args().skip(1))
}

fn parse_args(
    program: &str,
    args: impl IntoIterator<Item = String>,
) -> Result<DemoConfig, String> {
    let usage =
        format!("Usage: {program} <input-image> <output-png> [--json <report>] [--config <params>]");
    let mut positional: Vec<String> = Vec::new();
    let mut json_report = None;
    let mut params = StylizeParams::default();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => {
                let path = iter.next().ok_or_else(|| usage.clone())?;
                json_report = Some(PathBuf::from(path));
            }
            "--config" => {
                let path = iter.next().ok_or_else(|| usage.clone())?;
                params = load_params(Path::new(&path))?;
            }
            "--help" | "-h" => return Err(usage),
            other if other.starts_with('-') => {
                return Err(format!("Unknown option '{other}'\n{usage}"));
            }
            _ => positional.push(arg),
        }
    }

    if positional.len() != 2 {
        return Err(usage);
    }
    let mut positional = positional.into_iter();
    Ok(DemoConfig {
        input: PathBuf::from(positional.next().unwrap()),
        output: PathBuf::from(positional.next().unwrap()),
        json_report,
        params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_positional_and_json_flag() {
        let cfg = parse_args("demo", args(&["in.png", "out.png", "--json", "r.json"])).unwrap();
        assert_eq!(cfg.input, PathBuf::from("in.png"));
        assert_eq!(cfg.output, PathBuf::from("out.png"));
        assert_eq!(cfg.json_report, Some(PathBuf::from("r.json")));
    }

    #[test]
    fn rejects_missing_positionals_and_unknown_flags() {
        assert!(parse_args("demo", args(&["in.png"])).is_err());
        assert!(parse_args("demo", args(&["in.png", "out.png", "--wat"])).is_err());
    }

    #[test]
    fn partial_params_file_keeps_other_defaults() {
        let parsed: StylizeParams = serde_json::from_str(r#"{ "eye_blur_sigma": 2.5 }"#).unwrap();
        assert_eq!(parsed.eye_blur_sigma, 2.5);
        assert_eq!(parsed.glow_passes, 3);
        assert_eq!(parsed.fallback_width, 800);
    }
}
