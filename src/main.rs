//! press – command-line markdown → HTML/PDF converter.
//!
//! Usage:
//!   press <input.md>... [--pdf] [--pdf-output out.pdf] [--title "My Doc"]
//!         [--converters chain.json] [--strict]
//!
//! Each input is rendered to a styled HTML file next to it (same stem).
//! With `--pdf`, the external-converter chain is tried afterwards; when no
//! converter is usable the run still succeeds and manual completion steps
//! are printed.

use std::{env, fs, path::PathBuf, process};

use md_press::export::SystemToolchain;
use md_press::export_config::ExportConfig;
use md_press::pipeline::{render_document, RenderConfig};
use md_press::ExportOutcome;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut inputs: Vec<PathBuf> = Vec::new();
    let mut pdf = false;
    let mut pdf_output: Option<PathBuf> = None;
    let mut title: Option<String> = None;
    let mut converters_file: Option<PathBuf> = None;
    let mut strict = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--pdf" | "-p" => pdf = true,
            "--pdf-output" | "-o" => match iter.next() {
                Some(v) => pdf_output = Some(PathBuf::from(v)),
                None => {
                    eprintln!("Error: --pdf-output requires a path.");
                    process::exit(1);
                }
            },
            "--title" | "-t" => match iter.next() {
                Some(v) => title = Some(v.clone()),
                None => {
                    eprintln!("Error: --title requires a value.");
                    process::exit(1);
                }
            },
            "--converters" | "-c" => match iter.next() {
                Some(v) => converters_file = Some(PathBuf::from(v)),
                None => {
                    eprintln!("Error: --converters requires a path.");
                    process::exit(1);
                }
            },
            "--strict" => strict = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown flag: {other}");
                print_usage(&args[0]);
                process::exit(1);
            }
            path => inputs.push(PathBuf::from(path)),
        }
    }

    if inputs.is_empty() {
        eprintln!("Error: no input file specified.");
        print_usage(&args[0]);
        process::exit(1);
    }
    if pdf_output.is_some() && inputs.len() > 1 {
        eprintln!("Error: --pdf-output requires a single input file.");
        process::exit(1);
    }

    let export = match &converters_file {
        Some(path) => {
            let json = match fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error reading '{}': {e}", path.display());
                    process::exit(1);
                }
            };
            match ExportConfig::from_json(&json) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error parsing '{}': {e}", path.display());
                    process::exit(1);
                }
            }
        }
        None => ExportConfig::default(),
    };

    let tools = SystemToolchain;
    let mut failed = false;
    let mut degraded = false;

    for input in &inputs {
        let config = RenderConfig {
            title: title.clone(),
            pdf,
            pdf_path: pdf_output.clone(),
            export: export.clone(),
        };

        match render_document(input, &config, &tools) {
            Ok(doc) => {
                eprintln!("Wrote '{}'", doc.html_path.display());
                match doc.export {
                    Some(ExportOutcome::Exported { tool, output }) => {
                        eprintln!("Wrote '{}' (via {tool})", output.display());
                    }
                    Some(ExportOutcome::Manual) => degraded = true,
                    None => {}
                }
            }
            // A bad input aborts that file only; keep going with the rest.
            Err(e) => {
                eprintln!("Error: {e}");
                failed = true;
            }
        }
    }

    if strict && (failed || degraded) {
        process::exit(1);
    }
}

fn print_usage(prog: &str) {
    eprintln!("press – markdown to HTML/PDF converter (md-press)");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog} <input.md>... [--pdf] [--pdf-output out.pdf] [--title \"My Doc\"]");
    eprintln!("         [--converters chain.json] [--strict]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <input.md>...    Markdown files; each becomes <stem>.html next to it");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --pdf, -p          Also export a PDF through the converter chain");
    eprintln!("  --pdf-output, -o   PDF path (single input only; implies --pdf)");
    eprintln!("  --title, -t        Document title (default: input filename stem)");
    eprintln!("  --converters, -c   JSON file overriding the converter chain");
    eprintln!("  --strict           Exit non-zero if any file failed or needed manual steps");
    eprintln!("  --help             Print this message");
}
