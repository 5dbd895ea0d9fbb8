//! PDF export – tries a ranked chain of external converters and stops at
//! the first one that succeeds.
//!
//! Each candidate is probed for availability before it is invoked; an
//! absent tool is skipped silently, a failing one is logged and the scan
//! moves on. When the chain is exhausted the operation degrades to printing
//! manual completion steps instead of raising an error.
//!
//! Probing and process invocation go through the [`Toolchain`] trait so
//! tests can simulate tool presence and exit codes deterministically
//! instead of depending on the host machine.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::PressError;
use crate::export_config::ExportConfig;

// ---------------------------------------------------------------------------
// Toolchain abstraction
// ---------------------------------------------------------------------------

/// Captured result of one converter invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (0 = success). -1 when the process died without one.
    pub code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Access to the host environment: locating and running converter binaries.
pub trait Toolchain {
    /// Resolve a converter's executable, or `None` if it is not installed.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Run the executable to completion, capturing output. Blocks until the
    /// subprocess exits; no timeout is applied.
    fn run(&self, program: &Path, args: &[String]) -> io::Result<CommandOutput>;
}

/// The real host environment.
pub struct SystemToolchain;

impl Toolchain for SystemToolchain {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        let path = Path::new(program);
        if path.is_absolute() {
            // Known install location (e.g. a macOS application bundle).
            return path.is_file().then(|| path.to_path_buf());
        }
        which::which(program).ok()
    }

    fn run(&self, program: &Path, args: &[String]) -> io::Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(CommandOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

// ---------------------------------------------------------------------------
// Export scan
// ---------------------------------------------------------------------------

/// How the export stage finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// A converter produced the PDF.
    Exported { tool: String, output: PathBuf },
    /// Every candidate was unavailable or failed; manual steps were printed.
    Manual,
}

/// Convert an HTML document to PDF via the first working converter.
///
/// Scans `config.converters` in order. Unavailable tools are skipped,
/// failing ones logged; the first zero exit status wins and ends the scan.
/// If the chain is exhausted the manual-completion instructions are printed
/// to stderr once and the outcome is [`ExportOutcome::Manual`] — callers
/// should treat that as "not fully automated", not as an error.
///
/// Fails only when `html` does not exist; in that case no converter is
/// invoked at all.
pub fn export_pdf(
    html: &Path,
    pdf: &Path,
    config: &ExportConfig,
    tools: &dyn Toolchain,
) -> Result<ExportOutcome, PressError> {
    if !html.exists() {
        return Err(PressError::MissingInput(html.to_path_buf()));
    }

    // Browsers want a URL; wkhtmltopdf accepts one too.
    let input_url = file_url(html);
    let output_path = pdf.display().to_string();

    for spec in &config.converters {
        let Some(program) = tools.locate(&spec.program) else {
            log::debug!("{}: not installed, skipping", spec.name);
            continue;
        };

        log::info!("trying {} ({})", spec.name, program.display());
        let args = spec.resolved_args(&input_url, &output_path);
        match tools.run(&program, &args) {
            Ok(out) if out.code == 0 => {
                log::info!("PDF written to {} via {}", pdf.display(), spec.name);
                return Ok(ExportOutcome::Exported {
                    tool: spec.name.clone(),
                    output: pdf.to_path_buf(),
                });
            }
            Ok(out) => {
                log::warn!(
                    "{} exited with status {}: {}",
                    spec.name,
                    out.code,
                    String::from_utf8_lossy(&out.stderr).trim()
                );
            }
            Err(e) => {
                log::warn!("{} failed to launch: {}", spec.name, e);
            }
        }
    }

    eprintln!("{}", manual_instructions(html, pdf));
    Ok(ExportOutcome::Manual)
}

/// The text shown when no converter could produce the PDF.
pub fn manual_instructions(html: &Path, pdf: &Path) -> String {
    format!(
        "Automatic PDF conversion not available.\n\
         Manual conversion options:\n\
         1. Open {html} in your browser\n\
         2. Print the page (Cmd+P / Ctrl+P)\n\
         3. Choose 'Save as PDF' as the destination\n\
         4. Save as '{pdf}'\n\
         \n\
         Or install wkhtmltopdf and run again:\n\
         \x20 brew install wkhtmltopdf      (macOS)\n\
         \x20 apt install wkhtmltopdf       (Debian/Ubuntu)",
        html = html.display(),
        pdf = pdf.display(),
    )
}

fn file_url(path: &Path) -> String {
    let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    format!("file://{}", absolute.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export_config::ConverterSpec;
    use std::cell::RefCell;

    /// Scripted toolchain: each tool is either absent, or present with a
    /// fixed exit code. Records every invocation in order.
    struct FakeToolchain {
        tools: Vec<(&'static str, bool, i32)>,
        invoked: RefCell<Vec<String>>,
    }

    impl FakeToolchain {
        fn new(tools: Vec<(&'static str, bool, i32)>) -> Self {
            Self {
                tools,
                invoked: RefCell::new(Vec::new()),
            }
        }

        fn invocations(&self) -> Vec<String> {
            self.invoked.borrow().clone()
        }
    }

    impl Toolchain for FakeToolchain {
        fn locate(&self, program: &str) -> Option<PathBuf> {
            self.tools
                .iter()
                .find(|(name, available, _)| *name == program && *available)
                .map(|(name, _, _)| PathBuf::from(name))
        }

        fn run(&self, program: &Path, _args: &[String]) -> io::Result<CommandOutput> {
            let name = program.to_string_lossy().into_owned();
            self.invoked.borrow_mut().push(name.clone());
            let (_, _, code) = self
                .tools
                .iter()
                .find(|(n, _, _)| *n == name)
                .expect("ran a tool that was never scripted");
            Ok(CommandOutput {
                code: *code,
                stdout: Vec::new(),
                stderr: Vec::new(),
            })
        }
    }

    fn chain(names: &[&'static str]) -> ExportConfig {
        ExportConfig {
            converters: names
                .iter()
                .map(|n| ConverterSpec::new(n, n, &["{input}", "{output}"]))
                .collect(),
        }
    }

    fn existing_html() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("doc.html"), "<html></html>").unwrap();
        dir
    }

    #[test]
    fn first_successful_candidate_wins() {
        let dir = existing_html();
        let html = dir.path().join("doc.html");
        let pdf = dir.path().join("doc.pdf");

        let tools = FakeToolchain::new(vec![("tool-a", true, 0), ("tool-b", true, 0)]);
        let outcome = export_pdf(&html, &pdf, &chain(&["tool-a", "tool-b"]), &tools).unwrap();

        assert_eq!(
            outcome,
            ExportOutcome::Exported {
                tool: "tool-a".to_string(),
                output: pdf,
            }
        );
        // tool-b must never be invoked once tool-a succeeds.
        assert_eq!(tools.invocations(), vec!["tool-a"]);
    }

    #[test]
    fn unavailable_then_failing_then_succeeding() {
        let dir = existing_html();
        let html = dir.path().join("doc.html");
        let pdf = dir.path().join("doc.pdf");

        let tools = FakeToolchain::new(vec![
            ("tool-a", false, 0),
            ("tool-b", true, 1),
            ("tool-c", true, 0),
        ]);
        let outcome =
            export_pdf(&html, &pdf, &chain(&["tool-a", "tool-b", "tool-c"]), &tools).unwrap();

        match outcome {
            ExportOutcome::Exported { tool, .. } => assert_eq!(tool, "tool-c"),
            other => panic!("expected success via tool-c, got {other:?}"),
        }
        // tool-a skipped (never ran), tool-b attempted and failed.
        assert_eq!(tools.invocations(), vec!["tool-b", "tool-c"]);
    }

    #[test]
    fn exhausted_chain_degrades_to_manual() {
        let dir = existing_html();
        let html = dir.path().join("doc.html");
        let pdf = dir.path().join("doc.pdf");

        let tools = FakeToolchain::new(vec![("tool-a", false, 0), ("tool-b", true, 2)]);
        let outcome = export_pdf(&html, &pdf, &chain(&["tool-a", "tool-b"]), &tools).unwrap();

        assert_eq!(outcome, ExportOutcome::Manual);
        assert_eq!(tools.invocations(), vec!["tool-b"]);
    }

    #[test]
    fn single_unavailable_candidate_degrades_to_manual() {
        let dir = existing_html();
        let html = dir.path().join("doc.html");
        let pdf = dir.path().join("doc.pdf");

        let tools = FakeToolchain::new(vec![("tool-a", false, 0)]);
        let outcome = export_pdf(&html, &pdf, &chain(&["tool-a"]), &tools).unwrap();

        assert_eq!(outcome, ExportOutcome::Manual);
        assert!(tools.invocations().is_empty());
    }

    #[test]
    fn missing_input_invokes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("absent.html");
        let pdf = dir.path().join("doc.pdf");

        let tools = FakeToolchain::new(vec![("tool-a", true, 0)]);
        let result = export_pdf(&html, &pdf, &chain(&["tool-a"]), &tools);

        assert!(matches!(result, Err(PressError::MissingInput(_))));
        assert!(tools.invocations().is_empty());
    }

    #[test]
    fn spawn_error_moves_to_next_candidate() {
        struct Flaky {
            invoked: RefCell<Vec<String>>,
        }
        impl Toolchain for Flaky {
            fn locate(&self, program: &str) -> Option<PathBuf> {
                Some(PathBuf::from(program))
            }
            fn run(&self, program: &Path, _args: &[String]) -> io::Result<CommandOutput> {
                let name = program.to_string_lossy().into_owned();
                self.invoked.borrow_mut().push(name.clone());
                if name == "tool-a" {
                    Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
                } else {
                    Ok(CommandOutput {
                        code: 0,
                        stdout: Vec::new(),
                        stderr: Vec::new(),
                    })
                }
            }
        }

        let dir = existing_html();
        let html = dir.path().join("doc.html");
        let pdf = dir.path().join("doc.pdf");

        let tools = Flaky {
            invoked: RefCell::new(Vec::new()),
        };
        let outcome = export_pdf(&html, &pdf, &chain(&["tool-a", "tool-b"]), &tools).unwrap();

        match outcome {
            ExportOutcome::Exported { tool, .. } => assert_eq!(tool, "tool-b"),
            other => panic!("expected success via tool-b, got {other:?}"),
        }
        assert_eq!(*tools.invoked.borrow(), vec!["tool-a", "tool-b"]);
    }

    #[test]
    fn manual_instructions_name_both_files() {
        let text = manual_instructions(Path::new("doc.html"), Path::new("doc.pdf"));
        assert!(text.contains("doc.html"));
        assert!(text.contains("doc.pdf"));
        assert!(text.contains("wkhtmltopdf"));
    }
}
