//! Export config – the ordered converter chain as an explicit configuration
//! value. Order encodes preference: the dedicated HTML→PDF tool first, then
//! headless browser variants.

use serde::{Deserialize, Serialize};

/// One external converter the export stage may try.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterSpec {
    /// Short display name used in diagnostics.
    pub name: String,
    /// Executable name resolved on PATH, or an absolute install path.
    pub program: String,
    /// Argument template. `{input}` is replaced with a `file://` URL of the
    /// HTML document, `{output}` with the PDF path.
    pub args: Vec<String>,
}

impl ConverterSpec {
    pub fn new(name: &str, program: &str, args: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Substitute the input/output placeholders into the argument template.
    pub fn resolved_args(&self, input: &str, output: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.replace("{input}", input).replace("{output}", output))
            .collect()
    }
}

/// The converter chain, tried in order until one succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub converters: Vec<ConverterSpec>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            converters: vec![
                ConverterSpec::new(
                    "wkhtmltopdf",
                    "wkhtmltopdf",
                    &[
                        "--page-size",
                        "A4",
                        "--margin-top",
                        "20mm",
                        "--margin-right",
                        "20mm",
                        "--margin-bottom",
                        "20mm",
                        "--margin-left",
                        "20mm",
                        "--encoding",
                        "UTF-8",
                        "--print-media-type",
                        "{input}",
                        "{output}",
                    ],
                ),
                ConverterSpec::new(
                    "Google Chrome (app bundle)",
                    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
                    HEADLESS_BROWSER_ARGS,
                ),
                ConverterSpec::new(
                    "Chromium (app bundle)",
                    "/Applications/Chromium.app/Contents/MacOS/Chromium",
                    HEADLESS_BROWSER_ARGS,
                ),
                ConverterSpec::new("google-chrome", "google-chrome", HEADLESS_BROWSER_ARGS),
                ConverterSpec::new(
                    "chromium-browser",
                    "chromium-browser",
                    HEADLESS_BROWSER_ARGS,
                ),
            ],
        }
    }
}

/// Headless-browser invocation shared by every Chrome/Chromium variant.
const HEADLESS_BROWSER_ARGS: &[&str] = &[
    "--headless",
    "--disable-gpu",
    "--print-to-pdf={output}",
    "--no-margins",
    "{input}",
];

impl ExportConfig {
    /// Serialise to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Deserialise from JSON.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chain_prefers_dedicated_tool() {
        let config = ExportConfig::default();
        assert_eq!(config.converters[0].program, "wkhtmltopdf");
        // Browser variants follow, app bundles before PATH names.
        assert!(config.converters.len() >= 3);
        assert!(config.converters[1].program.starts_with("/Applications"));
    }

    #[test]
    fn placeholder_substitution() {
        let spec = ConverterSpec::new("t", "t", &["--print-to-pdf={output}", "{input}"]);
        let args = spec.resolved_args("file:///tmp/doc.html", "/tmp/doc.pdf");
        assert_eq!(args[0], "--print-to-pdf=/tmp/doc.pdf");
        assert_eq!(args[1], "file:///tmp/doc.html");
    }

    #[test]
    fn json_roundtrip() {
        let config = ExportConfig::default();
        let json = config.to_json();
        let parsed = ExportConfig::from_json(&json).unwrap();
        assert_eq!(config.converters.len(), parsed.converters.len());
        assert_eq!(config.converters[0].args, parsed.converters[0].args);
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(ExportConfig::from_json("not json").is_err());
    }
}
