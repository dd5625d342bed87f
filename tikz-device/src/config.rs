use serde::Deserialize;
use std::path::PathBuf;

use crate::error::TikzResult;

pub const DEFAULT_DOCUMENT_DECLARATION: &str = "\\documentclass[10pt]{article}\n";
pub const DEFAULT_PACKAGES: &str = "\\usepackage{tikz}\n\
\\usepackage[active,tightpage,psfixbb]{preview}\n\
\\PreviewEnvironment{pgfpicture}\n\
\\setlength\\PreviewBorder{0pt}\n";
pub const DEFAULT_FOOTER: &str = "\\end{document}\n";

/// TeX engine the output is meant for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    #[default]
    PdfTex,
    XeTex,
}

impl Engine {
    /// LaTeX program used for metrics when none is configured.
    pub fn latex_program(self) -> &'static str {
        match self {
            Engine::PdfTex => "pdflatex",
            Engine::XeTex => "xelatex",
        }
    }
}

/// Where the generated document goes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    /// Write to a file, created at device open.
    File(PathBuf),
    /// Write to standard output.
    Console,
    /// Keep the document in memory; see `TikzDevice::take_output`.
    Memory,
}

impl Default for OutputTarget {
    fn default() -> Self {
        OutputTarget::File(PathBuf::from("Rplots.tex"))
    }
}

/// How to run the external typesetter for text metrics.
///
/// `args` may contain the placeholders `{dir}` (working directory),
/// `{input}` (path of the generated `.tex` file) and `{jobname}`. The log is
/// read from `{dir}/{jobname}.log` once the process exits.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Program to run. `None` uses the engine's LaTeX program.
    pub program: Option<String>,
    /// Arguments, with placeholders substituted per run.
    pub args: Vec<String>,
    /// Job name of the generated document.
    pub jobname: String,
    /// Upper bound on a single run, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            program: None,
            args: vec![
                "-interaction=batchmode".into(),
                "-halt-on-error".into(),
                "-output-directory={dir}".into(),
                "-jobname={jobname}".into(),
                "{input}".into(),
            ],
            jobname: "tikz-metrics".into(),
            timeout_ms: 30_000,
        }
    }
}

/// Options fixed at device open.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeviceOptions {
    /// Output destination.
    pub output: OutputTarget,
    /// Device width in inches.
    pub width: f64,
    /// Device height in inches.
    pub height: f64,
    /// Background color (CSS syntax).
    pub bg: String,
    /// Foreground color (CSS syntax).
    pub fg: String,
    /// Document font size in points; font scales are relative to it.
    pub base_size: f64,
    /// Wrap the pictures in a complete LaTeX document.
    pub standalone: bool,
    /// Omit the `tikzpicture` environment around each page.
    ///
    /// The enclosing picture is then expected to set `x=1pt,y=1pt`.
    pub bare_bones: bool,
    /// `\documentclass` line for standalone output and metrics runs.
    pub document_declaration: String,
    /// Package lines for standalone output and metrics runs.
    pub packages: String,
    /// Closing lines for standalone output.
    pub footer: String,
    /// Escape TeX special characters in text.
    pub sanitize: bool,
    /// Target TeX engine.
    pub engine: Engine,
    /// Fractional digits of emitted coordinates.
    pub precision: usize,
    /// External typesetter settings.
    pub metrics: MetricsConfig,
}

impl Default for DeviceOptions {
    fn default() -> Self {
        Self {
            output: OutputTarget::default(),
            width: 7.0,
            height: 7.0,
            bg: "white".into(),
            fg: "black".into(),
            base_size: 10.0,
            standalone: false,
            bare_bones: false,
            document_declaration: DEFAULT_DOCUMENT_DECLARATION.into(),
            packages: DEFAULT_PACKAGES.into(),
            footer: DEFAULT_FOOTER.into(),
            sanitize: false,
            engine: Engine::default(),
            precision: 2,
            metrics: MetricsConfig::default(),
        }
    }
}

impl DeviceOptions {
    /// Parse options from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> TikzResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Options writing into memory, convenient for embedding and tests.
    pub fn in_memory() -> Self {
        Self {
            output: OutputTarget::Memory,
            ..Default::default()
        }
    }
}
