//! Text metrics from an external typesetter.
//!
//! The markup cannot be measured without typesetting it, so every uncached
//! query writes a tiny LaTeX document that boxes the text, runs the engine,
//! and reads the box dimensions back from the log.

use std::collections::HashMap;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::{Engine, MetricsConfig};
use crate::error::{TikzError, TikzResult};
use crate::style::FontFace;
use crate::text::TextMetrics;

lazy_static! {
    static ref MARKER: Regex =
        Regex::new(r"(?m)^(width|ascent|descent)=(-?[0-9]*\.?[0-9]+)pt\s*$")
            .expect("marker pattern is valid");
}

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs a LaTeX source document and hands back its log.
pub trait Typesetter {
    /// Typeset `source`, returning the full log text.
    fn typeset(&mut self, source: &str) -> TikzResult<String>;
}

/// [`Typesetter`] that runs a LaTeX program in a scratch directory.
#[derive(Debug, Clone)]
pub struct LatexTypesetter {
    program: String,
    args: Vec<String>,
    jobname: String,
    timeout: Duration,
}

impl LatexTypesetter {
    pub fn new(config: &MetricsConfig, engine: Engine) -> Self {
        Self {
            program: config
                .program
                .clone()
                .unwrap_or_else(|| engine.latex_program().to_string()),
            args: config.args.clone(),
            jobname: config.jobname.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }

    fn expand_args(&self, dir: &Path, input: &Path) -> Vec<String> {
        let dir = dir.to_string_lossy();
        let input = input.to_string_lossy();
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{dir}", &dir)
                    .replace("{input}", &input)
                    .replace("{jobname}", &self.jobname)
            })
            .collect()
    }
}

impl Typesetter for LatexTypesetter {
    fn typeset(&mut self, source: &str) -> TikzResult<String> {
        let dir = tempfile::tempdir().map_err(|e| unavailable("scratch directory", e))?;
        let input = dir.path().join(format!("{}.tex", self.jobname));
        std::fs::write(&input, source).map_err(|e| unavailable("metrics input", e))?;

        let args = self.expand_args(dir.path(), &input);
        log::debug!(target: "tikz", "typesetter: {} {:?}", self.program, args);

        let mut child = Command::new(&self.program)
            .args(&args)
            .current_dir(dir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| unavailable(&format!("failed to start `{}`", self.program), e))?;

        let status = wait_with_timeout(&mut child, self.timeout)?;
        if !status.success() {
            // The log may still carry the dimensions, so keep going
            log::debug!(target: "tikz", "typesetter exited with {}", status);
        }

        let log_path = dir.path().join(format!("{}.log", self.jobname));
        let bytes = std::fs::read(&log_path).map_err(|e| unavailable("typesetter log", e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn unavailable(what: &str, err: impl std::fmt::Display) -> TikzError {
    TikzError::MetricsUnavailable(format!("{}: {}", what, err))
}

fn wait_with_timeout(child: &mut Child, timeout: Duration) -> TikzResult<ExitStatus> {
    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) if start.elapsed() >= timeout => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(TikzError::MetricsUnavailable(format!(
                    "typesetter timed out after {} ms",
                    timeout.as_millis()
                )));
            }
            Ok(None) => std::thread::sleep(POLL_INTERVAL),
            Err(e) => {
                let _ = child.kill();
                return Err(unavailable("waiting for typesetter", e));
            }
        }
    }
}

/// Extract box dimensions from a typesetter log.
///
/// The width marker is required; missing ascent or descent read as zero.
pub fn parse_log(log: &str) -> TikzResult<TextMetrics> {
    let mut width = None;
    let mut ascent = None;
    let mut descent = None;

    for caps in MARKER.captures_iter(log) {
        let value: f64 = caps[2].parse().map_err(|_| {
            TikzError::MetricsUnavailable(format!("malformed length `{}`", &caps[2]))
        })?;
        let slot = match &caps[1] {
            "width" => &mut width,
            "ascent" => &mut ascent,
            _ => &mut descent,
        };
        // First occurrence wins
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    let width = width.ok_or_else(|| {
        TikzError::MetricsUnavailable("no width marker in typesetter log".to_string())
    })?;
    Ok(TextMetrics {
        ascent: ascent.unwrap_or(0.0),
        descent: descent.unwrap_or(0.0),
        width,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MetricsKey {
    text: String,
    scale_bits: u64,
    face: FontFace,
}

/// Cached text measurement backed by a [`Typesetter`].
pub struct TextMetricsResolver {
    typesetter: Box<dyn Typesetter>,
    preamble: String,
    cache: HashMap<MetricsKey, TextMetrics>,
    invocations: usize,
}

impl TextMetricsResolver {
    /// `preamble` is the document class and package lines of the metrics
    /// document, so text is measured with the fonts the output will use.
    pub fn new(typesetter: Box<dyn Typesetter>, preamble: impl Into<String>) -> Self {
        Self {
            typesetter,
            preamble: preamble.into(),
            cache: HashMap::new(),
            invocations: 0,
        }
    }

    /// Ascent, descent and width of `text` at `scale` in `face`.
    pub fn measure(&mut self, text: &str, scale: f64, face: FontFace) -> TikzResult<TextMetrics> {
        let key = MetricsKey {
            text: text.to_string(),
            scale_bits: scale.to_bits(),
            face,
        };
        if let Some(metrics) = self.cache.get(&key) {
            return Ok(*metrics);
        }

        self.invocations += 1;
        log::info!(
            target: "tikz",
            "measuring \"{}\" with the typesetter (call {})",
            text,
            self.invocations
        );

        let source = self.source(text, face);
        let natural = parse_log(&self.typesetter.typeset(&source)?)?;
        let metrics = TextMetrics {
            ascent: natural.ascent * scale,
            descent: natural.descent * scale,
            width: natural.width * scale,
        };
        self.cache.insert(key, metrics);
        Ok(metrics)
    }

    /// Number of typesetter runs so far.
    pub fn invocations(&self) -> usize {
        self.invocations
    }

    /// Start counting runs from zero. Cached measurements are kept.
    pub fn reset_invocations(&mut self) {
        self.invocations = 0;
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    fn source(&self, text: &str, face: FontFace) -> String {
        format!(
            "{preamble}\\batchmode\n\
             \\begin{{document}}\n\
             \\sbox0{{{face}{text}}}\n\
             \\typeout{{width=\\the\\wd0}}\n\
             \\typeout{{ascent=\\the\\ht0}}\n\
             \\typeout{{descent=\\the\\dp0}}\n\
             \\end{{document}}\n",
            preamble = self.preamble,
            face = face.latex_switch(),
            text = text,
        )
    }
}
