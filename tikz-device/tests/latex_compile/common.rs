//! Shared test infrastructure for LaTeX compile tests.

use std::process::Command;
use std::sync::OnceLock;
use tempfile::TempDir;

// Re-export commonly used types so test modules can `use super::common::*`
pub use tikz_device::{
    CircleParams, Color, DeviceOptions, FillRule, FontFace, GraphicsParams, LineParams, LineType,
    Point, RectParams, TextParams, TikzDevice,
};

/// Check if pdflatex is available.
pub fn latex_available() -> bool {
    static AVAILABLE: OnceLock<bool> = OnceLock::new();
    *AVAILABLE.get_or_init(|| {
        match Command::new("pdflatex").arg("--version").output() {
            Ok(o) => o.status.success(),
            Err(_) => false,
        }
    })
}

/// Skip test if pdflatex is not available.
macro_rules! skip_if_no_latex {
    () => {
        if !crate::common::latex_available() {
            eprintln!("Skipping test: pdflatex not available");
            return;
        }
    };
}
pub(crate) use skip_if_no_latex;

/// Test case definition for compile tests.
pub struct LatexTestCase {
    pub name: &'static str,
    /// Device width in inches.
    pub width: f64,
    /// Device height in inches.
    pub height: f64,
    /// Drawing calls, made after the first page has been started.
    pub draw_fn: fn(&mut TikzDevice),
}

/// Draw the test case into a standalone document.
pub fn render(test: &LatexTestCase) -> Result<String, String> {
    let options = DeviceOptions {
        width: test.width,
        height: test.height,
        standalone: true,
        ..DeviceOptions::in_memory()
    };
    let mut dev =
        TikzDevice::new(options).map_err(|e| format!("Failed to create device: {}", e))?;
    dev.open()
        .map_err(|e| format!("Failed to open device: {}", e))?;
    let params = dev.default_params();
    dev.new_page(&params)
        .map_err(|e| format!("Failed to start page: {}", e))?;
    (test.draw_fn)(&mut dev);
    dev.close()
        .map_err(|e| format!("Failed to close device: {}", e))?;
    dev.take_output()
        .ok_or_else(|| "Device produced no output".to_string())
}

/// Typeset the test case and check that a PDF comes out.
pub fn run_compile_test(test: &LatexTestCase) -> Result<(), String> {
    let temp_dir = TempDir::new().map_err(|e| format!("Failed to create temp dir: {}", e))?;
    let tex_path = temp_dir.path().join(format!("{}.tex", test.name));
    let pdf_path = temp_dir.path().join(format!("{}.pdf", test.name));
    let log_path = temp_dir.path().join(format!("{}.log", test.name));

    let source = render(test)?;
    std::fs::write(&tex_path, &source).map_err(|e| format!("Failed to write source: {}", e))?;

    let output = Command::new("pdflatex")
        .arg("-interaction=batchmode")
        .arg("-halt-on-error")
        .arg(&tex_path)
        .current_dir(temp_dir.path())
        .output()
        .map_err(|e| format!("Failed to run pdflatex: {}", e))?;

    if !output.status.success() || !pdf_path.exists() {
        let log = std::fs::read_to_string(&log_path).unwrap_or_default();
        return Err(format!(
            "pdflatex rejected {}:\n--- source ---\n{}\n--- log ---\n{}",
            test.name, source, log
        ));
    }

    Ok(())
}
