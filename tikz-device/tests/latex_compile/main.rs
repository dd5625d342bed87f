//! LaTeX compile tests - typeset tikz-device output with a real TeX engine.
//!
//! Each test draws into a standalone document and runs `pdflatex` on it; a
//! test passes when the engine accepts the markup and produces a PDF.
//!
//! ## Prerequisites
//!
//! These tests require `pdflatex` with the `tikz` and `preview` packages on
//! the `PATH`. If it is not available, tests will be skipped.

mod common;

mod documents;
mod metrics;
