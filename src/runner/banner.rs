//! Banner rendering and the reporter seam
//!
//! The banner is printed to standard output right before a test binary is
//! started, so it marks where that binary's inherited output begins.

use std::io::{self, Write};

use super::TestBinary;

const RULE_LEFT: &str = "================";
const RULE_RIGHT: &str = "=======================";

/// The single framed line naming the test.
pub fn banner_line(name: &str) -> String {
    format!("{RULE_LEFT} RUNNING TEST: '{name}' {RULE_RIGHT}")
}

/// The full banner: three blank lines, the framed line, three blank lines.
///
/// Callers print it with a trailing newline.
pub fn render_banner(name: &str) -> String {
    format!("\n\n\n{}\n\n\n", banner_line(name))
}

// ============================================================================
// Reporter Trait
// ============================================================================

/// Receives run events from the runner.
///
/// Implement this to redirect or reformat what is printed around each test.
pub trait RunReporter {
    /// Called immediately before a test binary is spawned.
    fn on_test_start(&mut self, test: &TestBinary) -> io::Result<()>;
}

/// Default reporter: writes the banner and flushes.
#[derive(Debug)]
pub struct BannerReporter<W: Write> {
    out: W,
}

impl BannerReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> BannerReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RunReporter for BannerReporter<W> {
    fn on_test_start(&mut self, test: &TestBinary) -> io::Result<()> {
        writeln!(self.out, "{}", render_banner(&test.name))?;
        // the child shares this stream; the banner must land first
        self.out.flush()
    }
}
