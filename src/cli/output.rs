//! CLI output writer and progress indicator

use std::time::Duration;

use clap::ValueEnum;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

/// Output format for CLI results
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed output (default)
    #[default]
    Table,
    /// JSON output for machine processing
    Json,
    /// Plain text output without styling
    Plain,
}

/// Writes CLI output respecting format and quiet flags.
///
/// In JSON mode stdout carries only the serialized artifact, so the
/// decorative writers become no-ops and errors still go to stderr.
pub struct OutputWriter {
    format: OutputFormat,
    quiet: bool,
    verbose: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn decorating(&self) -> bool {
        !self.quiet && self.format != OutputFormat::Json
    }

    pub fn header(&self, text: &str) {
        if !self.decorating() {
            return;
        }
        match self.format {
            OutputFormat::Plain => println!("\n{text}"),
            _ => println!("\n{}", style(text).bold().underlined()),
        }
    }

    pub fn print(&self, text: &str) {
        if self.decorating() {
            println!("{text}");
        }
    }

    pub fn info(&self, text: &str) {
        if self.decorating() {
            println!("{text}");
        }
    }

    pub fn success(&self, text: &str) {
        if !self.decorating() {
            return;
        }
        match self.format {
            OutputFormat::Plain => println!("{text}"),
            _ => println!("{}", style(text).green()),
        }
    }

    pub fn warn(&self, text: &str) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Plain => eprintln!("warning: {text}"),
            _ => eprintln!("{} {text}", style("warning:").yellow().bold()),
        }
    }

    /// Errors print even in quiet mode
    pub fn error(&self, text: &str) {
        match self.format {
            OutputFormat::Plain => eprintln!("error: {text}"),
            _ => eprintln!("{} {text}", style("error:").red().bold()),
        }
    }

    pub fn verbose(&self, text: &str) {
        if self.verbose && self.decorating() {
            println!("{text}");
        }
    }

    /// Pretty-printed JSON; ignores the quiet flag since JSON output is
    /// the requested artifact
    pub fn json<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// Spinner shown during longer operations
pub struct ProgressIndicator {
    bar: ProgressBar,
}

impl ProgressIndicator {
    pub fn spinner(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}").expect("valid progress template"),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_message(message.to_string());
        Self { bar }
    }

    pub fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    pub fn finish_and_clear(self) {
        self.bar.finish_and_clear();
    }
}
