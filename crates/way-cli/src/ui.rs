use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
    pub quiet: bool,
    pub format: OutputFormat,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let is_tty = std::io::stdout().is_terminal();
    let table_color = is_tty
        && flags.format == OutputFormat::Table
        && !flags.quiet
        && std::env::var_os("NO_COLOR").is_none();
    let progress = std::io::stderr().is_terminal() && !flags.quiet && flags.format != OutputFormat::Json;

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        progress,
        term_width,
        quiet: flags.quiet,
        format: flags.format,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        progress: false,
        term_width: None,
        quiet: false,
        format: OutputFormat::Table,
    })
}

/// Human-facing status line. Goes to stdout next to tables, to stderr when
/// stdout carries JSON, and nowhere in quiet mode.
pub fn notice(message: &str) {
    let prefs = prefs();
    if prefs.quiet {
        return;
    }
    if prefs.format == OutputFormat::Table {
        println!("{message}");
    } else {
        eprintln!("{message}");
    }
}
