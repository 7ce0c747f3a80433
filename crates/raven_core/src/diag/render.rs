//! Text rendering for recorded diagnostics.
//!
//! Renders each occurrence as a headline (severity, optional code, message), the per-instance
//! detail, a `path:line:column` locator, optional source-line context with a caret underline, and
//! optional help text. Output goes into a `String`; printing is the caller's business.
//!
//! ## Notes
//! - Rendering never mutates reporter state and is idempotent.
//! - The caret run starts at `column - 1`, is at least one character long, and is clamped so it
//!   never overruns the printed line.

use super::metadata::DiagLevel;
use super::reporter::{DiagReporter, Diagnostic};

/// Maximum number of characters of a source line shown in context.
const MAX_RENDER_LINE: usize = 1024;

/// ANSI escape set used while rendering. The no-color variant holds empty strings so the
/// rendering code never branches on color support.
struct Colors {
    red_bold: &'static str,
    yellow_bold: &'static str,
    cyan: &'static str,
    bold: &'static str,
    dim: &'static str,
    reset: &'static str,
}

impl Colors {
    fn with_color() -> Self {
        Colors {
            red_bold: "\x1b[31m\x1b[1m",
            yellow_bold: "\x1b[33m\x1b[1m",
            cyan: "\x1b[36m",
            bold: "\x1b[1m",
            dim: "\x1b[2m",
            reset: "\x1b[0m",
        }
    }

    fn no_color() -> Self {
        Colors {
            red_bold: "",
            yellow_bold: "",
            cyan: "",
            bold: "",
            dim: "",
            reset: "",
        }
    }

    fn for_level(&self, level: DiagLevel) -> &'static str {
        match level {
            DiagLevel::Error | DiagLevel::Fatal => self.red_bold,
            DiagLevel::Warning => self.yellow_bold,
            DiagLevel::Note => self.cyan,
        }
    }
}

/// Human-readable severity label.
fn level_label(level: DiagLevel) -> &'static str {
    match level {
        DiagLevel::Note => "note",
        DiagLevel::Warning => "warning",
        DiagLevel::Error => "error",
        DiagLevel::Fatal => "fatal error",
    }
}

pub(super) fn render_all(reporter: &DiagReporter, source: Option<&str>, color: bool) -> String {
    let colors = if color {
        Colors::with_color()
    } else {
        Colors::no_color()
    };

    let mut out = String::new();
    for (i, diag) in reporter.entries().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_one(&mut out, reporter, diag, source, &colors);
    }
    out
}

fn render_one(
    out: &mut String,
    reporter: &DiagReporter,
    diag: &Diagnostic,
    source: Option<&str>,
    colors: &Colors,
) {
    // Occurrences always reference registered metadata; a stale entry is skipped, not a panic.
    let Some(metadata) = reporter.metadata_for(diag.diag) else {
        return;
    };

    let location = reporter.locations().get(diag.location);
    let level_color = colors.for_level(metadata.level);

    // Headline: severity, optional [code], message template.
    out.push_str(level_color);
    out.push_str(level_label(metadata.level));
    out.push_str(colors.reset);
    out.push_str(": ");
    if let Some(code) = &metadata.code {
        out.push_str(&format!("{}[{}]{} ", colors.bold, code, colors.reset));
    }
    out.push_str(&format!("{}{}{}\n", colors.bold, metadata.message, colors.reset));

    if !diag.detail.is_empty() {
        out.push_str(&diag.detail);
        out.push('\n');
    }

    // Locator line.
    let display_path = if location.path.is_empty() {
        "<unknown>"
    } else {
        &*location.path
    };
    out.push_str(&format!(
        "{}  --> {}{}{}:{}:{}{}\n",
        colors.dim, colors.reset, display_path, colors.dim, location.line, location.column, colors.reset
    ));

    if let Some(source) = source {
        render_source_context(out, source, &location, level_color, colors);
    }

    if let Some(help) = &metadata.help {
        out.push_str(&format!("{}  = {}help: {}\n", colors.dim, colors.reset, help));
    }
}

/// Print the target source line and a caret run underneath it.
fn render_source_context(
    out: &mut String,
    source: &str,
    location: &super::location::DiagLocation,
    level_color: &str,
    colors: &Colors,
) {
    let Some(line) = find_line(source, location.line) else {
        return;
    };

    let shown: String = line.chars().take(MAX_RENDER_LINE).collect();
    let shown_len = shown.chars().count();
    if shown_len == 0 {
        return;
    }

    out.push_str(&format!("{}{:>4} | {}{}\n", colors.dim, location.line, colors.reset, shown));
    out.push_str(&format!("{}     | {}", colors.dim, colors.reset));

    let caret_start = (location.column.saturating_sub(1) as usize).min(shown_len);
    let mut caret_len = location.length.max(1) as usize;
    if caret_start + caret_len > shown_len {
        caret_len = shown_len - caret_start;
    }

    out.push_str(&" ".repeat(caret_start));
    out.push_str(level_color);
    out.push_str(&"^".repeat(caret_len));
    out.push_str(colors.reset);
    out.push('\n');
}

/// Locate a 1-based line in the source buffer by counting newlines.
fn find_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }
    source.lines().nth(line as usize - 1)
}
