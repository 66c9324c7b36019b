//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support and,
//! when the source text is attached, a one-line snippet with a caret under
//! the primary label.

use std::io::{self, Write};

use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source text so labels render with a snippet.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Consume the emitter and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
            Severity::Help => colors::HELP,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_label(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let _ = write!(self.writer, "  {marker} ");
        match label.pos {
            Some(pos) => {
                let _ = write!(self.writer, "{pos}: ");
            }
            None => {
                let _ = write!(self.writer, "{:?}: ", label.span);
            }
        }
        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };
        self.write_colored(&label.message, color);
        let _ = writeln!(self.writer);

        if label.is_primary {
            self.write_snippet(label);
        }
    }

    /// Render the source line under a label with a caret run.
    fn write_snippet(&mut self, label: &Label) {
        let Some(pos) = label.pos else {
            return;
        };
        let Some(line) = self
            .source
            .as_deref()
            .and_then(|src| src.lines().nth(pos.row.saturating_sub(1) as usize))
            .map(str::to_owned)
        else {
            return;
        };

        let gutter = pos.row.to_string();
        let pad = " ".repeat(gutter.len());
        let indent = " ".repeat(pos.col.saturating_sub(1) as usize);
        let carets = "^".repeat(label.span.len().max(1) as usize);
        let _ = writeln!(self.writer, "  {pad} |");
        let _ = writeln!(self.writer, "  {gutter} | {line}");
        let _ = write!(self.writer, "  {pad} | {indent}");
        self.write_colored(&carets, colors::ERROR);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            if self.colors {
                let _ = write!(self.writer, "{}help{}", colors::HELP, colors::RESET);
            } else {
                let _ = write!(self.writer, "help");
            }
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };
            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use tabula_ir::{Position, Span};

    fn sample_diagnostic() -> Diagnostic {
        Diagnostic::error(ErrorCode::E1002)
            .with_message("no production for `T` on `+`")
            .with_label_at(Span::new(5, 6), Position::new(1, 6), "unexpected `+`")
            .with_secondary_label(Span::new(3, 4), "after this operator")
            .with_note("`T` must start with `id` or `(`")
            .with_suggestion("remove the extra operator")
    }

    fn render(mut emitter: TerminalEmitter<Vec<u8>>, diag: &Diagnostic) -> String {
        emitter.emit(diag);
        emitter.flush();
        String::from_utf8(emitter.into_inner()).unwrap()
    }

    #[test]
    fn test_terminal_emitter_no_color() {
        let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, true);
        let text = render(emitter, &sample_diagnostic());
        assert!(text.starts_with("error[E1002]: no production"));
        assert!(text.contains("--> 1:6: unexpected `+`"));
        assert!(text.contains("3..4: after this operator"));
        assert!(text.contains("note: `T` must start"));
        assert!(text.contains("help: remove the extra operator"));
        assert!(!text.contains("\x1b["));
    }

    #[test]
    fn test_terminal_emitter_with_color() {
        let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
        let text = render(emitter, &sample_diagnostic());
        assert!(text.contains("\x1b["));
        assert!(text.contains("E1002"));
    }

    #[test]
    fn test_snippet_with_caret() {
        let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
            .with_source("id ++ id #");
        let text = render(emitter, &sample_diagnostic());
        assert!(text.contains("  1 | id ++ id #"));
        assert!(text.contains("  | ") && text.contains("     ^"));
    }

    #[test]
    fn test_snippet_skipped_for_missing_row() {
        let diag = Diagnostic::error(ErrorCode::E1001)
            .with_message("m")
            .with_label_at(Span::new(0, 1), Position::new(9, 1), "here");
        let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
            .with_source("one line");
        let text = render(emitter, &diag);
        assert!(!text.contains(" | "));
    }

    #[test]
    fn test_color_mode_resolution() {
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
        assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
        assert_eq!(ColorMode::parse("sometimes"), None);
    }

    #[test]
    fn test_emit_summary() {
        let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
        emitter.emit_summary(2, 1);
        let text = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(
            text,
            "error: aborting due to 2 previous errors; 1 warning emitted\n"
        );
    }

    #[test]
    fn test_emit_summary_warnings_only() {
        let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
        emitter.emit_summary(0, 3);
        let text = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(text, "warning: 3 warnings emitted\n");
    }
}
