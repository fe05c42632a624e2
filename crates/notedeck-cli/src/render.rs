use std::cell::Cell;
use std::io::{self, BufRead, IsTerminal, Write};

use notedeck_core::rows::{ActionRow, NoteRow};
use notedeck_core::{ActionsView, Host, ListView, NotesView, StatsView};
use tracing::{debug, warn};
use unicode_width::UnicodeWidthStr;

/// Terminal stand-in for the page: lists print as tables, confirmations
/// read from stdin, alerts go to stderr.
#[derive(Debug)]
pub struct TerminalHost {
    assume_yes: bool,
    color: bool,
    failed: Cell<bool>,
}

impl TerminalHost {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            color: io::stdout().is_terminal(),
            failed: Cell::new(false),
        }
    }

    /// Whether any alert or inline load error was shown.
    pub fn had_failures(&self) -> bool {
        self.failed.get()
    }

    fn print_table(&self, title: &str, headers: Vec<String>, rows: Vec<Vec<String>>) {
        let mut out = io::stdout().lock();
        let result = writeln!(out, "{title}").and_then(|_| write_table(&mut out, headers, rows));
        if let Err(err) = result {
            warn!(error = %err, "failed to write table");
        }
    }

    fn print_line(&self, line: &str) {
        let mut out = io::stdout().lock();
        if let Err(err) = writeln!(out, "{line}") {
            warn!(error = %err, "failed to write line");
        }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

impl Host for TerminalHost {
    fn render_notes(&self, view: NotesView) {
        match view {
            ListView::Pending => debug!("notes cleared"),
            ListView::Ready { rows, .. } => {
                let (headers, cells) = note_table(&rows, |title| self.paint(title, "1"));
                self.print_table("Notes", headers, cells);
            }
            ListView::Failed(message) => {
                self.failed.set(true);
                self.print_line(&message);
            }
        }
    }

    fn render_actions(&self, view: ActionsView) {
        match view {
            ListView::Pending => debug!("action items cleared"),
            ListView::Ready { rows, .. } => {
                let (headers, cells) = action_table(&rows);
                self.print_table("Action items", headers, cells);
            }
            ListView::Failed(message) => {
                self.failed.set(true);
                self.print_line(&message);
            }
        }
    }

    fn render_stats(&self, view: StatsView) {
        match view {
            StatsView::Ready(summary) => self.print_line(&summary),
            StatsView::Failed(message) => {
                self.failed.set(true);
                self.print_line(&message);
            }
            StatsView::Hidden | StatsView::Pending => {}
        }
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            debug!(message, "confirmation assumed");
            return true;
        }

        let mut err = io::stderr().lock();
        if write!(err, "{message} [y/N] ").and_then(|_| err.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(err) => {
                warn!(error = %err, "failed to read confirmation");
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        self.failed.set(true);
        eprintln!("{}", self.paint(message, "31"));
    }

    fn reset_note_form(&self) {
        debug!("note form reset");
    }

    fn reset_action_form(&self) {
        debug!("action form reset");
    }

    fn reset_search(&self) {
        debug!("search reset");
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn note_table(
    rows: &[NoteRow],
    bold: impl Fn(&str) -> String,
) -> (Vec<String>, Vec<Vec<String>>) {
    let headers = vec!["ID".to_string(), "Title".to_string(), "Content".to_string()];
    let cells = rows
        .iter()
        .map(|row| vec![row.id.to_string(), bold(&row.title), row.content.clone()])
        .collect();
    (headers, cells)
}

fn action_table(rows: &[ActionRow]) -> (Vec<String>, Vec<Vec<String>>) {
    let headers = vec!["ID".to_string(), "Item".to_string(), "Actions".to_string()];
    let cells = rows
        .iter()
        .map(|row| {
            let controls = row
                .controls
                .iter()
                .map(|control| control.label().to_ascii_lowercase())
                .collect::<Vec<_>>()
                .join(", ");
            vec![row.id.to_string(), row.text.clone(), controls]
        })
        .collect();
    (headers, cells)
}

fn write_table<W: Write>(
    mut writer: W,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(writer, "(none)");
    }

    let column_count = headers.len();
    let mut widths = vec![0usize; column_count];

    for (idx, header) in headers.iter().enumerate() {
        widths[idx] = widths[idx].max(UnicodeWidthStr::width(header.as_str()));
    }

    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(strip_ansi(cell).as_str()));
        }
    }

    for idx in 0..column_count {
        write!(writer, "{:width$} ", headers[idx], width = widths[idx])?;
    }
    writeln!(writer)?;

    for width in &widths {
        write!(writer, "{:-<width$} ", "", width = *width)?;
    }
    writeln!(writer)?;

    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            let visible_width = UnicodeWidthStr::width(strip_ansi(cell).as_str());
            let padding = widths[idx].saturating_sub(visible_width);
            write!(writer, "{}{} ", cell, " ".repeat(padding))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if ch == 'm' {
                escaped = false;
            }
            continue;
        }

        if ch == '\x1b' {
            escaped = true;
            continue;
        }

        out.push(ch);
    }

    out
}
