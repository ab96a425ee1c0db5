//! # Rendering
//!
//! Turns command results into terminal text. Every function returns a `String` so the
//! output can be tested without a terminal; the `print_*` wrappers do the writing.
//!
//! Layout (width, truncation, padding) is computed on plain text first and colored
//! last, so ANSI codes never count towards column widths.

use super::styles::Painter;
use chrono::{DateTime, Utc};
use scribble::api::{CmdMessage, MessageLevel};
use scribble::config::ScribbleConfig;
use scribble::index::{DisplayIndex, DisplayNote};
use scribble::theme::Theme;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const PREVIEW_CHARS: usize = 60;
const RULE: &str = "--------------------------------";
const SEPARATOR: &str = "================================";

pub fn render_note_list(notes: &[DisplayNote], empty_message: &str, painter: &Painter) -> String {
    render_note_list_at(notes, empty_message, painter, Utc::now())
}

fn render_note_list_at(
    notes: &[DisplayNote],
    empty_message: &str,
    painter: &Painter,
    now: DateTime<Utc>,
) -> String {
    if notes.is_empty() {
        return format!("{}\n", empty_message);
    }

    let palette = painter.palette;
    let mut output = String::new();

    for dn in notes {
        let is_trashed = dn.note.is_trashed();
        let idx_str = format!("{}. ", dn.index);
        let left_pad = "    ";

        // Trashed notes show when they were deleted, active ones when last touched
        let stamp = dn.note.deleted_at.unwrap_or_else(|| dn.note.touched_at());
        let time_ago = format_time_ago(stamp, now);

        let preview = dn.note.preview(PREVIEW_CHARS);
        let fixed_width = left_pad.width() + idx_str.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let title = truncate_to_width(&dn.note.title, available);
        let title_width = title.width();
        let preview = if preview.is_empty() || title_width + 1 >= available {
            String::new()
        } else {
            truncate_to_width(&preview, available - title_width - 1)
        };
        let used = title_width + if preview.is_empty() { 0 } else { preview.width() + 1 };
        let padding = " ".repeat(available.saturating_sub(used));

        let idx_colored = if is_trashed {
            painter.paint(&idx_str, palette.index_trashed)
        } else {
            painter.paint(&idx_str, palette.index)
        };
        let preview_colored = if preview.is_empty() {
            String::new()
        } else {
            format!(" {}", painter.paint(&preview, palette.preview))
        };

        output.push_str(&format!(
            "{}{}{}{}{}  {}\n",
            left_pad,
            idx_colored,
            painter.bold(&title, palette.title),
            preview_colored,
            padding,
            painter.dimmed(&time_ago, palette.time)
        ));
    }

    output
}

/// Full view of each note: header line, rule, body.
pub fn render_full_notes(notes: &[DisplayNote], painter: &Painter) -> String {
    if notes.is_empty() {
        return "No notes found.\n".to_string();
    }

    let palette = painter.palette;
    let mut output = String::new();

    for (i, dn) in notes.iter().enumerate() {
        if i > 0 {
            output.push_str(&format!("\n{}\n\n", painter.paint(SEPARATOR, palette.rule)));
        }
        let idx_color = match dn.index {
            DisplayIndex::Active(_) => palette.index,
            DisplayIndex::Trashed(_) => palette.index_trashed,
        };
        output.push_str(&format!(
            "{} {}\n",
            painter.paint(&dn.index.to_string(), idx_color),
            painter.bold(&dn.note.title, palette.title)
        ));
        output.push_str(&format!("{}\n", painter.paint(RULE, palette.rule)));
        output.push('\n');
        if !dn.note.content.is_empty() {
            output.push_str(&dn.note.content);
            output.push('\n');
        }
    }

    output
}

/// One-line footer under the active list, the terminal stand-in for a trash badge.
pub fn render_trash_count(count: usize, painter: &Painter) -> String {
    if count == 0 {
        return String::new();
    }
    let label = format!("Trash: {} (scribble trash)", count);
    format!("\n{}\n", painter.dimmed(&label, painter.palette.time))
}

pub fn render_messages(messages: &[CmdMessage], painter: &Painter) -> String {
    use colored::Colorize;

    messages
        .iter()
        .map(|msg| {
            let text = msg.content.as_str();
            let line = if !painter.color {
                text.to_string()
            } else {
                match msg.level {
                    MessageLevel::Info => text.dimmed().to_string(),
                    MessageLevel::Success => text.green().to_string(),
                }
            };
            format!("{}\n", line)
        })
        .collect()
}

pub fn render_theme(theme: Theme) -> String {
    format!("theme = {}\n", theme)
}

pub fn render_config(config: &ScribbleConfig) -> String {
    scribble::config::CONFIG_KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

pub fn print_messages(messages: &[CmdMessage], painter: &Painter) {
    let output = render_messages(messages, painter);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    // Align unit words under "seconds" (7 chars). Match on " ago" so "hour" does not
    // hit "hours".
    let time_str = time_str
        .replace("hours ago", "  hours ago")
        .replace("hour ago", "   hour ago")
        .replace("days ago", "   days ago")
        .replace("day ago", "    day ago")
        .replace("weeks ago", "  weeks ago")
        .replace("week ago", "   week ago")
        .replace("months ago", " months ago")
        .replace("month ago", "  month ago")
        .replace("years ago", "  years ago")
        .replace("year ago", "   year ago");

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
