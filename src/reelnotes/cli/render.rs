//! Terminal output. Everything here builds strings so it can be tested
//! without a terminal; the `print_*` wrappers are the only writers.

use colored::Colorize;
use reelnotes::commands::{CmdMessage, DisplayReview, MessageLevel};
use reelnotes::model::{Draft, EditSession};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
const BODY_INDENT: &str = "      ";
const EDIT_MARKER: &str = "✎";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

pub fn render_review_list(reviews: &[DisplayReview]) -> String {
    if reviews.is_empty() {
        return "No reviews yet.\n".to_string();
    }

    let mut out = String::new();
    for dr in reviews {
        let marker = if dr.editing { EDIT_MARKER } else { " " };
        let index = format!("{:>3}. ", dr.position);
        let id = format!("#{}", dr.review.id);

        let fixed = marker.width() + 1 + index.width() + id.width() + 1;
        let title = truncate_to_width(&dr.review.title, LINE_WIDTH.saturating_sub(fixed));
        let padding = LINE_WIDTH.saturating_sub(fixed + title.width());

        let index = if dr.editing {
            index.yellow()
        } else {
            index.normal()
        };
        out.push_str(&format!(
            "{} {}{}{} {}\n",
            marker,
            index,
            title.bold(),
            " ".repeat(padding),
            id.dimmed()
        ));

        for line in dr.review.body.lines() {
            let line = truncate_to_width(line, LINE_WIDTH.saturating_sub(BODY_INDENT.len()));
            out.push_str(&format!("{}{}\n", BODY_INDENT, line));
        }
    }
    out
}

pub fn print_review_list(reviews: &[DisplayReview]) {
    print!("{}", render_review_list(reviews));
}

/// The draft being edited, shown by the shell after each change.
pub fn render_draft(session: &EditSession) -> String {
    match session {
        EditSession::Idle => String::new(),
        EditSession::Editing { target_id, draft } => {
            let Draft { title, body } = draft;
            format!(
                "{} {}\n  {} {}\n  {} {}\n",
                "Editing".yellow(),
                format!("#{}", target_id).dimmed(),
                "title: ".dimmed(),
                title,
                "review:".dimmed(),
                body
            )
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
