//! Line-oriented interactive session. Unlike one-shot commands it keeps the
//! manager alive between inputs, so the edit session can span several lines:
//! `edit 3`, `title ...`, `review ...`, `save`.

use super::render::{render_draft, render_messages, render_review_list};
use reelnotes::error::Result;
use reelnotes::manager::ReviewManager;
use reelnotes::model::{DraftField, ReviewId};
use reelnotes::store::SlotStore;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  list                     show all reviews
  add <title> | <review>   add a review (the title ends at the first `|`;
                           the review may contain more)
  edit <id>                start editing a review
  title <text>             change the draft title
  review <text>            change the draft review
  save                     save the draft (blank fields discard it)
  delete <id>              delete a review
  help                     show this help
  quit                     leave the shell
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Add { title: String, review: String },
    Edit(ReviewId),
    Title(String),
    Review(String),
    Save,
    Delete(ReviewId),
    Help,
    Quit,
}

/// Parse one input line. `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> std::result::Result<Option<ShellCommand>, String> {
    let line = line.trim_end_matches(['\n', '\r']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    let command = match word {
        "list" | "ls" => ShellCommand::List,
        "add" | "a" => {
            let (title, review) = rest
                .split_once('|')
                .ok_or_else(|| "usage: add <title> | <review>".to_string())?;
            ShellCommand::Add {
                title: title.to_string(),
                review: review.to_string(),
            }
        }
        "edit" | "e" => ShellCommand::Edit(parse_id(rest)?),
        "title" => ShellCommand::Title(rest.to_string()),
        "review" => ShellCommand::Review(rest.to_string()),
        "save" => ShellCommand::Save,
        "delete" | "rm" => ShellCommand::Delete(parse_id(rest)?),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command: {} (try `help`)", other)),
    };
    Ok(Some(command))
}

fn parse_id(text: &str) -> std::result::Result<ReviewId, String> {
    let text = text.trim();
    text.parse()
        .map_err(|_| format!("expected a review id, got {:?}", text))
}

fn prompt<S: SlotStore>(manager: &ReviewManager<S>) -> String {
    match manager.session().target_id() {
        Some(id) => format!("reelnotes [editing #{}]> ", id),
        None => "reelnotes> ".to_string(),
    }
}

/// Drive `manager` from `input` until `quit` or end of input.
pub fn run_shell<S, R, W>(manager: &mut ReviewManager<S>, input: R, out: &mut W) -> Result<()>
where
    S: SlotStore,
    R: BufRead,
    W: Write,
{
    write!(out, "{}", render_review_list(&manager.list().listed_reviews))?;
    write!(out, "{}", prompt(manager))?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => execute(manager, command, out)?,
            Err(hint) => writeln!(out, "{}", hint)?,
        }
        write!(out, "{}", prompt(manager))?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

fn execute<S: SlotStore, W: Write>(
    manager: &mut ReviewManager<S>,
    command: ShellCommand,
    out: &mut W,
) -> Result<()> {
    let shows_list = matches!(command, ShellCommand::List);
    let shows_draft = matches!(
        command,
        ShellCommand::Edit(_) | ShellCommand::Title(_) | ShellCommand::Review(_)
    );

    let result = match command {
        ShellCommand::List => manager.list(),
        ShellCommand::Add { title, review } => manager.add(&title, &review),
        ShellCommand::Edit(id) => manager.begin_edit(id),
        ShellCommand::Title(text) => manager.update_draft(DraftField::Title, text),
        ShellCommand::Review(text) => manager.update_draft(DraftField::Body, text),
        ShellCommand::Save => manager.commit_edit(),
        ShellCommand::Delete(id) => manager.delete(id),
        ShellCommand::Help => {
            write!(out, "{}", HELP)?;
            return Ok(());
        }
        ShellCommand::Quit => return Ok(()),
    };

    if shows_list {
        write!(out, "{}", render_review_list(&result.listed_reviews))?;
    }
    write!(out, "{}", render_messages(&result.messages))?;
    if shows_draft {
        write!(out, "{}", render_draft(manager.session()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelnotes::config::ReelConfig;
    use reelnotes::model::{seed_reviews, EditSession};
    use reelnotes::store::memory::InMemoryStore;

    fn seeded() -> ReviewManager<InMemoryStore> {
        ReviewManager::load(InMemoryStore::new(), &ReelConfig::default()).0
    }

    fn drive(manager: &mut ReviewManager<InMemoryStore>, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run_shell(manager, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("ls"), Ok(Some(ShellCommand::List)));
        assert_eq!(parse_line("edit 3"), Ok(Some(ShellCommand::Edit(3))));
        assert_eq!(parse_line("rm  2 "), Ok(Some(ShellCommand::Delete(2))));
        assert_eq!(
            parse_line("title Jaws 2"),
            Ok(Some(ShellCommand::Title("Jaws 2".into())))
        );
        assert_eq!(parse_line("title"), Ok(Some(ShellCommand::Title("".into()))));
        assert_eq!(
            parse_line("add Jaws | Bigger boat"),
            Ok(Some(ShellCommand::Add {
                title: "Jaws ".into(),
                review: " Bigger boat".into()
            }))
        );
    }

    #[test]
    fn command_word_may_be_followed_by_any_whitespace() {
        assert_eq!(parse_line("edit\t3"), Ok(Some(ShellCommand::Edit(3))));
        assert_eq!(
            parse_line("review\tIceberg!"),
            Ok(Some(ShellCommand::Review("Iceberg!".into())))
        );
        assert_eq!(parse_line("save\t"), Ok(Some(ShellCommand::Save)));
    }

    #[test]
    fn add_title_ends_at_first_bar() {
        assert_eq!(
            parse_line("add A|B | C"),
            Ok(Some(ShellCommand::Add {
                title: "A".into(),
                review: "B | C".into()
            }))
        );
        assert!(HELP.contains("the title ends at the first `|`"));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_line("add no separator").is_err());
        assert!(parse_line("edit three").is_err());
        assert!(parse_line("frobnicate").is_err());
    }

    #[test]
    fn edit_spans_several_lines() {
        let mut m = seeded();
        let out = drive(&mut m, "edit 2\ntitle Matrix Reloaded\nsave\nquit\n");

        assert!(out.contains("reelnotes [editing #2]> "));
        assert!(out.contains("Review updated (2): Matrix Reloaded"));
        assert_eq!(m.reviews().get(2).unwrap().title, "Matrix Reloaded");
        assert_eq!(m.session(), &EditSession::Idle);
    }

    #[test]
    fn blank_draft_is_discarded_on_save() {
        let mut m = seeded();
        drive(&mut m, "edit 1\nreview   \nsave\n");
        assert_eq!(m.reviews(), &seed_reviews());
        assert_eq!(m.session(), &EditSession::Idle);
    }

    #[test]
    fn switching_edits_drops_first_draft() {
        let mut m = seeded();
        drive(&mut m, "edit 1\ntitle Lost\nedit 3\nsave\n");
        assert_eq!(m.reviews(), &seed_reviews());
    }

    #[test]
    fn add_and_delete_from_shell() {
        let mut m = seeded();
        let out = drive(&mut m, "add Jaws | Bigger boat\ndelete 1\nlist\n");

        assert!(out.contains("Review added"));
        assert!(out.contains("Review deleted (1): Jurassic Park"));
        let titles: Vec<_> = m.reviews().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["The Matrix", "Titanic", "Jaws"]);
    }

    #[test]
    fn deleting_everything_brings_examples_back_when_configured() {
        let config = ReelConfig {
            reseed_when_empty: true,
            ..ReelConfig::default()
        };
        let mut m = ReviewManager::load(InMemoryStore::new(), &config).0;
        let out = drive(&mut m, "delete 1\ndelete 2\ndelete 3\nlist\n");

        assert!(out.contains("No reviews left, restoring examples"));
        assert!(!out.contains("No reviews yet."));
        assert_eq!(m.reviews(), &seed_reviews());
    }

    #[test]
    fn deleting_everything_leaves_empty_list_by_default() {
        let mut m = seeded();
        let out = drive(&mut m, "delete 1\ndelete 2\ndelete 3\nlist\n");
        assert!(out.contains("No reviews yet."));
        assert!(m.reviews().is_empty());
    }

    #[test]
    fn bad_input_does_not_end_session() {
        let mut m = seeded();
        let out = drive(&mut m, "bogus\ndelete 3\n");
        assert!(out.contains("unknown command: bogus"));
        assert_eq!(m.reviews().len(), 2);
    }

    #[test]
    fn ignored_operations_print_nothing() {
        let mut m = seeded();
        let out = drive(&mut m, "add   | Great!\ndelete 999\n");
        assert!(!out.contains("Review"));
        assert_eq!(m.reviews(), &seed_reviews());
    }
}
