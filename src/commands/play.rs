//! Interactive play mode
//!
//! Line-based session: type a word, or `#` followed by tile positions to trace
//! a path (e.g. `#0,1,5`).

use crate::core::Path;
use crate::output::{print_grid, print_play_summary, print_submission};
use crate::puzzle::Puzzle;
use crate::scoring::{Session, Submission};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// What a single input line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayAction {
    Submitted(Submission),
    BadPath(String),
    ShowGrid,
    ShowFound(Vec<String>),
    /// Remaining word counts keyed by length
    Hint(BTreeMap<usize, usize>),
    Quit,
    Nothing,
}

/// Parse `#0,1,5` / `#0 1 5` into a path
///
/// # Errors
///
/// Returns an error if a position is not a number or the positions do not
/// form a simple adjacent path.
pub fn parse_path(input: &str) -> Result<Path, String> {
    let body = input.trim().trim_start_matches('#');
    let indices = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<usize>()
                .map_err(|_| format!("'{t}' is not a tile position"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if indices.is_empty() {
        return Err("Path needs at least one position".to_string());
    }
    Path::from_indices(indices).map_err(|e| e.to_string())
}

/// Apply one line of input to a session
pub fn handle_line(session: &mut Session, line: &str) -> PlayAction {
    let input = line.trim();

    match input.to_lowercase().as_str() {
        "" => PlayAction::Nothing,
        "quit" | "q" | "exit" => PlayAction::Quit,
        "grid" | "g" => PlayAction::ShowGrid,
        "found" | "f" => PlayAction::ShowFound(session.found().to_vec()),
        "hint" | "h" => {
            let mut counts = BTreeMap::new();
            for word in session.remaining() {
                *counts.entry(word.len()).or_insert(0) += 1;
            }
            PlayAction::Hint(counts)
        }
        _ if input.starts_with('#') => match parse_path(input) {
            Ok(path) => PlayAction::Submitted(session.submit_path(&path)),
            Err(e) => PlayAction::BadPath(e),
        },
        _ => PlayAction::Submitted(session.submit(input)),
    }
}

/// Score a batch of words in order, as if typed one after another
#[must_use]
pub fn score_words<S: AsRef<str>>(puzzle: &Puzzle, words: &[S]) -> (Vec<Submission>, u32) {
    let mut session = Session::new(puzzle);
    let submissions = words.iter().map(|w| session.submit(w.as_ref())).collect();
    (submissions, session.score())
}

/// Run the interactive play loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_play(puzzle: &Puzzle) -> Result<(), String> {
    let mut session = Session::new(puzzle);

    println!("\nFind words by tracing adjacent tiles (3+ letters).");
    println!("Type a word, or '#' and tile positions (0-15, row by row) like #0,1,5.");
    println!("Commands: 'grid', 'found', 'hint', 'quit'\n");
    print_grid(puzzle.grid(), None);
    println!();

    loop {
        let Some(line) = get_user_input(&format!("[{}] word", session.score()))? else {
            break;
        };

        match handle_line(&mut session, &line) {
            PlayAction::Submitted(submission) => {
                print_submission(&submission);
                if session.is_complete() {
                    println!("\n🎉 Every word found!");
                    break;
                }
            }
            PlayAction::BadPath(e) => println!("❌ {e}"),
            PlayAction::ShowGrid => print_grid(puzzle.grid(), None),
            PlayAction::ShowFound(found) => {
                if found.is_empty() {
                    println!("Nothing found yet.");
                } else {
                    println!("Found: {}", found.join(", "));
                }
            }
            PlayAction::Hint(counts) => {
                for (len, count) in counts {
                    println!("  {len} letters: {count} left");
                }
            }
            PlayAction::Quit => break,
            PlayAction::Nothing => {}
        }
    }

    print_play_summary(&session);
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;
    use crate::dictionary::DictionaryIndex;
    use crate::scoring::SubmissionStatus;
    use std::sync::Arc;

    fn puzzle() -> Puzzle {
        let grid: Grid = "c a x x / t s x x / x x x x / x x x x".parse().unwrap();
        Puzzle::from_grid(grid, Arc::new(DictionaryIndex::build("cat\ncats\nact\n")))
    }

    #[test]
    fn parse_path_accepts_commas_and_spaces() {
        assert_eq!(parse_path("#0,1,5").unwrap().indices(), &[0, 1, 5]);
        assert_eq!(parse_path("# 0 1  5").unwrap().indices(), &[0, 1, 5]);
    }

    #[test]
    fn parse_path_rejects_bad_input() {
        assert!(parse_path("#").is_err());
        assert!(parse_path("#0,x").is_err());
        assert!(parse_path("#0,2").is_err());
        assert!(parse_path("#0,1,0").is_err());
    }

    #[test]
    fn handle_line_submits_words() {
        let puzzle = puzzle();
        let mut session = Session::new(&puzzle);

        match handle_line(&mut session, "  Cats ") {
            PlayAction::Submitted(s) => {
                assert_eq!(s.word, "cats");
                assert_eq!(s.status, SubmissionStatus::New);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn handle_line_submits_paths() {
        let puzzle = puzzle();
        let mut session = Session::new(&puzzle);

        match handle_line(&mut session, "#1,0,4") {
            PlayAction::Submitted(s) => assert_eq!(s.word, "act"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            handle_line(&mut session, "#0,3"),
            PlayAction::BadPath(_)
        ));
    }

    #[test]
    fn handle_line_commands() {
        let puzzle = puzzle();
        let mut session = Session::new(&puzzle);

        assert_eq!(handle_line(&mut session, ""), PlayAction::Nothing);
        assert_eq!(handle_line(&mut session, "QUIT"), PlayAction::Quit);
        assert_eq!(handle_line(&mut session, "grid"), PlayAction::ShowGrid);

        session.submit("cat");
        assert_eq!(
            handle_line(&mut session, "found"),
            PlayAction::ShowFound(vec!["cat".to_string()])
        );

        let expected: BTreeMap<usize, usize> = [(4, 1), (3, 1)].into_iter().collect();
        assert_eq!(handle_line(&mut session, "hint"), PlayAction::Hint(expected));
    }

    #[test]
    fn score_words_runs_in_order() {
        let puzzle = puzzle();
        let (submissions, score) = score_words(&puzzle, &["cat", "cat", "it", "cats"]);

        let statuses: Vec<SubmissionStatus> = submissions.iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            vec![
                SubmissionStatus::New,
                SubmissionStatus::Duplicate,
                SubmissionStatus::Invalid,
                SubmissionStatus::New,
            ]
        );
        // 1, 0, 0 (floored), 2
        assert_eq!(score, 2);
    }
}
