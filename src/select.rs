//! Selection input: read one line and match it against a menu's options.
//!
//! Matching is case-insensitive and otherwise exact: only the line
//! terminator is stripped, surrounding whitespace is kept. An unmatched
//! line is not an error, it comes back as a [`Selection`] carrying one
//! message. Re-prompting is left to the caller.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{MenuError, Result};
use crate::menu::Menu;
use crate::render::MenuRenderer;

/// Outcome of one selection attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Case-folded input that matched an option key.
    pub choice: Option<String>,
    /// Messages for the user; empty when `choice` is set.
    pub errors: Vec<String>,
}

impl Selection {
    pub fn is_valid(&self) -> bool {
        self.choice.is_some()
    }

    fn matched(choice: String) -> Self {
        Self {
            choice: Some(choice),
            errors: Vec::new(),
        }
    }

    fn invalid(input: &str) -> Self {
        Self {
            choice: None,
            errors: vec![format!("Invalid choice: \"{}\"", input)],
        }
    }
}

/// Case-fold input for comparison.
pub fn normalize(input: &str) -> String {
    input.to_lowercase()
}

/// Strip one trailing `\n` or `\r\n`, nothing else.
pub fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// Match `input` against the menu's options in display order.
///
/// The first option whose key equals the input after case folding wins.
pub fn validate_selection(menu: &Menu, input: &str) -> Selection {
    let folded = normalize(input);
    let hit = menu
        .selections()
        .iter()
        .any(|option| normalize(&option.key) == folded);

    if hit {
        debug!(choice = %folded, "selection accepted");
        Selection::matched(folded)
    } else {
        debug!(input = %folded, options = menu.count_selections(), "selection rejected");
        Selection::invalid(&folded)
    }
}

/// Read one line from `input` and validate it against `menu`.
///
/// # Errors
/// [`MenuError::InputClosed`] at end of input, [`MenuError::Io`] on read failure.
pub fn read_selection<R: BufRead>(menu: &Menu, input: &mut R) -> Result<Selection> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(MenuError::InputClosed);
    }
    Ok(validate_selection(menu, strip_line_ending(&line)))
}

/// Draw the menu's prompt, then read and validate one line.
pub fn get_valid_selection<W: Write, R: BufRead>(
    renderer: &mut MenuRenderer<W>,
    menu: &Menu,
    input: &mut R,
) -> Result<Selection> {
    renderer.draw_prompt(menu.prompt())?;
    read_selection(menu, input)
}

// ============================================================================
// TESTS
// ============================================================================
