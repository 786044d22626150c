//! Menu model: title, body lines, selectable options and prompt.
//!
//! Pure data with accessor/mutator operations. The model never renders
//! and never reads input; see [`crate::render`] and [`crate::select`].

use crate::error::{MenuError, Result};
use crate::palette::ColorToken;

// ============================================================================
// LINE TYPES
// ============================================================================

/// Menu heading, drawn centered. Empty text suppresses the title section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleLine {
    pub text: String,
    pub color: ColorToken,
}

impl TitleLine {
    pub fn new(text: impl Into<String>, color: ColorToken) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// One left-aligned line in the menu body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyLine {
    pub text: String,
    pub color: ColorToken,
}

impl BodyLine {
    /// Body line in the default color.
    pub fn new(text: impl Into<String>) -> Self {
        Self::colored(text, ColorToken::Default)
    }

    pub fn colored(text: impl Into<String>, color: ColorToken) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// A choice the user can type.
///
/// `key` is the expected input token ("A", "X", ...), `label` the
/// description drawn next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOption {
    pub key: String,
    pub label: String,
    pub color: ColorToken,
}

impl SelectionOption {
    /// Option in the default color.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            color: ColorToken::Default,
        }
    }

    pub fn with_color(mut self, color: ColorToken) -> Self {
        self.color = color;
        self
    }
}

// ============================================================================
// MENU
// ============================================================================

/// A complete menu.
///
/// Line and option order is display order. Option keys should be unique
/// once case-folded; this is not enforced, and on duplicates the first
/// option wins during selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    title: TitleLine,
    lines: Vec<BodyLine>,
    selections: Vec<SelectionOption>,
    prompt: String,
}

impl Menu {
    /// Empty menu: no title, no lines, no options, empty prompt.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Title ---

    pub fn title(&self) -> &TitleLine {
        &self.title
    }

    pub fn set_title(&mut self, text: impl Into<String>, color: ColorToken) {
        self.title = TitleLine::new(text, color);
    }

    pub fn set_title_line(&mut self, title: TitleLine) {
        self.title = title;
    }

    // --- Body lines ---

    pub fn lines(&self) -> &[BodyLine] {
        &self.lines
    }

    pub fn set_lines(&mut self, lines: Vec<BodyLine>) {
        self.lines = lines;
    }

    /// Append a line in the default color. Returns the new line count.
    pub fn add_line(&mut self, text: impl Into<String>) -> usize {
        self.add_colored_line(text, ColorToken::Default)
    }

    /// Append a colored line. Returns the new line count.
    pub fn add_colored_line(&mut self, text: impl Into<String>, color: ColorToken) -> usize {
        self.lines.push(BodyLine::colored(text, color));
        self.lines.len()
    }

    /// Append several default-colored lines. Returns the new line count.
    pub fn add_lines<I, S>(&mut self, texts: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(texts.into_iter().map(BodyLine::new));
        self.lines.len()
    }

    /// Remove the line at `pos`, returning it.
    ///
    /// # Errors
    /// [`MenuError::OutOfRange`] if `pos` is not a valid index.
    pub fn remove_line(&mut self, pos: usize) -> Result<BodyLine> {
        if pos >= self.lines.len() {
            return Err(MenuError::OutOfRange {
                pos,
                len: self.lines.len(),
            });
        }
        Ok(self.lines.remove(pos))
    }

    /// Remove `count` lines starting at `start`, returning them in order.
    ///
    /// Bounds are checked before anything is removed.
    ///
    /// # Errors
    /// [`MenuError::RangeOutOfBounds`] if `start + count` exceeds the line count.
    pub fn remove_lines(&mut self, start: usize, count: usize) -> Result<Vec<BodyLine>> {
        let len = self.lines.len();
        match start.checked_add(count) {
            Some(end) if end <= len => Ok(self.lines.drain(start..end).collect()),
            _ => Err(MenuError::RangeOutOfBounds { start, count, len }),
        }
    }

    pub fn count_lines(&self) -> usize {
        self.lines.len()
    }

    // --- Selections ---

    pub fn selections(&self) -> &[SelectionOption] {
        &self.selections
    }

    pub fn set_selections(&mut self, selections: Vec<SelectionOption>) {
        self.selections = selections;
    }

    /// Append an option. Returns the new option count.
    pub fn add_selection(&mut self, option: SelectionOption) -> usize {
        self.selections.push(option);
        self.selections.len()
    }

    /// Append an option built from its parts. Returns the new option count.
    pub fn add_option(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        color: ColorToken,
    ) -> usize {
        self.add_selection(SelectionOption::new(key, label).with_color(color))
    }

    /// Append several options. Returns the new option count.
    pub fn add_selections(&mut self, options: impl IntoIterator<Item = SelectionOption>) -> usize {
        self.selections.extend(options);
        self.selections.len()
    }

    pub fn count_selections(&self) -> usize {
        self.selections.len()
    }

    // --- Prompt ---

    /// Prompt text; empty means "use the renderer's default prompt".
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }
}

// ============================================================================
// TESTS
// ============================================================================
