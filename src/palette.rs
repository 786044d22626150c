//! Semantic color tokens and their terminal color table.
//!
//! Menus only ever name a [`ColorToken`]. The mapping onto actual
//! terminal colors lives in a [`Palette`], so callers (and the config
//! file) can restyle a menu without touching the model.
//!
//! Default table:
//! - Red: errors, weak
//! - Dark red: raw exception output, very weak
//! - Green: success, very strong
//! - Dark green: instructions, strong
//! - Cyan: good
//! - Magenta: account entries
//! - Dark blue: titles
//! - Terminal default: everything else

use std::collections::BTreeMap;

use crossterm::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

// ============================================================================
// TOKENS
// ============================================================================

/// Semantic color identifier, independent of the terminal's color model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    ErrorMessage,
    ExceptionMessage,
    SuccessMessage,
    InstructionsMessage,
    Account,
    Title,
    VeryWeak,
    Weak,
    Good,
    Strong,
    VeryStrong,
    #[default]
    Default,
}

impl ColorToken {
    /// Every token, in declaration order.
    pub const ALL: [ColorToken; 12] = [
        ColorToken::ErrorMessage,
        ColorToken::ExceptionMessage,
        ColorToken::SuccessMessage,
        ColorToken::InstructionsMessage,
        ColorToken::Account,
        ColorToken::Title,
        ColorToken::VeryWeak,
        ColorToken::Weak,
        ColorToken::Good,
        ColorToken::Strong,
        ColorToken::VeryStrong,
        ColorToken::Default,
    ];
}

/// Pick the severity token for a 0-100 strength score.
///
/// Scores above 100 are treated as 100.
pub fn strength_color(percent: u8) -> ColorToken {
    match percent.min(100) {
        0..=19 => ColorToken::VeryWeak,
        20..=39 => ColorToken::Weak,
        40..=59 => ColorToken::Good,
        60..=79 => ColorToken::Strong,
        _ => ColorToken::VeryStrong,
    }
}

// ============================================================================
// PALETTE
// ============================================================================

/// Built-in terminal color for a token.
const fn builtin_color(token: ColorToken) -> Color {
    match token {
        ColorToken::ErrorMessage => Color::Red,
        ColorToken::ExceptionMessage => Color::DarkRed,
        ColorToken::SuccessMessage => Color::Green,
        ColorToken::InstructionsMessage => Color::DarkGreen,
        ColorToken::Account => Color::Magenta,
        ColorToken::Title => Color::DarkBlue,
        ColorToken::VeryWeak => Color::DarkRed,
        ColorToken::Weak => Color::Red,
        ColorToken::Good => Color::Cyan,
        ColorToken::Strong => Color::DarkGreen,
        ColorToken::VeryStrong => Color::Green,
        ColorToken::Default => Color::Reset,
    }
}

/// Lookup table from [`ColorToken`] to terminal color.
///
/// Starts from the built-in table; overrides replace single entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    overrides: BTreeMap<ColorToken, Color>,
}

impl Palette {
    /// Palette with only the built-in table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a token to its terminal color.
    pub fn color(&self, token: ColorToken) -> Color {
        self.overrides
            .get(&token)
            .copied()
            .unwrap_or_else(|| builtin_color(token))
    }

    /// Replace the color used for one token.
    pub fn set(&mut self, token: ColorToken, color: Color) {
        self.overrides.insert(token, color);
    }

    /// Build a palette from `token -> color name` overrides.
    ///
    /// # Errors
    /// Returns [`MenuError::UnknownColor`] on the first name that does not parse.
    pub fn with_overrides(names: &BTreeMap<ColorToken, String>) -> Result<Self> {
        let mut palette = Self::new();
        for (token, name) in names {
            palette.set(*token, parse_color_name(name)?);
        }
        Ok(palette)
    }
}

/// Parse a color name such as `"red"`, `"dark_green"` or `"reset"`.
///
/// Case-insensitive; `gray` and `grey` spellings are both accepted.
pub fn parse_color_name(name: &str) -> Result<Color> {
    let color = match name.trim().to_ascii_lowercase().as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Black,
        "dark_grey" | "dark_gray" => Color::DarkGrey,
        "grey" | "gray" => Color::Grey,
        "white" => Color::White,
        "red" => Color::Red,
        "dark_red" => Color::DarkRed,
        "green" => Color::Green,
        "dark_green" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "dark_yellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "dark_blue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "dark_magenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "dark_cyan" => Color::DarkCyan,
        _ => return Err(MenuError::UnknownColor(name.to_string())),
    };
    Ok(color)
}

// ============================================================================
// TESTS
// ============================================================================
