//! Layout engine: menu + terminal width → framed, colored lines.
//!
//! Pure functions, no I/O. The result is a [`RenderBuffer`] of colored
//! spans that [`crate::render`] writes out. Nothing is cached between
//! calls; every render recomputes the buffer from scratch.
//!
//! Geometry for a terminal `w` columns wide:
//!
//! ```text
//! +-------------------------+   divider: corner, w-3 fill, corner
//! |        Main Menu        |   centered title
//! +-------------------------+
//! | This is a test line     |   body: border, one space, text, fill, border
//! +-------------------------+
//! | A    Awesomesauce!      |   option: key padded to 5, label
//! +-------------------------+
//! Enter an option:              prompt: unframed, no newline
//! ```
//!
//! Every framed line and every divider is `w - 1` columns wide.
//! Text longer than the working area is not truncated; the padding
//! collapses to zero and the right border is pushed out.

use crate::menu::{Menu, SelectionOption};
use crate::palette::ColorToken;
use crate::status::StatusMessage;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Vertical border around content lines.
pub const BORDER: char = '|';

/// Divider end caps.
pub const CORNER: char = '+';

/// Divider fill.
pub const FILL: char = '-';

/// Column width reserved for an option key, label starts right after.
pub const SELECTION_KEY_WIDTH: usize = 5;

/// Prompt shown when a menu has none of its own.
pub const DEFAULT_PROMPT: &str = "Enter an option: ";

// ============================================================================
// BUFFER TYPES
// ============================================================================

/// A run of text drawn in one color. `None` means "no color change".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub color: Option<ColorToken>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: Option<ColorToken>) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// One output line. The prompt is the only line without a trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine {
    pub spans: Vec<Span>,
    pub newline: bool,
}

impl RenderLine {
    /// Visible text of the line, without color or newline.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Visible width in characters.
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| text_len(&s.text)).sum()
    }
}

/// Everything one render call draws, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderBuffer {
    pub lines: Vec<RenderLine>,
    /// Framed lines whose text did not fit the working area.
    pub overflowing: usize,
}

impl RenderBuffer {
    /// Whole buffer as uncolored text, newlines included.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.plain_text());
            if line.newline {
                out.push('\n');
            }
        }
        out
    }

    fn push(&mut self, line: RenderLine) {
        self.lines.push(line);
    }

    fn push_framed(&mut self, text: &str, color: Option<ColorToken>, centered: bool, width: u16) {
        if !fits(text, width, centered) {
            self.overflowing += 1;
        }
        self.push(framed_line(text, color, centered, width));
    }
}

// ============================================================================
// GEOMETRY
// ============================================================================

/// Character count used for all width math.
///
/// Counts `char`s; wide and combining characters are not special-cased.
pub fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Interior columns between the two vertical borders.
pub fn working_area(width: u16) -> usize {
    usize::from(width).saturating_sub(2)
}

/// Horizontal rule: corner, `width - 3` fill characters, corner.
pub fn divider(width: u16) -> String {
    let fill = usize::from(width).saturating_sub(3);
    let mut line = String::with_capacity(fill + 2);
    line.push(CORNER);
    line.extend(std::iter::repeat_n(FILL, fill));
    line.push(CORNER);
    line
}

/// Spaces between the text and the right border of a left-aligned line.
///
/// The text is preceded by one space, so content is `len + 1` wide and
/// the right border sits at column `area` after the left border.
pub fn right_fill(text_len: usize, area: usize) -> usize {
    area.saturating_sub(text_len + 2)
}

/// Padding around centered text, in spaces (borders not included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterPadding {
    pub left: usize,
    pub right: usize,
}

/// Center `text_len` characters in a working area of `area` columns.
///
/// With `half = area / 2`, the text ends at column `half + text_len / 2`
/// and the right border field is `half - text_len / 2` wide, plus one
/// extra column when `area` is odd to recover the lost remainder. When
/// the text fits, `left + text_len + right + 1 == area`.
pub fn center_padding(text_len: usize, area: usize) -> CenterPadding {
    let half = area / 2;
    let odd = area % 2;
    let left = (half + text_len / 2).saturating_sub(text_len);
    let right = (half + odd).saturating_sub(text_len / 2).saturating_sub(1);
    CenterPadding { left, right }
}

/// True when `text` can be framed without pushing the right border out.
pub fn fits(text: &str, width: u16, centered: bool) -> bool {
    let len = text_len(text);
    let area = working_area(width);
    if centered {
        // the left field must hold the text and the right field the border
        let half = area / 2;
        half + len / 2 >= len && half + area % 2 > len / 2
    } else {
        len + 2 <= area
    }
}

// ============================================================================
// LINES
// ============================================================================

/// A bordered content line, optionally centered.
///
/// Borders and padding are always uncolored; only the text span carries
/// `color`.
pub fn framed_line(text: &str, color: Option<ColorToken>, centered: bool, width: u16) -> RenderLine {
    let len = text_len(text);
    let area = working_area(width);

    let (before, after) = if centered {
        let pad = center_padding(len, area);
        (
            format!("{}{}", BORDER, " ".repeat(pad.left)),
            format!("{}{}", " ".repeat(pad.right), BORDER),
        )
    } else {
        (
            format!("{} ", BORDER),
            format!("{}{}", " ".repeat(right_fill(len, area)), BORDER),
        )
    };

    RenderLine {
        spans: vec![
            Span::plain(before),
            Span::colored(text, color),
            Span::plain(after),
        ],
        newline: true,
    }
}

/// Divider as a render line.
pub fn divider_line(width: u16) -> RenderLine {
    RenderLine {
        spans: vec![Span::plain(divider(width))],
        newline: true,
    }
}

/// Option text as drawn inside the frame: key padded to 5, then label.
pub fn selection_cell(option: &SelectionOption) -> String {
    format!(
        "{:<width$}{}",
        option.key,
        option.label,
        width = SELECTION_KEY_WIDTH
    )
}

/// Unframed, fully colored status line.
pub fn status_line(message: &StatusMessage) -> RenderLine {
    RenderLine {
        spans: vec![Span::colored(message.line(), Some(message.color()))],
        newline: true,
    }
}

/// Unframed prompt. Empty `text` falls back to `default_prompt`.
pub fn prompt_line(text: &str, default_prompt: &str) -> RenderLine {
    let shown = if text.is_empty() { default_prompt } else { text };
    RenderLine {
        spans: vec![Span::plain(shown)],
        newline: false,
    }
}

// ============================================================================
// MENU LAYOUT
// ============================================================================

/// Lay out a whole menu.
///
/// Order: status messages, divider, then title / body / options each
/// followed by a divider when non-empty, then the prompt.
pub fn layout_menu(
    menu: &Menu,
    messages: &[StatusMessage],
    width: u16,
    default_prompt: &str,
) -> RenderBuffer {
    let mut buffer = RenderBuffer::default();

    for message in messages {
        buffer.push(status_line(message));
    }

    buffer.push(divider_line(width));

    let title = menu.title();
    if !title.is_empty() {
        buffer.push_framed(&title.text, Some(title.color), true, width);
        buffer.push(divider_line(width));
    }

    if !menu.lines().is_empty() {
        for line in menu.lines() {
            buffer.push_framed(&line.text, Some(line.color), false, width);
        }
        buffer.push(divider_line(width));
    }

    if !menu.selections().is_empty() {
        for option in menu.selections() {
            buffer.push_framed(&selection_cell(option), Some(option.color), false, width);
        }
        buffer.push(divider_line(width));
    }

    buffer.push(prompt_line(menu.prompt(), default_prompt));
    buffer
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Menu {
        let mut menu = Menu::new();
        menu.set_title("Main Menu", ColorToken::Title);
        menu.add_line("This is a test line");
        menu.add_line("This is a second test line");
        menu.add_option("A", "Awesomesauce!", ColorToken::SuccessMessage);
        menu.add_option("B", "Bawesome!", ColorToken::Title);
        menu.add_option("C", "Coolio!", ColorToken::Default);
        menu
    }

    // --- Geometry ---

    #[test]
    fn divider_has_width_minus_three_fill() {
        assert_eq!(divider(10), "+-------+");
        assert_eq!(text_len(&divider(80)), 79);
    }

    #[test]
    fn divider_saturates_on_tiny_widths() {
        assert_eq!(divider(2), "++");
        assert_eq!(divider(0), "++");
    }

    #[test]
    fn framed_line_matches_divider_width() {
        for width in 4..=120u16 {
            for len in 0..(usize::from(width) - 3) {
                let text = "x".repeat(len);
                let line = framed_line(&text, None, false, width);
                assert_eq!(line.width(), text_len(&divider(width)), "w={} len={}", width, len);
            }
        }
    }

    #[test]
    fn left_aligned_line_layout() {
        let line = framed_line("hi", None, false, 10);
        assert_eq!(line.plain_text(), "| hi    |");
    }

    #[test]
    fn centered_padding_fills_working_area() {
        for area in 2..=100usize {
            for len in 0..=area.saturating_sub(2) {
                let pad = center_padding(len, area);
                if half_fits(len, area) {
                    assert_eq!(pad.left + len + pad.right + 1, area, "area={} len={}", area, len);
                }
            }
        }
    }

    fn half_fits(len: usize, area: usize) -> bool {
        area / 2 + len / 2 >= len && area / 2 + area % 2 > len / 2
    }

    #[test]
    fn odd_area_gets_extra_right_column() {
        // area 9 vs 8, same text: only the right side grows
        let even = center_padding(4, 8);
        let odd = center_padding(4, 9);
        assert_eq!(even, CenterPadding { left: 2, right: 1 });
        assert_eq!(odd, CenterPadding { left: 2, right: 2 });
        assert_eq!(odd.left + odd.right, even.left + even.right + 1);
    }

    #[test]
    fn centering_with_odd_text_in_even_area() {
        // area 10, text 3: left field 5+1=6, right field 5-1=4
        let pad = center_padding(3, 10);
        assert_eq!(pad, CenterPadding { left: 3, right: 3 });
        let line = framed_line("abc", None, true, 12);
        assert_eq!(line.plain_text(), "|   abc   |");
    }

    #[test]
    fn centered_title_at_eighty_columns() {
        let line = framed_line("Main Menu", Some(ColorToken::Title), true, 80);
        let text = line.plain_text();
        // area 78: left field 39+4=43 -> 34 spaces, right field 35 -> 34 spaces
        assert_eq!(text, format!("|{}Main Menu{}|", " ".repeat(34), " ".repeat(34)));
        assert_eq!(text_len(&text), 79);
    }

    #[test]
    fn only_text_span_is_colored() {
        let line = framed_line("hello", Some(ColorToken::Weak), true, 20);
        assert_eq!(line.spans[0].color, None);
        assert_eq!(line.spans[1].color, Some(ColorToken::Weak));
        assert_eq!(line.spans[2].color, None);
        assert!(line.spans[2].text.ends_with(BORDER));
    }

    #[test]
    fn overflowing_text_collapses_padding() {
        let line = framed_line("abcdefghij", None, false, 8);
        assert_eq!(line.plain_text(), "| abcdefghij|");
        assert!(!fits("abcdefghij", 8, false));

        let centered = framed_line("abcdefghij", None, true, 8);
        assert_eq!(centered.plain_text(), "|abcdefghij|");
        assert!(!fits("abcdefghij", 8, true));
    }

    #[test]
    fn selection_cell_pads_key_to_five() {
        let option = SelectionOption::new("A", "Awesomesauce!");
        assert_eq!(selection_cell(&option), "A    Awesomesauce!");
        let long = SelectionOption::new("LONGKEY", "x");
        assert_eq!(selection_cell(&long), "LONGKEYx");
    }

    #[test]
    fn prompt_falls_back_to_default() {
        let line = prompt_line("", DEFAULT_PROMPT);
        assert_eq!(line.plain_text(), "Enter an option: ");
        assert!(!line.newline);
        assert_eq!(prompt_line("Choose: ", DEFAULT_PROMPT).plain_text(), "Choose: ");
    }

    // --- Whole menu ---

    #[test]
    fn full_menu_at_eighty_columns() {
        let buffer = layout_menu(&sample_menu(), &[], 80, DEFAULT_PROMPT);
        let rule = divider(80);
        let lines: Vec<String> = buffer.lines.iter().map(|l| l.plain_text()).collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], rule);
        assert!(lines[1].contains("Main Menu"));
        assert_eq!(lines[2], rule);
        assert_eq!(lines[3], format!("| This is a test line{}|", " ".repeat(57)));
        assert!(lines[4].starts_with("| This is a second test line"));
        assert_eq!(lines[5], rule);
        assert!(lines[6].starts_with("| A    Awesomesauce!"));
        assert!(lines[7].starts_with("| B    Bawesome!"));
        assert!(lines[8].starts_with("| C    Coolio!"));
        assert_eq!(lines[9], rule);
        assert_eq!(lines[10], "Enter an option: ");

        for line in &buffer.lines[..10] {
            assert_eq!(line.width(), 79);
        }
        assert_eq!(buffer.overflowing, 0);
    }

    #[test]
    fn empty_sections_get_no_dividers() {
        let mut menu = Menu::new();
        menu.add_option("A", "Only option", ColorToken::Default);
        let buffer = layout_menu(&menu, &[], 40, DEFAULT_PROMPT);
        let text = buffer.to_plain_text();
        let rule = divider(40);

        // opening divider, option, closing divider, prompt
        assert_eq!(buffer.lines.len(), 4);
        assert_eq!(text.matches(&rule).count(), 2);
    }

    #[test]
    fn menu_without_body_has_no_body_divider_pair() {
        let mut menu = Menu::new();
        menu.set_title("T", ColorToken::Title);
        menu.add_option("A", "a", ColorToken::Default);
        let text = layout_menu(&menu, &[], 30, DEFAULT_PROMPT).to_plain_text();
        let rule = divider(30);
        assert!(!text.contains(&format!("{}\n{}", rule, rule)));
        assert_eq!(text.matches(&rule).count(), 3);
    }

    #[test]
    fn status_messages_precede_menu() {
        let messages = vec![
            StatusMessage::Error("Invalid choice: \"z\"".into()),
            StatusMessage::Success("Saved".into()),
        ];
        let buffer = layout_menu(&sample_menu(), &messages, 60, DEFAULT_PROMPT);

        assert_eq!(buffer.lines[0].plain_text(), "[ERROR]: Invalid choice: \"z\"");
        assert_eq!(buffer.lines[0].spans[0].color, Some(ColorToken::ErrorMessage));
        assert_eq!(buffer.lines[1].plain_text(), "[SUCCESS]: Saved");
        assert_eq!(buffer.lines[2].plain_text(), divider(60));
    }

    #[test]
    fn overflow_is_counted_not_rejected() {
        let mut menu = Menu::new();
        menu.add_line("x".repeat(50));
        let buffer = layout_menu(&menu, &[], 20, DEFAULT_PROMPT);
        assert_eq!(buffer.overflowing, 1);
        assert!(buffer.to_plain_text().contains(&"x".repeat(50)));
    }

    #[test]
    fn layout_is_deterministic() {
        let menu = sample_menu();
        assert_eq!(
            layout_menu(&menu, &[], 80, DEFAULT_PROMPT),
            layout_menu(&menu, &[], 80, DEFAULT_PROMPT)
        );
    }
}
