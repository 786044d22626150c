//! Console effects: write laid-out menus to an output stream.
//!
//! This is the only module that writes. Layout decisions live in
//! [`crate::layout`]; here spans are turned into crossterm color
//! commands and bytes. Writes go straight to the underlying stream, so
//! the renderer assumes nothing else writes to it concurrently.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use tracing::{debug, warn};

use crate::config::UiConfig;
use crate::error::Result;
use crate::layout::{self, RenderLine, DEFAULT_PROMPT};
use crate::menu::{Menu, SelectionOption};
use crate::palette::{ColorToken, Palette};
use crate::status::StatusMessage;

/// Draws menus and message lines to `W`.
///
/// Holds no per-render state: the palette and prompt default are
/// settings, and every draw takes the width it should use.
#[derive(Debug)]
pub struct MenuRenderer<W: Write> {
    out: W,
    palette: Palette,
    default_prompt: String,
    clear_screen: bool,
}

impl<W: Write> MenuRenderer<W> {
    /// Renderer with the built-in palette, default prompt and screen clearing.
    pub fn new(out: W) -> Self {
        Self {
            out,
            palette: Palette::new(),
            default_prompt: DEFAULT_PROMPT.to_string(),
            clear_screen: true,
        }
    }

    /// Renderer configured from a [`UiConfig`].
    ///
    /// # Errors
    /// Fails if the config's palette overrides name unknown colors.
    pub fn from_config(out: W, config: &UiConfig) -> Result<Self> {
        Ok(Self {
            out,
            palette: config.palette()?,
            default_prompt: config.default_prompt.clone(),
            clear_screen: config.clear_screen,
        })
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_default_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.default_prompt = prompt.into();
        self
    }

    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Give back the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    // ========================================================================
    // WHOLE MENU
    // ========================================================================

    /// Draw a complete menu.
    ///
    /// Clears the viewport (if enabled), writes `messages` in order, then
    /// the framed sections and the prompt. `messages` is consumed; callers
    /// hand over what they drained from their [`crate::status::StatusQueue`].
    pub fn render(&mut self, menu: &Menu, messages: Vec<StatusMessage>, width: u16) -> Result<()> {
        let buffer = layout::layout_menu(menu, &messages, width, &self.default_prompt);
        debug!(
            width,
            messages = messages.len(),
            lines = menu.count_lines(),
            selections = menu.count_selections(),
            "rendering menu"
        );
        if buffer.overflowing > 0 {
            warn!(
                width,
                overflowing = buffer.overflowing,
                "menu text wider than working area, borders will misalign"
            );
        }

        if self.clear_screen {
            self.clear()?;
        }
        for line in &buffer.lines {
            self.emit(line)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Blank the viewport and home the cursor.
    pub fn clear(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    // ========================================================================
    // SECTIONS
    // ========================================================================

    pub fn draw_divider(&mut self, width: u16) -> Result<()> {
        self.emit(&layout::divider_line(width))
    }

    /// Draw one bordered line, left-aligned or centered.
    pub fn draw_line(
        &mut self,
        text: &str,
        color: Option<ColorToken>,
        centered: bool,
        width: u16,
    ) -> Result<()> {
        self.emit(&layout::framed_line(text, color, centered, width))
    }

    /// Draw each option as a bordered `key.pad(5) + label` line.
    pub fn draw_selections(&mut self, options: &[SelectionOption], width: u16) -> Result<()> {
        for option in options {
            let cell = layout::selection_cell(option);
            self.draw_line(&cell, Some(option.color), false, width)?;
        }
        Ok(())
    }

    /// Draw the unframed prompt and flush so it is visible before input.
    pub fn draw_prompt(&mut self, text: &str) -> Result<()> {
        let line = layout::prompt_line(text, &self.default_prompt);
        self.emit(&line)?;
        self.out.flush()?;
        Ok(())
    }

    // ========================================================================
    // MESSAGE LINES
    // ========================================================================

    /// `[ERROR]: text` in the error color, unframed.
    pub fn write_error(&mut self, text: &str) -> Result<()> {
        self.write_status(&StatusMessage::Error(text.to_string()))
    }

    /// `[SUCCESS]: text` in the success color, unframed.
    pub fn write_success(&mut self, text: &str) -> Result<()> {
        self.write_status(&StatusMessage::Success(text.to_string()))
    }

    /// Untagged text in the exception color, unframed.
    pub fn write_raw(&mut self, text: &str) -> Result<()> {
        self.write_status(&StatusMessage::Raw(text.to_string()))
    }

    pub fn write_status(&mut self, message: &StatusMessage) -> Result<()> {
        self.emit(&layout::status_line(message))
    }

    // ========================================================================
    // OUTPUT
    // ========================================================================

    /// Write one line, switching color around colored spans only.
    fn emit(&mut self, line: &RenderLine) -> Result<()> {
        for span in &line.spans {
            let color = span.color.map(|token| self.palette.color(token));
            match color {
                Some(color) if color != Color::Reset && !span.text.is_empty() => {
                    queue!(
                        self.out,
                        SetForegroundColor(color),
                        Print(&span.text),
                        ResetColor
                    )?;
                }
                _ => queue!(self.out, Print(&span.text))?,
            }
        }
        if line.newline {
            queue!(self.out, Print("\n"))?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_renderer() -> MenuRenderer<Vec<u8>> {
        MenuRenderer::new(Vec::new()).with_clear_screen(false)
    }

    fn output(renderer: MenuRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    /// Drop CSI escape sequences, keeping visible text.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                // ESC [ params final-byte
                chars.next();
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

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

    #[test]
    fn render_matches_layout_text() {
        let menu = sample_menu();
        let mut renderer = plain_renderer();
        renderer.render(&menu, Vec::new(), 80).unwrap();

        let expected = layout::layout_menu(&menu, &[], 80, DEFAULT_PROMPT).to_plain_text();
        assert_eq!(strip_ansi(&output(renderer)), expected);
    }

    #[test]
    fn render_is_byte_identical_when_repeated() {
        let menu = sample_menu();

        let mut first = MenuRenderer::new(Vec::new());
        first.render(&menu, Vec::new(), 80).unwrap();
        let mut second = MenuRenderer::new(Vec::new());
        second.render(&menu, Vec::new(), 80).unwrap();

        assert_eq!(first.into_inner(), second.into_inner());
    }

    #[test]
    fn colored_text_is_reset_before_border() {
        let mut renderer = plain_renderer();
        renderer
            .draw_line("warn", Some(ColorToken::ErrorMessage), false, 20)
            .unwrap();
        let raw = output(renderer);

        let reset = "\u{1b}[0m";
        let text_at = raw.find("warn").unwrap();
        let reset_at = raw.find(reset).unwrap();
        let border_at = raw.rfind('|').unwrap();
        assert!(raw.starts_with("| \u{1b}["));
        assert!(text_at < reset_at && reset_at < border_at);
        assert_eq!(strip_ansi(&raw), "| warn            |\n");
    }

    #[test]
    fn default_color_emits_no_escape() {
        let mut renderer = plain_renderer();
        renderer
            .draw_line("plain", Some(ColorToken::Default), false, 20)
            .unwrap();
        assert!(!output(renderer).contains('\u{1b}'));
    }

    #[test]
    fn messages_are_written_before_menu() {
        let mut renderer = plain_renderer();
        let messages = vec![
            StatusMessage::Error("Invalid choice: \"z\"".into()),
            StatusMessage::Success("Saved".into()),
            StatusMessage::Raw("trace".into()),
        ];
        renderer.render(&sample_menu(), messages, 40).unwrap();
        let text = strip_ansi(&output(renderer));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "[ERROR]: Invalid choice: \"z\"");
        assert_eq!(lines[1], "[SUCCESS]: Saved");
        assert_eq!(lines[2], "trace");
        assert_eq!(lines[3], layout::divider(40));
    }

    #[test]
    fn clear_precedes_content() {
        let mut renderer = MenuRenderer::new(Vec::new());
        renderer.render(&Menu::new(), Vec::new(), 20).unwrap();
        let raw = output(renderer);
        assert!(raw.starts_with("\u{1b}[2J"));
        assert!(raw.ends_with("Enter an option: "));
    }

    #[test]
    fn empty_menu_is_divider_and_prompt() {
        let mut renderer = plain_renderer();
        renderer.render(&Menu::new(), Vec::new(), 10).unwrap();
        assert_eq!(output(renderer), "+-------+\nEnter an option: ");
    }

    #[test]
    fn configured_default_prompt_is_used() {
        let mut renderer = plain_renderer().with_default_prompt("> ");
        renderer.draw_prompt("").unwrap();
        assert_eq!(output(renderer), "> ");
    }

    #[test]
    fn selections_draw_padded_keys() {
        let mut renderer = plain_renderer();
        renderer
            .draw_selections(&[SelectionOption::new("A", "Awesomesauce!")], 30)
            .unwrap();
        assert_eq!(output(renderer), "| A    Awesomesauce!        |\n");
    }

    #[test]
    fn write_helpers_tag_messages() {
        let mut renderer = plain_renderer();
        renderer.write_error("boom").unwrap();
        renderer.write_success("done").unwrap();
        renderer.write_raw("raw").unwrap();
        let text = strip_ansi(&output(renderer));
        assert_eq!(text, "[ERROR]: boom\n[SUCCESS]: done\nraw\n");
    }

    #[test]
    fn palette_override_changes_emitted_color() {
        let mut palette = Palette::new();
        palette.set(ColorToken::Title, Color::Yellow);
        let mut renderer = plain_renderer().with_palette(palette);
        renderer
            .draw_line("T", Some(ColorToken::Title), true, 20)
            .unwrap();
        let raw = output(renderer);
        let mut expected: Vec<u8> = Vec::new();
        queue!(expected, SetForegroundColor(Color::Yellow)).unwrap();
        assert!(raw.contains(std::str::from_utf8(&expected).unwrap()));
    }
}
