//! Pending status messages shown above the next rendered menu.
//!
//! The caller owns a [`StatusQueue`]. Before each render it calls
//! [`StatusQueue::drain`] and hands the drained messages to the renderer,
//! which consumes them. The queue is empty from that point on.

use crate::palette::ColorToken;

/// One message line drawn before the framed menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Drawn as `[ERROR]: text`.
    Error(String),
    /// Drawn as `[SUCCESS]: text`.
    Success(String),
    /// Drawn untagged, e.g. an exception or diagnostic dump.
    Raw(String),
}

impl StatusMessage {
    /// Tag prepended to the text.
    pub fn tag(&self) -> &'static str {
        match self {
            StatusMessage::Error(_) => "[ERROR]: ",
            StatusMessage::Success(_) => "[SUCCESS]: ",
            StatusMessage::Raw(_) => "",
        }
    }

    pub fn color(&self) -> ColorToken {
        match self {
            StatusMessage::Error(_) => ColorToken::ErrorMessage,
            StatusMessage::Success(_) => ColorToken::SuccessMessage,
            StatusMessage::Raw(_) => ColorToken::ExceptionMessage,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Error(text) | StatusMessage::Success(text) | StatusMessage::Raw(text) => {
                text
            }
        }
    }

    /// Full line as drawn: tag followed by text.
    pub fn line(&self) -> String {
        format!("{}{}", self.tag(), self.text())
    }
}

/// Caller-owned FIFO of messages waiting for the next render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusQueue {
    pending: Vec<StatusMessage>,
}

impl StatusQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: StatusMessage) {
        self.pending.push(message);
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.push(StatusMessage::Error(text.into()));
    }

    pub fn push_success(&mut self, text: impl Into<String>) {
        self.push(StatusMessage::Success(text.into()));
    }

    pub fn push_raw(&mut self, text: impl Into<String>) {
        self.push(StatusMessage::Raw(text.into()));
    }

    /// Queue every string as an error, e.g. the errors of a rejected selection.
    pub fn extend_errors(&mut self, errors: impl IntoIterator<Item = String>) {
        self.pending
            .extend(errors.into_iter().map(StatusMessage::Error));
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending message, in push order, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<StatusMessage> {
        std::mem::take(&mut self.pending)
    }
}
