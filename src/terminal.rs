//! Terminal width detection.
//!
//! The width is queried fresh on every render so resizes take effect on
//! the next redraw. When there is no terminal (redirected output, CI)
//! the caller-supplied fallback is used and the reason is kept.

use std::io;

use tracing::warn;

/// Where a render width came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidthSource {
    /// Reported by the terminal.
    Terminal(u16),
    /// Terminal unavailable; fallback width in use.
    Fallback { width: u16, reason: String },
}

impl WidthSource {
    pub fn width(&self) -> u16 {
        match self {
            WidthSource::Terminal(width) => *width,
            WidthSource::Fallback { width, .. } => *width,
        }
    }
}

/// Ask the terminal for its column count.
pub fn query_width() -> io::Result<u16> {
    crossterm::terminal::size().map(|(columns, _rows)| columns)
}

/// Decide the width from a query result.
///
/// Separated from the query for testability. A zero-column report is
/// treated like a failed query.
pub fn resolve_width(queried: io::Result<u16>, fallback: u16) -> WidthSource {
    match queried {
        Ok(0) => WidthSource::Fallback {
            width: fallback,
            reason: "terminal reported zero columns".to_string(),
        },
        Ok(columns) => WidthSource::Terminal(columns),
        Err(e) => WidthSource::Fallback {
            width: fallback,
            reason: e.to_string(),
        },
    }
}

/// Current terminal width, or `fallback` when it cannot be determined.
pub fn current_width(fallback: u16) -> u16 {
    let source = resolve_width(query_width(), fallback);
    if let WidthSource::Fallback { width, reason } = &source {
        warn!(width, %reason, "terminal width unavailable, using fallback");
    }
    source.width()
}
