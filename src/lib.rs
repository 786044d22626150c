//! boxmenu: box-framed, colorized console menus with validated selection.

pub mod config;
pub mod error;
pub mod layout;
pub mod menu;
pub mod palette;
pub mod render;
pub mod select;
pub mod status;
pub mod terminal;

pub use error::{MenuError, Result};
