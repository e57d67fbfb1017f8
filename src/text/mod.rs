//! Text handling for markdown pages: plain-text conversion, font metrics
//! and the wrap/pagination layout engine.

pub mod layout;
pub mod metrics;
pub mod plain;

pub use layout::{LayoutOptions, TextLine, TextPage, layout_document};
pub use metrics::{Font, encode_win_ansi};
pub use plain::to_plain_text;
