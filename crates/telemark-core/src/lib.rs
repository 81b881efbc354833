mod config;
mod convert;
mod entity;
mod latex;
mod split;
mod symbols;

pub use config::{MarkdownSymbols, RenderConfig};
pub use convert::{Segment, SegmentKind, convert, convert_with_segments};
pub use entity::{EntityKind, MessageEntity, utf16_len};
pub use latex::convert_latex;
pub use split::{split_entities, strip_newlines};
