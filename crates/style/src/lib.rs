pub mod inline;
pub mod parsers;

pub use inline::{parse_inline_style, StyleMap};
pub use parsers::{parse_color_value, StyleParseError};
