//! Low-level nom parser functions for CSS-like style values.

use folio_types::Color;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while_m_n};
use nom::character::complete::char;
use nom::combinator::{map, map_res, value};
use nom::sequence::preceded;
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Color Parsers ---

fn hex_primary(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), |digits: &str| {
        u8::from_str_radix(digits, 16)
    })
    .parse(input)
}

fn hex_color_6(input: &str) -> IResult<&str, Color> {
    map((hex_primary, hex_primary, hex_primary), |(r, g, b)| {
        Color::rgb(r, g, b)
    })
    .parse(input)
}

/// Parses a six-digit hex color (e.g., "#FF0000").
pub fn parse_hex_color(input: &str) -> IResult<&str, Color> {
    preceded(char('#'), hex_color_6).parse(input)
}

fn named_color(input: &str) -> IResult<&str, Color> {
    value(Color::RED, tag_no_case("red")).parse(input)
}

/// Parses a color value: the `red` keyword or `#RRGGBB`.
pub fn parse_color(input: &str) -> IResult<&str, Color> {
    alt((parse_hex_color, named_color)).parse(input)
}

/// Runs `parser` over the trimmed input, requiring it to consume all of it.
pub fn parse_complete<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rest, _)) => Err(StyleParseError::Parse(format!("unexpected trailing input '{}'", rest))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

/// Parses the value of a `color` style property.
pub fn parse_color_value(s: &str) -> Result<Color, StyleParseError> {
    parse_complete(parse_color, s).map_err(|_| StyleParseError::InvalidValue {
        property: "color".to_string(),
        value: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_complete(parse_color, "#ff0000").unwrap(), Color::RED);
        assert_eq!(parse_complete(parse_color, "#000000").unwrap(), Color::BLACK);
        assert_eq!(
            parse_complete(parse_color, "#0088B3").unwrap(),
            Color::rgb(0x00, 0x88, 0xb3)
        );
    }

    #[test]
    fn test_parse_red_keyword() {
        assert_eq!(parse_color_value("red").unwrap(), Color::RED);
        assert_eq!(parse_color_value("  RED ").unwrap(), Color::RED);
    }

    #[test]
    fn test_malformed_colors_are_errors() {
        for bad in ["not-a-color", "#ff00", "#f00", "#gg0000", "#ff0000aa", "ff0000", "", "#"] {
            assert!(parse_color_value(bad).is_err(), "{:?} should not parse", bad);
        }
    }

    #[test]
    fn test_error_names_the_value() {
        let err = parse_color_value("#12345z").unwrap_err();
        assert!(err.to_string().contains("#12345z"));
        assert!(err.to_string().contains("color"));
    }
}
