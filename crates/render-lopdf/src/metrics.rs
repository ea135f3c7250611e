use folio_render_core::RenderError;
use std::str::FromStr;

/// Advance widths (1/1000 em) of Helvetica for the printable ASCII range 0x20..=0x7E.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

const HELVETICA_FALLBACK_WIDTH: u16 = 556;
const COURIER_WIDTH: u16 = 600;

/// The standard Type1 fonts this sink can reference without embedding font programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    Courier,
}

impl StandardFont {
    pub fn postscript_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::Courier => "Courier",
        }
    }

    fn char_width(self, c: char) -> u16 {
        match self {
            StandardFont::Courier => COURIER_WIDTH,
            StandardFont::Helvetica => match c as u32 {
                code @ 0x20..=0x7E => HELVETICA_WIDTHS[(code - 0x20) as usize],
                _ => HELVETICA_FALLBACK_WIDTH,
            },
        }
    }

    /// Width of `text` in points when set at `size`.
    pub fn text_width(self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f32 * size / 1000.0
    }
}

impl FromStr for StandardFont {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "helvetica" => Ok(StandardFont::Helvetica),
            "courier" => Ok(StandardFont::Courier),
            _ => Err(RenderError::UnknownFont(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helvetica_widths() {
        // H e l l o = 722 + 556 + 222 + 222 + 556
        let width = StandardFont::Helvetica.text_width("Hello", 10.0);
        assert!((width - 22.78).abs() < 0.001);
        assert!((StandardFont::Helvetica.text_width(" ", 1000.0) - 278.0).abs() < 0.001);
    }

    #[test]
    fn test_courier_is_monospaced() {
        assert_eq!(StandardFont::Courier.text_width("iiii", 10.0), 24.0);
        assert_eq!(StandardFont::Courier.text_width("WWWW", 10.0), 24.0);
    }

    #[test]
    fn test_non_ascii_uses_fallback() {
        assert_eq!(StandardFont::Helvetica.text_width("é", 1000.0), 556.0);
    }

    #[test]
    fn test_parse_font_names() {
        assert_eq!("Helvetica".parse::<StandardFont>().unwrap(), StandardFont::Helvetica);
        assert_eq!(" courier ".parse::<StandardFont>().unwrap(), StandardFont::Courier);
        assert!(matches!(
            "Comic Sans".parse::<StandardFont>(),
            Err(RenderError::UnknownFont(name)) if name == "Comic Sans"
        ));
    }
}
