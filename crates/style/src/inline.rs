use std::collections::HashMap;

/// Parsed declarations of an element's `style` attribute, keyed by property name.
pub type StyleMap = HashMap<String, String>;

/// Parses an inline `style="key: value; ..."` attribute into `styles`.
///
/// Names and values are trimmed. A declaration missing either side is
/// skipped; a repeated property overwrites the earlier entry. Returns the
/// number of declarations applied.
pub fn parse_inline_style(css: &str, styles: &mut StyleMap) -> usize {
    let mut applied = 0;
    for declaration in css.split(';') {
        let Some((key, value)) = declaration.split_once(':') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }
        styles.insert(key.to_string(), value.to_string());
        applied += 1;
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_declarations() {
        let mut styles = StyleMap::new();
        let applied = parse_inline_style("color: red; font-weight: bold", &mut styles);

        assert_eq!(applied, 2);
        assert_eq!(styles.get("color").map(String::as_str), Some("red"));
        assert_eq!(styles.get("font-weight").map(String::as_str), Some("bold"));
    }

    #[test]
    fn test_last_declaration_wins() {
        let mut styles = StyleMap::new();
        parse_inline_style("color: red; color: #00ff00", &mut styles);
        assert_eq!(styles["color"], "#00ff00");
    }

    #[test]
    fn test_incomplete_pairs_are_skipped() {
        let mut styles = StyleMap::new();
        let applied = parse_inline_style(" ; color: ; : bold; margin; padding :4pt;", &mut styles);

        assert_eq!(applied, 1);
        assert_eq!(styles.len(), 1);
        assert_eq!(styles["padding"], "4pt");
    }

    #[test]
    fn test_value_may_contain_colon() {
        let mut styles = StyleMap::new();
        parse_inline_style("background: url(http://example.com/a.png)", &mut styles);
        assert_eq!(styles["background"], "url(http://example.com/a.png)");
    }
}
