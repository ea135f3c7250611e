/// Greedily breaks `text` into lines no wider than `max_width`.
///
/// Words are separated by single spaces; empty segments are dropped. A word
/// is appended to the current line only if the measured candidate still fits.
/// A word that is wider than `max_width` on its own is never split and ends
/// up alone on an oversized line.
pub fn wrap_words<F>(text: &str, max_width: f32, mut measure: F) -> Vec<String>
where
    F: FnMut(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }

        let candidate = format!("{} {}", line, word);
        if measure(&candidate) > max_width {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
