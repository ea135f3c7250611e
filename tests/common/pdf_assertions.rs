use lopdf::Document as LopdfDocument;
use lopdf::content::Content;

/// A `Tj` string together with the text state it was shown with.
#[derive(Debug, Clone, PartialEq)]
pub struct ShownText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: [f32; 3],
}

/// Walks every page's content stream and collects the shown strings in order.
pub fn shown_text(doc: &LopdfDocument) -> Result<Vec<ShownText>, Box<dyn std::error::Error>> {
    let mut shown = Vec::new();
    for (_, page_id) in doc.get_pages() {
        let content = Content::decode(&doc.get_page_content(page_id)?)?;
        let (mut x, mut y, mut size) = (0.0, 0.0, 0.0);
        let mut color = [0.0; 3];

        for op in content.operations {
            match op.operator.as_str() {
                "Tf" => size = op.operands[1].as_float()?,
                "rg" => {
                    for (channel, operand) in color.iter_mut().zip(&op.operands) {
                        *channel = operand.as_float()?;
                    }
                }
                "Td" => {
                    x = op.operands[0].as_float()?;
                    y = op.operands[1].as_float()?;
                }
                "Tj" => shown.push(ShownText {
                    text: String::from_utf8_lossy(op.operands[0].as_str()?).to_string(),
                    x,
                    y,
                    size,
                    color,
                }),
                _ => {}
            }
        }
    }
    Ok(shown)
}

/// Base font names of every font object in the document.
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts: Vec<String> = doc
        .objects
        .values()
        .filter_map(|object| object.as_dict().ok())
        .filter(|dict| dict.get(b"Type").and_then(|t| t.as_name()).ok() == Some(b"Font".as_slice()))
        .filter_map(|dict| dict.get(b"BaseFont").and_then(|n| n.as_name()).ok())
        .map(|name| String::from_utf8_lossy(name).to_string())
        .collect();
    fonts.sort();
    fonts.dedup();
    fonts
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {}, got {}",
        expected,
        actual
    );
}
