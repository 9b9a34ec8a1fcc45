//! Decoding the detection engine's JSON output.
//!
//! One page looks like
//! `[[[[x, y], [x, y], [x, y], [x, y]], ["text", 0.98]], ...]`, with the box
//! corners ordered top-left, top-right, bottom-right, bottom-left. A page
//! with no text is `null`. The engine's full result wraps pages in another
//! array; only the first page is used.

use serde::Deserialize;
use slipscan_core::Quad;

use crate::types::Token;

#[derive(Deserialize)]
struct RawEntry([[f64; 2]; 4], (String, f32));

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOutput {
    Page(Option<Vec<RawEntry>>),
    Pages(Vec<Option<Vec<RawEntry>>>),
}

impl From<RawEntry> for Token {
    fn from(RawEntry(corners, (text, confidence)): RawEntry) -> Self {
        Token::new(text, confidence, Quad::from_corners(corners))
    }
}

pub fn tokens_from_json(json: &str) -> Result<Vec<Token>, serde_json::Error> {
    let page = match serde_json::from_str::<RawOutput>(json)? {
        RawOutput::Page(page) => page,
        RawOutput::Pages(pages) => pages.into_iter().next().flatten(),
    };
    Ok(page
        .unwrap_or_default()
        .into_iter()
        .map(Token::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slipscan_core::Point;

    const PAGE: &str = r#"[
        [[[10, 100], [90, 100], [90, 120], [10, 120]], ["Bread", 0.97]],
        [[[300.5, 101], [360, 101], [360, 121], [300.5, 121]], ["3.99", 0.99]]
    ]"#;

    #[test]
    fn decodes_a_page() {
        let tokens = tokens_from_json(PAGE).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Bread");
        assert_eq!(tokens[0].confidence, 0.97);
        assert_eq!(tokens[1].quad.top_left(), Point::new(300.5, 101.0));
    }

    #[test]
    fn decodes_the_first_of_several_pages() {
        let json = format!("[{PAGE}, null]");
        let tokens = tokens_from_json(&json).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "3.99");
    }

    #[test]
    fn no_text_detected() {
        assert!(tokens_from_json("null").unwrap().is_empty());
        assert!(tokens_from_json("[null]").unwrap().is_empty());
        assert!(tokens_from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn short_box_is_rejected() {
        let json = r#"[[[[0, 0], [1, 0], [1, 1]], ["x", 0.5]]]"#;
        assert!(tokens_from_json(json).is_err());
    }
}
