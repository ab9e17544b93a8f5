//! Turn the raw response bytes into text.
//!
//! UTF-8 is tried first. When that fails the bytes are rendered ASCII-escaped
//! (`\r`, `\n`, `\xe9`, ...) and the charset is read out of that rendering:
//! everything after `charset=` up to the first terminator character. In the
//! escaped rendering a header line always ends in a backslash, which is why the
//! backslash is the default terminator.

use encoding_rs::Encoding;

use crate::{
    error::{Error, Result},
    r#const::CHARSET_MARKER,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetScan {
    pub terminators: Vec<char>,
}

impl Default for CharsetScan {
    fn default() -> Self {
        Self {
            terminators: vec!['\\'],
        }
    }
}

impl CharsetScan {
    pub fn terminators(terminators: impl Into<Vec<char>>) -> Self {
        Self {
            terminators: terminators.into(),
        }
    }

    fn is_terminator(&self, c: char) -> bool {
        self.terminators.contains(&c)
    }
}

pub fn decode(raw: &[u8], scan: &CharsetScan) -> Result<String> {
    match std::str::from_utf8(raw) {
        Ok(text) => Ok(text.to_owned()),
        Err(e) => {
            log::debug!("response is not utf-8 ({e}), looking for its charset");
            let charset = discover_charset(raw, scan)?;
            log::debug!("decoding response as `{charset}`");
            decode_with(raw, &charset)
        }
    }
}

pub fn render_escaped(raw: &[u8]) -> String {
    raw.escape_ascii().to_string()
}

pub fn discover_charset(raw: &[u8], scan: &CharsetScan) -> Result<String> {
    let rendered = render_escaped(raw);
    let begin = rendered
        .find(CHARSET_MARKER)
        .ok_or(Error::decode("response is not utf-8 and names no charset"))?;

    let mut charset = String::new();
    for c in rendered[begin + CHARSET_MARKER.len()..].chars() {
        if scan.is_terminator(c) {
            return Ok(charset);
        }
        charset.push(c);
    }

    Err(Error::decode(format!(
        "charset `{charset}` runs past the end of the response"
    )))
}

/// Strict decode: malformed input is an error, never a replacement character.
pub fn decode_with(raw: &[u8], label: &str) -> Result<String> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::decode(format!("unknown charset `{label}`")))?;

    encoding
        .decode_without_bom_handling_and_without_replacement(raw)
        .map(|text| text.into_owned())
        .ok_or_else(|| Error::decode(format!("response is not valid {}", encoding.name())))
}
