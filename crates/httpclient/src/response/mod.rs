pub mod decode;
pub mod parse;

use core::fmt;

use serde::Serialize;

pub use decode::CharsetScan;

use crate::{common::Header, error::Result, r#const::SENTINEL_STATUS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpResponse {
    pub code: u16,
    pub headers: Vec<Header>,
    pub body: String,
}

impl HttpResponse {
    pub fn new<S: Into<String>>(code: u16, body: S) -> Self {
        Self {
            code,
            headers: vec![],
            body: body.into(),
        }
    }

    /// What an unimplemented method answers with.
    pub fn placeholder() -> Self {
        Self::new(SENTINEL_STATUS, "")
    }

    /// Split decoded response text into code, headers and body.
    pub fn parse(text: &str) -> Result<Self> {
        let code = parse::status_code(text)?;
        let headers = parse::header_list(parse::headers(text)?);
        let body = parse::body(text)?;

        Ok(Self {
            code,
            headers,
            body: body.into(),
        })
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.is(key))
            .map(|h| h.value.as_str())
    }
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Response status code: {}", self.code)?;
        write!(f, "Response body:\n{}", self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_response() {
        let text = "HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: 9\r\n\r\nnot found";
        let resp = HttpResponse::parse(text).unwrap();
        assert_eq!(resp.code, 404);
        assert_eq!(resp.header("content-length"), Some("9"));
        assert_eq!(resp.header("X-Missing"), None);
        assert_eq!(resp.body, "not found");
    }

    #[test]
    fn test_parse_without_status_line_uses_sentinel() {
        let resp = HttpResponse::parse("Server: odd\n\nhello").unwrap();
        assert_eq!(resp.code, 500);
        assert_eq!(resp.header("server"), Some("odd"));
        assert_eq!(resp.body, "hello");
    }

    #[test]
    fn test_parse_without_separator_fails() {
        assert!(matches!(
            HttpResponse::parse("HTTP/1.1 200 OK\r\n"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_placeholder() {
        let resp = HttpResponse::placeholder();
        assert_eq!(resp, HttpResponse::new(500, ""));
        assert!(resp.headers.is_empty());
    }

    #[test]
    fn test_display() {
        let resp = HttpResponse::new(200, "hi");
        assert_eq!(resp.to_string(), "Response status code: 200\nResponse body:\nhi");
    }

    #[test]
    fn test_serialize() {
        let resp = HttpResponse::parse("HTTP/1.1 200 OK\r\nA: b\r\n\r\nhi").unwrap();
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], 200);
        assert_eq!(json["headers"][0]["key"], "A");
        assert_eq!(json["body"], "hi");
    }
}
