use std::str::FromStr;

use crate::{
    common::Header,
    error::{Error, Result},
    r#const::{CRLF_SEPARATOR, LF_SEPARATOR, SENTINEL_STATUS, STATUS_MARKER},
};

/// The code sits right after `HTTP/x.y `; without any `HTTP/` the sentinel 500 is returned.
pub fn status_code(text: &str) -> Result<u16> {
    let Some(begin) = text.find(STATUS_MARKER) else {
        return Ok(SENTINEL_STATUS);
    };
    let code = text
        .get(begin + 9..begin + 12)
        .ok_or_else(|| Error::parse(format!("status line too short: {}", first_line(&text[begin..]))))?;

    code.parse::<u16>()
        .map_err(|e| Error::parse(format!("invalid status code `{code}`: {e}")))
}

pub fn status_line(text: &str) -> Option<&str> {
    let begin = text.find(STATUS_MARKER)?;
    Some(first_line(&text[begin..]))
}

pub fn headers(text: &str) -> Result<&str> {
    let (at, _) = separator(text)?;
    Ok(&text[..at])
}

pub fn body(text: &str) -> Result<&str> {
    let (at, skip) = separator(text)?;
    Ok(&text[at + skip..])
}

/// `name: value` lines of a header block, status line and malformed lines skipped.
pub fn header_list(block: &str) -> Vec<Header> {
    block
        .lines()
        .filter(|line| !line.starts_with(STATUS_MARKER))
        .filter_map(|line| match Header::from_str(line) {
            Ok(h) => Some(h),
            Err(e) => {
                log::debug!("skip header line: {e}");
                None
            }
        })
        .collect()
}

/// Position and length of the blank line ending the header block.
fn separator(text: &str) -> Result<(usize, usize)> {
    if let Some(at) = text.find(CRLF_SEPARATOR) {
        return Ok((at, CRLF_SEPARATOR.len()));
    }
    if let Some(at) = text.find(LF_SEPARATOR) {
        return Ok((at, LF_SEPARATOR.len()));
    }
    Err(Error::parse("no blank line between headers and body"))
}

fn first_line(text: &str) -> &str {
    let end = text.find(['\r', '\n']).unwrap_or(text.len());
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = "HTTP/1.1 200 OK\r\nHeader: X\r\n\r\nBODY";

    #[test]
    fn test_status_code() {
        assert_eq!(status_code("HTTP/1.1 200 OK").unwrap(), 200);
        assert_eq!(status_code("HTTP/1.0 404 Not Found\r\n\r\n").unwrap(), 404);
        assert_eq!(status_code("garbage before HTTP/1.1 301 Moved").unwrap(), 301);
    }

    #[test]
    fn test_status_code_sentinel() {
        assert_eq!(status_code("").unwrap(), 500);
        assert_eq!(status_code("<html>no status line</html>").unwrap(), 500);
    }

    #[test]
    fn test_status_code_parse_errors() {
        assert!(matches!(status_code("HTTP/1.1 OK!"), Err(Error::Parse(_))));
        assert!(matches!(status_code("HTTP/1.1 2"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_split_crlf() {
        assert_eq!(headers(RESPONSE).unwrap(), "HTTP/1.1 200 OK\r\nHeader: X");
        assert_eq!(body(RESPONSE).unwrap(), "BODY");
    }

    #[test]
    fn test_split_lf() {
        let text = "HTTP/1.1 200 OK\nHeader: X\n\nBODY\n\nMORE";
        assert_eq!(headers(text).unwrap(), "HTTP/1.1 200 OK\nHeader: X");
        assert_eq!(body(text).unwrap(), "BODY\n\nMORE");
    }

    #[test]
    fn test_crlf_wins_over_earlier_lf() {
        let text = "A\n\nB\r\n\r\nC";
        assert_eq!(headers(text).unwrap(), "A\n\nB");
        assert_eq!(body(text).unwrap(), "C");
    }

    #[test]
    fn test_missing_separator_is_parse_error() {
        let text = "HTTP/1.1 200 OK\r\nHeader: X";
        assert!(matches!(headers(text), Err(Error::Parse(_))));
        assert!(matches!(body(text), Err(Error::Parse(_))));
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(body("HTTP/1.1 204 No Content\r\n\r\n").unwrap(), "");
    }

    #[test]
    fn test_status_line() {
        assert_eq!(status_line(RESPONSE), Some("HTTP/1.1 200 OK"));
        assert_eq!(status_line("nothing"), None);
    }

    #[test]
    fn test_header_list() {
        let block = "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nbroken line\r\nContent-Length: 4";
        let list = header_list(block);
        assert_eq!(
            list,
            vec![
                Header::new("Content-Type", "text/plain"),
                Header::new("Content-Length", "4"),
            ]
        );
    }
}
