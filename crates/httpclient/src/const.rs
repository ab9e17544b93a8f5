pub const HTTP_VERSION: &str = "HTTP/1.1";
pub const DEFAULT_HTTP_PORT: u16 = 80;
pub const DEFAULT_CHARSET: &str = "UTF-8";
pub const DEFAULT_CONNECTION: &str = "close";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_6) AppleWebKit/605.1.15 (KHTML, like Gecko)";

/// Bytes asked from the socket per read.
pub const BUFFER_SIZE: usize = 1024;

/// Status reported when the response has no `HTTP/` status line.
pub const SENTINEL_STATUS: u16 = 500;

pub const STATUS_MARKER: &str = "HTTP/";
pub const CHARSET_MARKER: &str = "charset=";
pub const CRLF_SEPARATOR: &str = "\r\n\r\n";
pub const LF_SEPARATOR: &str = "\n\n";
