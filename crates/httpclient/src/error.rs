pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The url could not be turned into a target.
    Url(String),
    /// DNS lookup or TCP connect failed.
    Connection {
        host: String,
        port: u16,
        reason: String,
    },
    /// Send or receive failed on an open connection.
    Transport(String),
    Decode(String),
    Parse(String),
}

impl Error {
    pub fn url<S: Into<String>>(msg: S) -> Self {
        Self::Url(msg.into())
    }

    pub fn connection<S: Into<String>>(host: &str, port: u16, reason: S) -> Self {
        Self::Connection {
            host: host.into(),
            port,
            reason: reason.into(),
        }
    }

    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Self::Transport(msg.into())
    }

    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Self::Decode(msg.into())
    }

    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Self::Parse(msg.into())
    }

    pub fn from_io_error(e: std::io::Error) -> Self {
        Self::Transport(e.to_string())
    }

    pub fn from_url_parse_error(e: url::ParseError) -> Self {
        Self::Url(format!("parse error: {e}"))
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Url(msg) => write!(f, "[Url Error] {msg}"),
            Error::Connection { host, port, reason } => write!(
                f,
                "[Connection Error] Could not resolve host: {host} port: {port} ({reason})"
            ),
            Error::Transport(msg) => write!(f, "[Transport Error] {msg}"),
            Error::Decode(msg) => write!(f, "[Decode Error] {msg}"),
            Error::Parse(msg) => write!(f, "[Parse Error] {msg}"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::from_io_error(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_names_host_and_port() {
        let e = Error::connection("example.invalid", 8080, "refused");
        assert!(e.is_connection());
        let msg = e.to_string();
        assert!(msg.contains("example.invalid"));
        assert!(msg.contains("8080"));
    }

    #[test]
    fn test_io_error_becomes_transport() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let e: Error = io.into();
        assert!(matches!(e, Error::Transport(ref m) if m.contains("pipe closed")));
    }
}
