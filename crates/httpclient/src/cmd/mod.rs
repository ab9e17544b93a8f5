use std::{fmt::Debug, str::FromStr};

use log::LevelFilter;
use sarge::{ArgParseError, ArgumentType, prelude::*};

pub const USAGE: &str = "httpclient [GET/POST] [URL]

options:
    -v, --log-level <LEVEL>   off | error | warn | info | debug | trace,
                              or a verbosity count: -v v, -v vv, -v vvv
        --colored             colour the log level
    -j, --json                print the response as json
    -t, --timeout <SECS>      give up on a read after SECS seconds (default: wait for close)
    -A, --user-agent <UA>     override the User-Agent header
    -h, --help                show this help";

sarge! {
    pub Args,

    // log level, also read from HTTPCLIENT_LOG_LEVEL
    #ok 'v' @HTTPCLIENT_LOG_LEVEL pub log_level: LogLevel,

    #ok pub colored: bool,

    #ok 'j' pub json: bool,

    // read deadline in seconds, 0 waits for the peer to close
    #ok 't' pub timeout: u64,

    #ok 'A' pub user_agent: String,

    #ok 'h' pub help: bool,
}

impl Debug for Args {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Args")
            .field("log_level", &self.log_level)
            .field("colored", &self.colored)
            .field("json", &self.json)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("help", &self.help)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl Default for LogLevel {
    fn default() -> Self {
        Self(LevelFilter::Warn)
    }
}

impl FromStr for LogLevel {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const VERBOSE_PAT: char = 'v';

        let level = match s.trim().to_ascii_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "err" | "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            s => match s.chars().filter(|c| *c == VERBOSE_PAT).count() {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            },
        };
        Ok(Self(level))
    }
}

impl ArgumentType for LogLevel {
    type Error = ArgParseError;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let level = match val {
            Some(v) => LogLevel::from_str(v).ok()?,
            None => LogLevel(LevelFilter::Info),
        };
        Ok(level).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_names() {
        assert_eq!(LogLevel::from_str("DEBUG").unwrap().0, LevelFilter::Debug);
        assert_eq!(LogLevel::from_str("warning").unwrap().0, LevelFilter::Warn);
        assert_eq!(LogLevel::from_str("off").unwrap().0, LevelFilter::Off);
    }

    #[test]
    fn test_log_level_verbosity_count() {
        assert_eq!(LogLevel::from_str("v").unwrap().0, LevelFilter::Info);
        assert_eq!(LogLevel::from_str("vv").unwrap().0, LevelFilter::Debug);
        assert_eq!(LogLevel::from_str("vvvv").unwrap().0, LevelFilter::Trace);
        assert_eq!(LogLevel::from_str("loud").unwrap().0, LevelFilter::Warn);
    }

    #[test]
    fn test_parse_cli_flags_and_positionals() {
        let (args, remainder) = Args::parse_cli([
            "httpclient", "-v", "vv", "-j", "-t", "5", "POST", "http://example.com/",
        ])
        .unwrap();

        assert_eq!(args.log_level, Some(LogLevel(LevelFilter::Debug)));
        assert_eq!(args.json, Some(true));
        assert_eq!(args.timeout, Some(5));
        assert_eq!(args.user_agent, None);
        assert_eq!(remainder, vec!["httpclient", "POST", "http://example.com/"]);

        let dbg = format!("{args:?}");
        assert!(dbg.starts_with("Args {"));
        assert!(dbg.contains("timeout: Some(5)"));
    }

    #[test]
    fn test_log_level_takes_a_value() {
        let (args, remainder) =
            Args::parse_cli(["httpclient", "-v", "trace", "http://example.com/"]).unwrap();
        assert_eq!(args.log_level, Some(LogLevel(LevelFilter::Trace)));
        assert_eq!(remainder, vec!["httpclient", "http://example.com/"]);
        assert!(USAGE.contains("-v vv"));
    }

    #[test]
    fn test_log_level_default() {
        assert_eq!(LogLevel::default().0, LevelFilter::Warn);
    }
}
