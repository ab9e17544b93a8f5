//! Resolve a user supplied url into the host, port and path a request is sent to.

use url::Url;

use crate::{
    error::{Error, Result},
    r#const::DEFAULT_HTTP_PORT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
    /// Path as the url parser saw it. Without a scheme the host is still the
    /// first segment of it, e.g. `example.com/foo`.
    pub path: String,
    pub query: Option<String>,
    pub has_scheme: bool,
}

impl Target {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.contains("://") {
            Self::from_url(raw)
        } else {
            Self::from_schemeless(raw)
        }
    }

    fn from_url(raw: &str) -> Result<Self> {
        let url = Url::parse(raw).map_err(Error::from_url_parse_error)?;
        let host = url
            .host_str()
            .map(unbracket)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| Error::url(format!("no host found in `{raw}`")))?;

        // `Url` normalizes the path and hides a port equal to the scheme's
        // default, so both are taken from the text as written.
        let (authority, path, query) = split_written(raw);
        let port = url
            .port()
            .or_else(|| written_port(authority))
            .unwrap_or(DEFAULT_HTTP_PORT);

        Ok(Self {
            host: host.into(),
            port,
            path: path.into(),
            query: non_empty(query),
            has_scheme: true,
        })
    }

    fn from_schemeless(raw: &str) -> Result<Self> {
        let raw = raw.split_once('#').map_or(raw, |(r, _fragment)| r);
        let (path, query) = match raw.split_once('?') {
            Some((p, q)) => (p, non_empty(Some(q))),
            None => (raw, None),
        };

        let first = path.split('/').next().unwrap_or_default();
        let (host, port) = match first.rsplit_once(':') {
            Some((h, p)) if !h.ends_with(':') => {
                let port = p
                    .parse::<u16>()
                    .map_err(|e| Error::url(format!("invalid port `{p}` in `{raw}`: {e}")))?;
                (unbracket(h), port)
            }
            _ => (first, DEFAULT_HTTP_PORT),
        };
        if host.is_empty() {
            return Err(Error::url(format!("no host found in `{raw}`")));
        }

        Ok(Self {
            host: host.into(),
            port,
            path: path.into(),
            query,
            has_scheme: false,
        })
    }
}

/// Authority, path and query of `scheme://authority/path?query#fragment`.
fn split_written(raw: &str) -> (&str, &str, Option<&str>) {
    let rest = raw.split_once("://").map_or(raw, |(_scheme, rest)| rest);
    let rest = rest.split_once('#').map_or(rest, |(r, _fragment)| r);
    let end = rest.find(['/', '?']).unwrap_or(rest.len());
    let (authority, rest) = rest.split_at(end);
    match rest.split_once('?') {
        Some((path, query)) => (authority, path, Some(query)),
        None => (authority, rest, None),
    }
}

fn written_port(authority: &str) -> Option<u16> {
    let host_port = authority.rsplit_once('@').map_or(authority, |(_userinfo, hp)| hp);
    let (_, port) = host_port.rsplit_once(':')?;
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse().ok()
}

fn unbracket(host: &str) -> &str {
    host.trim_start_matches('[').trim_end_matches(']')
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(String::from)
}
