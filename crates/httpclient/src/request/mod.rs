//! Build the raw request bytes sent over the socket.

use crate::{
    define_it,
    r#const::{DEFAULT_CHARSET, DEFAULT_CONNECTION, DEFAULT_USER_AGENT, HTTP_VERSION},
    target::Target,
};

define_it!(
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Method {
        GET,
        POST,
    }
);

impl Method {
    /// Only the exact names `GET` and `POST` are recognized, anything else is a GET.
    pub fn from_name(name: &str) -> Self {
        Self::ITEMS
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .unwrap_or(Self::GET)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    pub http_version: String,
    pub charset: String,
    pub connection: String,
    pub user_agent: String,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            http_version: HTTP_VERSION.into(),
            charset: DEFAULT_CHARSET.into(),
            connection: DEFAULT_CONNECTION.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

impl RequestConfig {
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        let user_agent = user_agent.into();
        if !user_agent.is_empty() {
            self.user_agent = user_agent;
        }
        self
    }
}

pub struct RequestBuilder<'a> {
    config: &'a RequestConfig,
    req: String,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(config: &'a RequestConfig) -> Self {
        Self {
            config,
            req: String::new(),
        }
    }

    /// Inner: Build the req method line like: GET /path HTTP/1.1
    fn __build_request_method(method: Method, route: &str, http_version: &str) -> String {
        format!("{} {} {}\r\n", method, route, http_version)
    }

    /// Request line plus the fixed header block for a GET of `target`,
    /// announcing `host` in the `Host` header.
    pub fn get(mut self, target: &Target, host: &str) -> Self {
        let config = self.config;
        let route = request_route(target);
        self.req = Self::__build_request_method(Method::GET, &route, &config.http_version);
        self.header("Host", host)
            .header("Accept-Charset", &config.charset)
            .header("User-Agent", &config.user_agent)
            .header("Connection", &config.connection)
    }

    fn header(mut self, key: &str, value: &str) -> Self {
        self.req.push_str(key);
        self.req.push_str(": ");
        self.req.push_str(value);
        self.req.push_str("\r\n");
        self
    }

    pub fn build(mut self) -> String {
        self.req.push_str("\r\n");
        self.req
    }
}

/// Path to put on the request line.
///
/// Without a scheme the url parser leaves the host as the first path segment:
/// a lone segment asks for the root, otherwise the host segment is cut off.
pub fn request_path(target: &Target) -> String {
    let path = target.path.as_str();
    if !target.has_scheme {
        let non_empty = path.split('/').filter(|s| !s.is_empty()).count();
        if non_empty == 1 {
            return "/".into();
        }
        let first = path.split('/').next().unwrap_or_default();
        return path[first.len()..].into();
    }

    if path.is_empty() {
        "/".into()
    } else {
        path.into()
    }
}

fn request_route(target: &Target) -> String {
    let path = request_path(target);
    match &target.query {
        Some(query) => format!("{path}?{query}"),
        None => path,
    }
}
