//! The request pipeline: resolve, connect, send, read until closed, close,
//! decode, parse.

use std::time::Duration;

use crate::{
    connection::Connection,
    define_it,
    error::Result,
    r#const::BUFFER_SIZE,
    request::{Method, RequestBuilder, RequestConfig},
    response::{CharsetScan, HttpResponse, decode},
    target::Target,
};

define_it!(
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Stage {
        Resolving,
        Connecting,
        Sending,
        Reading,
        Closed,
        Decoding,
        Parsing,
    }
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub request: RequestConfig,
    pub chunk_size: usize,
    pub read_timeout: Option<Duration>,
    pub charset_scan: CharsetScan,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request: RequestConfig::default(),
            chunk_size: BUFFER_SIZE,
            read_timeout: None,
            charset_scan: CharsetScan::default(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(mut self, request: RequestConfig) -> Self {
        self.request = request;
        self
    }

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// A zero duration means no deadline.
    pub fn read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout.filter(|t| !t.is_zero());
        self
    }

    pub fn charset_scan(mut self, scan: CharsetScan) -> Self {
        self.charset_scan = scan;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    config: ClientConfig,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn get(&self, url: &str) -> Result<HttpResponse> {
        enter(Stage::Resolving, url);
        let target = Target::parse(url)?;

        enter(Stage::Connecting, url);
        let mut conn = Connection::open(&target.host, target.port)?;
        let raw = self.exchange(&mut conn, &target, url);

        enter(Stage::Closed, url);
        conn.close();
        let raw = raw?;

        enter(Stage::Decoding, url);
        let text = decode::decode(&raw, &self.config.charset_scan)?;

        enter(Stage::Parsing, url);
        HttpResponse::parse(&text)
    }

    /// Not implemented: never touches the network and always answers 500 with
    /// an empty body.
    pub fn post(&self, url: &str) -> HttpResponse {
        log::debug!("POST {url} is not implemented");
        HttpResponse::placeholder()
    }

    pub fn command(&self, url: &str, method: Method) -> Result<HttpResponse> {
        if method.is_post() {
            Ok(self.post(url))
        } else {
            self.get(url)
        }
    }

    fn exchange(&self, conn: &mut Connection, target: &Target, url: &str) -> Result<Vec<u8>> {
        conn.read_timeout(self.config.read_timeout)?;
        let request = RequestBuilder::new(&self.config.request)
            .get(target, &target.host)
            .build();
        log::debug!("request:\n{request}");

        enter(Stage::Sending, url);
        conn.send(&request)?;

        enter(Stage::Reading, url);
        conn.read_to_close(self.config.chunk_size)
    }
}

fn enter(stage: Stage, url: &str) {
    log::trace!("{url}: {stage}");
}
