//! A minimal HTTP/1.x client working directly on a TCP socket.
//!
//! The request header block is written by hand, the response is read until the
//! server closes the connection, then decoded and split into status code,
//! headers and body. Only GET talks to the network; POST is a placeholder that
//! always answers 500.
//!
//! ```rust,no_run
//! use httpclient::{HttpClient, Method};
//!
//! let client = HttpClient::new();
//! let resp = client.command("http://example.com/", Method::GET)?;
//! println!("{}", resp.code);
//! # Ok::<(), httpclient::Error>(())
//! ```

use std::process::ExitCode;

pub mod client;
mod cmd;
pub mod common;
pub mod connection;
mod r#const;
pub mod error;
mod init;
pub mod request;
pub mod response;
pub mod target;

pub use client::{ClientConfig, HttpClient, Stage};
pub use common::Header;
pub use error::{Error, Result};
pub use r#const::{BUFFER_SIZE, DEFAULT_HTTP_PORT, DEFAULT_USER_AGENT, HTTP_VERSION, SENTINEL_STATUS};
pub use request::{Method, RequestBuilder, RequestConfig};
pub use response::{CharsetScan, HttpResponse};
pub use target::Target;

use crate::cmd::{Args, USAGE};

/// Entry point of the `httpclient` binary.
pub fn run() -> anyhow::Result<ExitCode> {
    let (args, positional) = init::cmd::init()?;

    if args.help.is_some_and(|h| h) {
        println!("{USAGE}");
        return Ok(ExitCode::SUCCESS);
    }

    let (method, url) = match positional.as_slice() {
        [] => {
            println!("{USAGE}");
            return Ok(ExitCode::from(1));
        }
        [method, url] => (Method::from_name(method), url),
        [url, ..] => (Method::GET, url),
    };

    let client = HttpClient::with_config(client_config(&args));
    match client.command(url, method) {
        Ok(resp) => {
            if args.json.unwrap_or(false) {
                println!("{}", serde_json::to_string_pretty(&resp)?);
            } else {
                println!("HTTP Response:\n{resp}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::Connection { host, port, reason }) => {
            log::debug!("{reason}");
            eprintln!("Connection error => Could not resolve host: {host} port: {port}");
            Ok(ExitCode::from(1))
        }
        Err(e) => {
            eprintln!("{method} {url} failed: {e}");
            Ok(ExitCode::from(1))
        }
    }
}

fn client_config(args: &Args) -> ClientConfig {
    let request = match &args.user_agent {
        Some(ua) => RequestConfig::default().user_agent(ua.as_str()),
        None => RequestConfig::default(),
    };

    ClientConfig::new()
        .request(request)
        .read_timeout(args.timeout.map(std::time::Duration::from_secs))
}
