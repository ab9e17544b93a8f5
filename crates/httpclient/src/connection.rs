//! One TCP connection per request: open, send the request, read until the peer
//! closes, then close.

use std::{
    io::{ErrorKind, Read, Write},
    net::{Shutdown, TcpStream},
    time::Duration,
};

use crate::error::{Error, Result};

/// An open socket owned by exactly one request.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
    host: String,
    port: u16,
}

impl Connection {
    pub fn open(host: &str, port: u16) -> Result<Self> {
        let stream = TcpStream::connect((host, port)).map_err(|e| {
            log::warn!("connect {host}:{port} failed: {e}");
            Error::connection(host, port, e.to_string())
        })?;
        log::info!("Successfully connect to: {host}:{port}");

        Ok(Self {
            stream,
            host: host.into(),
            port,
        })
    }

    /// `None` blocks until the peer closes.
    pub fn read_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        self.stream.set_read_timeout(timeout)?;
        Ok(())
    }

    pub fn send(&mut self, request: &str) -> Result<()> {
        send(&mut self.stream, request)?;
        log::debug!("sent {} bytes to {}:{}", request.len(), self.host, self.port);
        Ok(())
    }

    pub fn read_to_close(&mut self, chunk_size: usize) -> Result<Vec<u8>> {
        let response = read_to_close(&mut self.stream, chunk_size)?;
        log::debug!(
            "received {} bytes from {}:{}",
            response.len(),
            self.host,
            self.port
        );
        Ok(response)
    }

    pub fn close(self) {
        // the peer usually closed first, so NotConnected is expected here
        if let Err(e) = self.stream.shutdown(Shutdown::Both) {
            log::trace!("shutdown {}:{}: {e}", self.host, self.port);
        }
        log::info!("Closed connection to: {}:{}", self.host, self.port);
    }
}

pub fn send<W: Write>(writer: &mut W, request: &str) -> Result<()> {
    writer.write_all(request.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Read fixed-size chunks until a read returns zero bytes.
pub fn read_to_close<R: Read>(reader: &mut R, chunk_size: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0_u8; chunk_size.max(1)];
    let mut response: Vec<u8> = Vec::with_capacity(buf.len());
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(len) => response.extend_from_slice(&buf[..len]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::from_io_error(e)),
        }
    }
    Ok(response)
}
