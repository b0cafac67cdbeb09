// src/routes/ssh.rs
use super::parser::{parse_routes, Route};
use super::vendor::{CommandMode, Vendor};
use crate::probe::{Credentials, ProbeError};
use async_trait::async_trait;
use ssh2::Session;
use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;
use tracing::debug;

/// Source of the OSPF routes currently installed on a firewall.
#[async_trait]
pub trait RouteSource: Send + Sync {
    async fn fetch_routes(&self) -> Result<Vec<Route>, ProbeError>;
}

/// Reads the OSPF route table over an SSH session.
#[derive(Debug, Clone)]
pub struct SshRouteTable {
    host: String,
    port: u16,
    credentials: Credentials,
    vendor: Vendor,
    timeout: Duration,
}

impl SshRouteTable {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        credentials: Credentials,
        vendor: Vendor,
        timeout: Duration,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            credentials,
            vendor,
            timeout,
        }
    }

    fn connect(&self) -> Result<Session, ProbeError> {
        let addr = (self.host.as_str(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} did not resolve to an address", self.host),
                )
            })?;

        debug!("Connecting to {} ({})", self.host, addr);
        let tcp = TcpStream::connect_timeout(&addr, self.timeout)?;

        let mut session = Session::new()?;
        session.set_tcp_stream(tcp);
        session.set_timeout(self.timeout.as_millis().min(u32::MAX as u128) as u32);
        session.handshake()?;
        session.userauth_password(&self.credentials.username, &self.credentials.password)?;

        if !session.authenticated() {
            return Err(ProbeError::Authentication(format!(
                "ssh://{}@{}:{}",
                self.credentials.username, self.host, self.port
            )));
        }

        Ok(session)
    }

    /// Run the vendor's show-route command and collect its output lines.
    pub fn collect_output(&self) -> Result<Vec<String>, ProbeError> {
        let session = self.connect()?;
        let mut channel = session.channel_session()?;

        match self.vendor.command_mode() {
            CommandMode::Exec => channel.exec(self.vendor.command())?,
            CommandMode::Shell => {
                // PAN-OS wraps output at the terminal width
                channel.request_pty("vt100", None, Some((250, 50, 0, 0)))?;
                channel.shell()?;
                for command in self.vendor.shell_preamble() {
                    writeln!(channel, "{}", command)?;
                }
                writeln!(channel, "{}", self.vendor.command())?;
                channel.flush()?;
            }
        }

        let lines = read_until_terminator(BufReader::new(&mut channel), self.vendor)?;

        if self.vendor.command_mode() == CommandMode::Shell {
            let _ = writeln!(channel, "exit");
        }
        if let Err(e) = channel.close() {
            debug!("Closing channel failed: {}", e);
        }
        let _ = session.disconnect(None, "done", None);

        debug!("Read {} lines from {}", lines.len(), self.host);
        Ok(lines)
    }
}

#[async_trait]
impl RouteSource for SshRouteTable {
    async fn fetch_routes(&self) -> Result<Vec<Route>, ProbeError> {
        let table = self.clone();
        let lines = tokio::task::spawn_blocking(move || table.collect_output()).await??;
        Ok(parse_routes(self.vendor, &lines))
    }
}

/// Read lines until EOF or the vendor's end-of-listing marker, which is
/// included in the result.
pub fn read_until_terminator<R: BufRead>(mut reader: R, vendor: Vendor) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        let done = vendor.is_terminator(&line);
        lines.push(line);

        if done {
            break;
        }
    }

    Ok(lines)
}
