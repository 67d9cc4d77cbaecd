use std::net::{SocketAddr, TcpStream, ToSocketAddrs, UdpSocket};

use log::info;

use super::Transport;
use crate::error::Error;

/// [TcpStreamTransport] writes sentences on a TCP connection:
/// either to a remote server, or to a client of our [TcpServer](super::TcpServer).
pub struct TcpStreamTransport {
    stream: TcpStream,
}

impl TcpStreamTransport {
    /// Connects to remote TCP server
    pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self, Error> {
        let stream = TcpStream::connect(addr)?;
        info!("tcp stream to {}", stream.peer_addr()?);
        Ok(Self { stream })
    }

    pub fn peer_addr(&self) -> Option<SocketAddr> {
        self.stream.peer_addr().ok()
    }
}

impl From<TcpStream> for TcpStreamTransport {
    fn from(stream: TcpStream) -> Self {
        Self { stream }
    }
}

impl Transport for TcpStreamTransport {
    fn send(&mut self, sentence: &str) -> std::io::Result<()> {
        use std::io::Write;
        self.stream.write_all(sentence.as_bytes())
    }
}

/// [UdpStreamTransport] sends one datagram per sentence to a remote host.
pub struct UdpStreamTransport {
    socket: UdpSocket,
    remote: SocketAddr,
}

impl UdpStreamTransport {
    pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self, Error> {
        let remote = addr.to_socket_addrs()?.next().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "no remote address")
        })?;

        let local = if remote.is_ipv4() {
            "0.0.0.0:0"
        } else {
            "[::]:0"
        };

        let socket = UdpSocket::bind(local)?;
        info!("udp stream to {}", remote);
        Ok(Self { socket, remote })
    }
}

impl Transport for UdpStreamTransport {
    fn send(&mut self, sentence: &str) -> std::io::Result<()> {
        self.socket.send_to(sentence.as_bytes(), self.remote)?;
        Ok(())
    }
}
