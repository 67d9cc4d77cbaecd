use std::{
    net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use log::{error, info, warn};

use super::{Streamer, TcpStreamTransport};
use crate::{cfg::Config, coordinator::Coordinator, error::Error};

/// Pause after a failed accept
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// [TcpServer] streams sentences to every connected client (telnet
/// like). Each client runs its own [Streamer] thread, all of them
/// sharing the same ticks through the [Coordinator].
pub struct TcpServer {
    listener: TcpListener,
    coordinator: Coordinator,
    cfg: Config,
    clients: Arc<AtomicUsize>,
}

impl TcpServer {
    pub fn bind<A: ToSocketAddrs>(
        addr: A,
        coordinator: Coordinator,
        cfg: Config,
    ) -> Result<Self, Error> {
        let listener = TcpListener::bind(addr)?;
        info!("server listening on {}", listener.local_addr()?);
        Ok(Self {
            listener,
            coordinator,
            cfg,
            clients: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        Ok(self.listener.local_addr()?)
    }

    /// Number of clients currently served
    pub fn num_clients(&self) -> usize {
        self.clients.load(Ordering::SeqCst)
    }

    /// Accepts clients forever. Failed accepts and refused clients
    /// are logged, only a poisoned navigation state stops the server.
    pub fn serve(&self) -> Result<(), Error> {
        loop {
            self.handle_incoming(self.listener.accept())?;
        }
    }

    /// Handles one accept attempt.
    pub(crate) fn handle_incoming(
        &self,
        incoming: std::io::Result<(TcpStream, SocketAddr)>,
    ) -> Result<(), Error> {
        let (stream, peer) = match incoming {
            Ok(incoming) => incoming,
            Err(e) => {
                // EMFILE, ECONNABORTED: transient
                warn!("failed to accept connection: {}", e);
                thread::sleep(ACCEPT_RETRY_DELAY);
                return Ok(());
            },
        };

        info!("connected with {}", peer);

        match self.spawn_client(stream, peer) {
            Ok(_) => Ok(()),
            Err(Error::MaxConnections) => {
                info!("connection closed with {}: too many clients", peer);
                Ok(())
            },
            Err(Error::PoisonedState) => Err(Error::PoisonedState),
            Err(e) => {
                error!("{} - failed to serve client: {}", peer, e);
                Ok(())
            },
        }
    }

    fn spawn_client(&self, stream: TcpStream, peer: SocketAddr) -> Result<(), Error> {
        if self.clients.load(Ordering::SeqCst) >= self.cfg.max_tcp_connections {
            // dropping the stream closes it
            return Err(Error::MaxConnections);
        }

        let handle = self.coordinator.register("tcp-client")?;
        let streamer = Streamer::new(handle, TcpStreamTransport::from(stream), &self.cfg);

        let clients = Arc::clone(&self.clients);
        clients.fetch_add(1, Ordering::SeqCst);

        thread::spawn(move || {
            match streamer.run() {
                Err(Error::Io(e)) => info!("connection closed with {}: {}", peer, e),
                Err(e) => error!("{} - client terminated: {}", peer, e),
                Ok(_) => {},
            }
            clients.fetch_sub(1, Ordering::SeqCst);
        });

        Ok(())
    }
}
