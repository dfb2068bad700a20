use bytes::BytesMut;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use crate::error::SendError;

/// Sends caller-supplied text as UDP datagrams to one fixed destination.
///
/// The destination is resolved once, at construction, and the socket stays
/// open until [`close`](Self::close) runs or the sender is dropped. Dropping
/// releases the socket just as deterministically; `close` only makes the
/// release observable earlier and turns later sends into errors.
#[derive(Debug)]
pub struct DatagramSender {
    dest: SocketAddr,
    socket: Option<UdpSocket>,
    payload: BytesMut,
}

impl DatagramSender {
    /// Resolves `host:port` and opens a blocking UDP socket connected to the
    /// first resolved address.
    ///
    /// Fails with [`SendError::AddressResolution`] when the name cannot be
    /// resolved and [`SendError::Socket`] when socket setup fails. Does not
    /// probe reachability; UDP has nothing to probe.
    pub fn new(host: &str, port: u16) -> Result<Self, SendError> {
        let mut addrs = (host, port)
            .to_socket_addrs()
            .map_err(|source| SendError::AddressResolution {
                host: host.to_string(),
                port,
                source,
            })?;
        let dest = addrs.next().ok_or_else(|| SendError::AddressResolution {
            host: host.to_string(),
            port,
            source: io::Error::new(io::ErrorKind::NotFound, "name resolved to no addresses"),
        })?;

        let (domain, local): (Domain, SocketAddr) = match dest {
            SocketAddr::V4(_) => (Domain::IPV4, (Ipv4Addr::UNSPECIFIED, 0).into()),
            SocketAddr::V6(_) => (Domain::IPV6, (Ipv6Addr::UNSPECIFIED, 0).into()),
        };

        // On every failed setup step `socket` drops before `new` returns, so
        // a failed construction never leaks the handle.
        let socket_err = |source| SendError::Socket { source };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP)).map_err(socket_err)?;
        socket.bind(&local.into()).map_err(socket_err)?;
        socket.connect(&dest.into()).map_err(socket_err)?;

        log::debug!("resolved {host}:{port} to {dest}");
        Ok(Self {
            dest,
            socket: Some(socket.into()),
            payload: BytesMut::new(),
        })
    }

    /// Transmits one datagram containing exactly the UTF-8 bytes of `text`.
    ///
    /// Best-effort and unacknowledged, as UDP always is; the empty string is
    /// a valid zero-length datagram. Fails with [`SendError::Transmission`]
    /// when the OS rejects the send or the sender is already closed.
    pub fn send(&mut self, text: &str) -> Result<(), SendError> {
        let socket = self
            .socket
            .as_ref()
            .ok_or_else(|| SendError::Transmission {
                source: io::Error::new(io::ErrorKind::NotConnected, "sender is closed"),
            })?;

        self.payload.clear();
        self.payload.extend_from_slice(text.as_bytes());

        let sent = socket
            .send(&self.payload)
            .map_err(|source| SendError::Transmission { source })?;
        // Datagram sends are all-or-nothing; a short write would mean a
        // truncated payload on the wire.
        debug_assert_eq!(sent, self.payload.len());

        log::trace!("sent {sent} byte datagram to {}", self.dest);
        Ok(())
    }

    /// Releases the socket. Idempotent; afterwards every [`send`](Self::send)
    /// fails with [`SendError::Transmission`].
    pub fn close(&mut self) {
        if self.socket.take().is_some() {
            log::debug!("closed sender for {}", self.dest);
        }
    }

    /// The resolved destination address.
    pub fn destination(&self) -> SocketAddr {
        self.dest
    }

    /// Local address of the ephemeral binding, `None` once closed.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket
            .as_ref()
            .and_then(|socket| socket.local_addr().ok())
    }

    pub fn is_closed(&self) -> bool {
        self.socket.is_none()
    }
}
