use derive_more::{Display, Error};
use std::io;

/// Everything that can go wrong while constructing or using a
/// [`DatagramSender`](crate::sender::DatagramSender).
///
/// Each variant keeps the underlying [`io::Error`] as its source, so callers
/// get the full cause chain out of `{:#}`-style formatting.
#[derive(Debug, Display, Error)]
pub enum SendError {
    /// The destination host name could not be resolved (or resolved to no
    /// addresses at all). Raised at construction; no sender is created.
    #[display("failed to resolve {host}:{port}: {source}")]
    AddressResolution {
        host: String,
        port: u16,
        source: io::Error,
    },

    /// Creating, binding or connecting the UDP socket failed at construction.
    #[display("failed to open UDP socket: {source}")]
    Socket { source: io::Error },

    /// The OS-level send failed, or the sender was already closed.
    #[display("failed to send datagram: {source}")]
    Transmission { source: io::Error },
}
