//! Fire-and-forget transmission of short text payloads as UDP datagrams:
//! resolve a destination once, then one datagram per `send`, nothing more.

pub mod constants;
pub mod error;
pub mod sender;
