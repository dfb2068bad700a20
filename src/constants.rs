/// Destination the historical smoke test pointed at.
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 12345;

/// Largest payload a single UDP datagram can carry; sizes receive buffers.
pub const MAX_DATAGRAM_SIZE: usize = u16::MAX as usize;
