pub mod codec;
pub mod config;
pub mod control_packet;
pub mod encoder;
pub mod error;
pub mod packets;
pub mod properties;
pub mod qos;
pub mod reason;

/// A specialized `Result` type for mercurio-wire operations
///
/// This is defined as a convenience
pub type Result<T> = std::result::Result<T, crate::error::Error>;
