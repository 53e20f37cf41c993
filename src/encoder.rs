//! Entry point turning control packets into bytes ready for transmission.

use bytes::Bytes;
use tracing::{debug, trace};

use crate::{
    codec::{Encoder, Writer},
    config::EncoderConfig,
    control_packet::ControlPacket,
    error::Error,
};

#[derive(Debug, Clone, Default)]
pub struct PacketEncoder {
    config: EncoderConfig,
}

impl PacketEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Encodes a single packet. On error nothing is returned, so a partially
    /// encoded packet can never reach the wire.
    pub fn encode(&self, packet: &ControlPacket) -> crate::Result<Bytes> {
        let mut writer = Writer::with_capacity(self.config.initial_capacity);

        if let Err(e) = packet.encode(&mut writer) {
            debug!(packet_type = ?packet.packet_type(), "Failed to encode packet: {}", e);
            return Err(e);
        }

        if let Some(maximum) = self.config.maximum_packet_size {
            if writer.len() > maximum as usize {
                debug!(
                    packet_type = ?packet.packet_type(),
                    size = writer.len(),
                    maximum,
                    "Packet exceeds maximum packet size"
                );
                return Err(Error::PacketTooLarge {
                    size: writer.len(),
                    maximum,
                });
            }
        }

        trace!(packet_type = ?packet.packet_type(), size = writer.len(), "Encoded packet");

        Ok(writer.freeze())
    }
}
