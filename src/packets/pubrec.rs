use crate::{
    codec::{Encoder, Writer},
    packets::encode_ack,
    properties::Properties,
    reason::ReasonCode,
};

#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct PubRecPacket {
    pub packet_id: u16,
    pub reason: ReasonCode,
    pub properties: Properties,
}

const PACKET_TYPE: u8 = 0x05;

impl Encoder for PubRecPacket {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        encode_ack(writer, PACKET_TYPE << 4, self.packet_id, self.reason, &self.properties)
    }
}
