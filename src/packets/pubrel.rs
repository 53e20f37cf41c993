use crate::{
    codec::{Encoder, Writer},
    packets::encode_ack,
    properties::Properties,
    reason::ReasonCode,
};

#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct PubRelPacket {
    pub packet_id: u16,
    pub reason: ReasonCode,
    pub properties: Properties,
}

const PACKET_TYPE: u8 = 0x06;

impl Encoder for PubRelPacket {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        // Reserved flags of PUBREL are fixed at 0b0010
        let header = (PACKET_TYPE << 4) | 0b0000_0010;
        encode_ack(writer, header, self.packet_id, self.reason, &self.properties)
    }
}
