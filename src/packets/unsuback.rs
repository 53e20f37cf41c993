use crate::{
    codec::{Encoder, Writer},
    packets::encode_frame,
    properties::Properties,
    reason::ReasonCode,
};

#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct UnsubAckPacket {
    pub packet_id: u16,
    pub properties: Properties,
    pub reason_codes: Vec<ReasonCode>,
}

const PACKET_TYPE: u8 = 0x0b;

impl Encoder for UnsubAckPacket {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        let mut body = Writer::new();

        self.packet_id.encode(&mut body)?;
        self.properties.encode(&mut body)?;
        self.reason_codes.encode(&mut body)?;

        encode_frame(writer, PACKET_TYPE << 4, body)
    }
}
