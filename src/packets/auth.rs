use crate::{
    codec::{Encoder, Writer},
    packets::encode_reason_only,
    properties::Properties,
    reason::ReasonCode,
};

#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct AuthPacket {
    pub reason_code: ReasonCode,
    pub properties: Properties,
}

const PACKET_TYPE: u8 = 0x0f;

impl Encoder for AuthPacket {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        encode_reason_only(writer, PACKET_TYPE << 4, self.reason_code, &self.properties)
    }
}
