use crate::{
    codec::{Encoder, Writer},
    packets::encode_frame,
    properties::Properties,
    reason::ReasonCode,
};

#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct ConnAckPacket {
    pub session_present: bool,
    pub reason_code: ReasonCode,
    pub properties: Properties,
}

const PACKET_TYPE: u8 = 0x02;

impl Encoder for ConnAckPacket {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        let mut body = Writer::new();

        let flags = 0b0000_0001 & (self.session_present as u8);
        flags.encode(&mut body)?;
        self.reason_code.encode(&mut body)?;
        self.properties.encode(&mut body)?;

        encode_frame(writer, PACKET_TYPE << 4, body)
    }
}
