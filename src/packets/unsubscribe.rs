use crate::{
    codec::{Encoder, Writer},
    packets::encode_frame,
    properties::Properties,
};

#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct UnsubscribePacket {
    pub packet_id: u16,
    pub properties: Properties,
    pub topic_filters: Vec<String>,
}

const PACKET_TYPE: u8 = 0x0a;

impl Encoder for UnsubscribePacket {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        let mut body = Writer::new();

        self.packet_id.encode(&mut body)?;
        self.properties.encode(&mut body)?;
        self.topic_filters.encode(&mut body)?;

        encode_frame(writer, (PACKET_TYPE << 4) | 0b0000_0010, body)
    }
}
