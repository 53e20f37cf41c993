use bytes::Bytes;

use crate::{
    codec::{Encoder, Writer},
    packets::encode_frame,
    properties::Properties,
    qos::QoS,
};

#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct PublishPacket {
    pub dup: bool,
    pub qos: QoS,
    pub retain: bool,
    pub topic: String,
    /// Only written for QoS 1 and 2.
    pub packet_id: u16,
    pub properties: Properties,
    pub payload: Bytes,
}

const PACKET_TYPE: u8 = 0x03;

impl PublishPacket {
    fn header(&self) -> u8 {
        let mut header = PACKET_TYPE << 4;

        if self.dup {
            header |= 0b0000_1000;
        }

        header |= self.qos.bits() << 1;

        if self.retain {
            header |= 0b0000_0001;
        }

        header
    }
}

impl Encoder for PublishPacket {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        let mut body = Writer::new();

        self.topic.encode(&mut body)?;

        if self.qos != QoS::AtMostOnce {
            self.packet_id.encode(&mut body)?;
        }

        self.properties.encode(&mut body)?;

        // The payload length is implied by the remaining length
        body.write_bytes_raw(&self.payload);

        encode_frame(writer, self.header(), body)
    }
}
