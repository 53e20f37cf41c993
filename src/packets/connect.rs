use bytes::Bytes;

use crate::{
    codec::{Encoder, Writer},
    packets::encode_frame,
    properties::Properties,
    qos::QoS,
};

const PROTOCOL_NAME: &str = "MQTT";
const PROTOCOL_LEVEL: u8 = 5;

#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Will {
    pub qos: QoS,
    pub retain: bool,
    pub properties: Properties,
    pub topic: String,
    pub payload: Bytes,
}

#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct ConnectPacket {
    pub clean_start: bool,
    pub keep_alive: u16,
    pub properties: Properties,
    pub client_id: String,
    pub will: Option<Will>,
    pub user_name: Option<String>,
    pub password: Option<Bytes>,
}

const PACKET_TYPE: u8 = 0x01;

impl ConnectPacket {
    /// Connect flags byte, derived from which optional fields are present.
    pub fn flags(&self) -> u8 {
        let mut flags: u8 = 0;

        if self.user_name.is_some() {
            flags = 0b1000_0000;
        }

        if self.password.is_some() {
            flags |= 0b0100_0000;
        }

        if let Some(will) = &self.will {
            if will.retain {
                flags |= 0b0010_0000;
            }

            flags |= 0b0000_0100;
            flags |= will.qos.bits() << 3;
        }

        if self.clean_start {
            flags |= 0b0000_0010;
        }

        flags
    }
}

impl Encoder for ConnectPacket {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        let mut body = Writer::new();

        // Variable header
        PROTOCOL_NAME.encode(&mut body)?;
        PROTOCOL_LEVEL.encode(&mut body)?;
        self.flags().encode(&mut body)?;
        self.keep_alive.encode(&mut body)?;
        self.properties.encode(&mut body)?;

        // Payload
        self.client_id.encode(&mut body)?;

        if let Some(will) = &self.will {
            will.properties.encode(&mut body)?;
            will.topic.encode(&mut body)?;
            will.payload.encode(&mut body)?;
        }

        self.user_name.encode(&mut body)?;
        self.password.encode(&mut body)?;

        encode_frame(writer, PACKET_TYPE << 4, body)
    }
}
