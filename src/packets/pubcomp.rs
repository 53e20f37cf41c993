use crate::{
    codec::{Encoder, Writer},
    packets::encode_ack,
    properties::Properties,
    reason::ReasonCode,
};

#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct PubCompPacket {
    pub packet_id: u16,
    pub reason: ReasonCode,
    pub properties: Properties,
}

const PACKET_TYPE: u8 = 0x07;

impl Encoder for PubCompPacket {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        encode_ack(writer, PACKET_TYPE << 4, self.packet_id, self.reason, &self.properties)
    }
}

#[cfg(test)]
mod tests {
    use crate::{codec::*, packets::pubcomp::*};

    #[test]
    fn test_pubcomp_packet_with_properties() -> crate::Result<()> {
        let packet = PubCompPacket {
            packet_id: 4,
            reason: ReasonCode::Success,
            properties: Properties {
                reason_string: Some(String::from("x")),
                ..Default::default()
            },
        };

        let mut writer = Writer::new();
        packet.encode(&mut writer)?;

        assert_eq!(
            writer.as_bytes(),
            &[0x70, 0x08, 0x00, 0x04, 0x00, 0x04, 0x1f, 0x00, 0x01, 0x78]
        );

        Ok(())
    }
}
