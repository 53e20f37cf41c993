use crate::{
    codec::{Encoder, Writer},
    packets::encode_frame,
    properties::Properties,
    reason::ReasonCode,
};

#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct SubAckPacket {
    pub packet_id: u16,
    pub properties: Properties,
    pub reason_codes: Vec<ReasonCode>,
}

const PACKET_TYPE: u8 = 0x09;

impl Encoder for SubAckPacket {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        let mut body = Writer::new();

        self.packet_id.encode(&mut body)?;
        self.properties.encode(&mut body)?;
        self.reason_codes.encode(&mut body)?;

        encode_frame(writer, PACKET_TYPE << 4, body)
    }
}

#[cfg(test)]
mod tests {
    use crate::{codec::*, packets::suback::*};

    #[test]
    fn test_suback_packet_encode() -> crate::Result<()> {
        let packet = SubAckPacket {
            packet_id: 1,
            reason_codes: vec![ReasonCode::GrantedQoS1, ReasonCode::TopicFilterInvalid],
            ..Default::default()
        };

        let mut writer = Writer::new();
        packet.encode(&mut writer)?;

        assert_eq!(writer.as_bytes(), &[0x90, 0x05, 0x00, 0x01, 0x00, 0x01, 0x8f]);

        Ok(())
    }
}
