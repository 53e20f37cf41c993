use crate::{
    codec::{Encoder, Writer},
    packets::encode_frame,
};

#[derive(PartialEq, Eq, Debug, Default, Clone)]
pub struct PingRespPacket {}

const PACKET_TYPE: u8 = 0x0d;

impl Encoder for PingRespPacket {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        encode_frame(writer, PACKET_TYPE << 4, Writer::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::{codec::*, packets::pingresp::*};

    #[test]
    fn test_pingresp_packet_encode() -> crate::Result<()> {
        let mut writer = Writer::new();
        PingRespPacket {}.encode(&mut writer)?;

        assert_eq!(writer.as_bytes(), &[0xd0, 0x00]);

        Ok(())
    }
}
