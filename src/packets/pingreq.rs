use crate::{
    codec::{Encoder, Writer},
    packets::encode_frame,
};

#[derive(PartialEq, Eq, Debug, Default, Clone)]
pub struct PingReqPacket {}

const PACKET_TYPE: u8 = 0x0c;

impl Encoder for PingReqPacket {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        encode_frame(writer, PACKET_TYPE << 4, Writer::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::{codec::*, packets::pingreq::*};

    #[test]
    fn test_pingreq_packet_encode() -> crate::Result<()> {
        let mut writer = Writer::new();
        PingReqPacket {}.encode(&mut writer)?;

        assert_eq!(writer.as_bytes(), &[0xc0, 0x00]);

        Ok(())
    }
}
