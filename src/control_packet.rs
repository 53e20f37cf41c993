use crate::{
    codec::{Encoder, Writer},
    packets::{
        auth::AuthPacket, connack::ConnAckPacket, connect::ConnectPacket,
        disconnect::DisconnectPacket, pingreq::PingReqPacket, pingresp::PingRespPacket,
        puback::PubAckPacket, pubcomp::PubCompPacket, publish::PublishPacket,
        pubrec::PubRecPacket, pubrel::PubRelPacket, suback::SubAckPacket,
        subscribe::SubscribePacket, unsuback::UnsubAckPacket, unsubscribe::UnsubscribePacket,
    },
};

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ControlPacket {
    Connect(ConnectPacket),
    ConnAck(ConnAckPacket),
    Publish(PublishPacket),
    PubAck(PubAckPacket),
    PubRec(PubRecPacket),
    PubRel(PubRelPacket),
    PubComp(PubCompPacket),
    Subscribe(SubscribePacket),
    SubAck(SubAckPacket),
    Unsubscribe(UnsubscribePacket),
    UnsubAck(UnsubAckPacket),
    PingReq(PingReqPacket),
    PingResp(PingRespPacket),
    Disconnect(DisconnectPacket),
    Auth(AuthPacket),
}

#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PacketType {
    Connect = 0x01,
    ConnAck,
    Publish,
    PubAck,
    PubRec,
    PubRel,
    PubComp,
    Subscribe,
    SubAck,
    Unsubscribe,
    UnsubAck,
    PingReq,
    PingResp,
    Disconnect,
    Auth,
}

impl ControlPacket {
    pub fn packet_type(&self) -> PacketType {
        use ControlPacket::*;

        match self {
            Connect(_) => PacketType::Connect,
            ConnAck(_) => PacketType::ConnAck,
            Publish(_) => PacketType::Publish,
            PubAck(_) => PacketType::PubAck,
            PubRec(_) => PacketType::PubRec,
            PubRel(_) => PacketType::PubRel,
            PubComp(_) => PacketType::PubComp,
            Subscribe(_) => PacketType::Subscribe,
            SubAck(_) => PacketType::SubAck,
            Unsubscribe(_) => PacketType::Unsubscribe,
            UnsubAck(_) => PacketType::UnsubAck,
            PingReq(_) => PacketType::PingReq,
            PingResp(_) => PacketType::PingResp,
            Disconnect(_) => PacketType::Disconnect,
            Auth(_) => PacketType::Auth,
        }
    }
}

impl Encoder for ControlPacket {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        use ControlPacket::*;

        match self {
            Connect(p) => p.encode(writer),
            ConnAck(p) => p.encode(writer),
            Publish(p) => p.encode(writer),
            PubAck(p) => p.encode(writer),
            PubRec(p) => p.encode(writer),
            PubRel(p) => p.encode(writer),
            PubComp(p) => p.encode(writer),
            Subscribe(p) => p.encode(writer),
            SubAck(p) => p.encode(writer),
            Unsubscribe(p) => p.encode(writer),
            UnsubAck(p) => p.encode(writer),
            PingReq(p) => p.encode(writer),
            PingResp(p) => p.encode(writer),
            Disconnect(p) => p.encode(writer),
            Auth(p) => p.encode(writer),
        }
    }
}
