use crate::{
    codec::{Encoder, Writer},
    packets::encode_frame,
    properties::Properties,
    qos::QoS,
};

#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RetainHandling {
    #[default]
    SendAtSubscribe = 0,
    SendAtSubscribeIfNew = 1,
    DoNotSend = 2,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SubscriptionOptions {
    pub qos: QoS,
    pub no_local: bool,
    pub retain_as_published: bool,
    pub retain_handling: RetainHandling,
}

impl Encoder for SubscriptionOptions {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        let mut options = self.qos.bits();

        if self.no_local {
            options |= 0b0000_0100;
        }

        if self.retain_as_published {
            options |= 0b0000_1000;
        }

        options |= (self.retain_handling as u8) << 4;

        writer.write_u8(options);
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subscription {
    pub topic_filter: String,
    pub options: SubscriptionOptions,
}

impl Encoder for Subscription {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        self.topic_filter.encode(writer)?;
        self.options.encode(writer)
    }
}

#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct SubscribePacket {
    pub packet_id: u16,
    pub properties: Properties,
    pub subscriptions: Vec<Subscription>,
}

const PACKET_TYPE: u8 = 0x08;

impl Encoder for SubscribePacket {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        let mut body = Writer::new();

        self.packet_id.encode(&mut body)?;
        self.properties.encode(&mut body)?;
        self.subscriptions.encode(&mut body)?;

        encode_frame(writer, (PACKET_TYPE << 4) | 0b0000_0010, body)
    }
}
