//! MQTT 5.0 properties and the property block encoder.
//!
//! A property block is `VariableByteInteger(len)` followed by `len` bytes of
//! `(identifier, value)` pairs. Pairs are always written in ascending
//! identifier order, so equal property sets produce identical bytes no matter
//! how they were filled in.

use bytes::Bytes;
use tracing::trace;

use crate::codec::{Encoder, VariableByteInteger, Writer};

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PropertyId {
    PayloadFormatIndicator = 0x01,
    MessageExpiryInterval = 0x02,
    ContentType = 0x03,
    ResponseTopic = 0x08,
    CorrelationData = 0x09,
    SubscriptionIdentifier = 0x0b,
    SessionExpiryInterval = 0x11,
    AssignedClientIdentifier = 0x12,
    ServerKeepAlive = 0x13,
    AuthenticationMethod = 0x15,
    AuthenticationData = 0x16,
    RequestProblemInformation = 0x17,
    WillDelayInterval = 0x18,
    RequestResponseInformation = 0x19,
    ResponseInformation = 0x1a,
    ServerReference = 0x1c,
    ReasonString = 0x1f,
    ReceiveMaximum = 0x21,
    TopicAliasMaximum = 0x22,
    TopicAlias = 0x23,
    MaximumQoS = 0x24,
    RetainAvailable = 0x25,
    UserProperty = 0x26,
    MaximumPacketSize = 0x27,
    WildcardSubscriptionAvailable = 0x28,
    SubscriptionIdentifierAvailable = 0x29,
    SharedSubscriptionAvailable = 0x2a,
}

impl From<PropertyId> for u8 {
    fn from(id: PropertyId) -> u8 {
        id as u8
    }
}

/// Emission order of the property block.
const PROPERTY_ORDER: [PropertyId; 27] = [
    PropertyId::PayloadFormatIndicator,
    PropertyId::MessageExpiryInterval,
    PropertyId::ContentType,
    PropertyId::ResponseTopic,
    PropertyId::CorrelationData,
    PropertyId::SubscriptionIdentifier,
    PropertyId::SessionExpiryInterval,
    PropertyId::AssignedClientIdentifier,
    PropertyId::ServerKeepAlive,
    PropertyId::AuthenticationMethod,
    PropertyId::AuthenticationData,
    PropertyId::RequestProblemInformation,
    PropertyId::WillDelayInterval,
    PropertyId::RequestResponseInformation,
    PropertyId::ResponseInformation,
    PropertyId::ServerReference,
    PropertyId::ReasonString,
    PropertyId::ReceiveMaximum,
    PropertyId::TopicAliasMaximum,
    PropertyId::TopicAlias,
    PropertyId::MaximumQoS,
    PropertyId::RetainAvailable,
    PropertyId::UserProperty,
    PropertyId::MaximumPacketSize,
    PropertyId::WildcardSubscriptionAvailable,
    PropertyId::SubscriptionIdentifierAvailable,
    PropertyId::SharedSubscriptionAvailable,
];

/// Borrowed value of a single property, tagged with its wire type.
#[derive(Debug, PartialEq, Eq)]
enum PropertyValue<'a> {
    Byte(u8),
    TwoByteInteger(u16),
    FourByteInteger(u32),
    VariableInteger(u32),
    Utf8String(&'a str),
    BinaryData(&'a [u8]),
    Boolean(bool),
}

impl Encoder for PropertyValue<'_> {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        use PropertyValue::*;

        match *self {
            Byte(v) => v.encode(writer),
            TwoByteInteger(v) => v.encode(writer),
            FourByteInteger(v) => v.encode(writer),
            VariableInteger(v) => writer.write_variable(v),
            Utf8String(v) => v.encode(writer),
            BinaryData(v) => writer.write_binary(v),
            Boolean(v) => v.encode(writer),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProperty {
    pub key: String,
    pub value: String,
}

impl UserProperty {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        UserProperty {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Encoder for UserProperty {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        writer.write_string(&self.key)?;
        writer.write_string(&self.value)
    }
}

/// The property set attached to a control packet.
///
/// A property is written iff its field is `Some`, including `Some(0)`,
/// `Some(false)` and empty strings. User properties keep duplicates and
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Properties {
    pub payload_format_indicator: Option<u8>,
    pub message_expiry_interval: Option<u32>,
    pub content_type: Option<String>,
    pub response_topic: Option<String>,
    pub correlation_data: Option<Bytes>,
    pub subscription_identifier: Option<u32>,
    pub session_expiry_interval: Option<u32>,
    pub assigned_client_identifier: Option<String>,
    pub server_keep_alive: Option<u16>,
    pub authentication_method: Option<String>,
    pub authentication_data: Option<Bytes>,
    pub request_problem_information: Option<bool>,
    pub will_delay_interval: Option<u32>,
    pub request_response_information: Option<bool>,
    pub response_information: Option<String>,
    pub server_reference: Option<String>,
    pub reason_string: Option<String>,
    pub receive_maximum: Option<u16>,
    pub topic_alias_maximum: Option<u16>,
    pub topic_alias: Option<u16>,
    pub maximum_qos: Option<u8>,
    pub retain_available: Option<bool>,
    pub user_properties: Vec<UserProperty>,
    pub maximum_packet_size: Option<u32>,
    pub wildcard_subscription_available: Option<bool>,
    pub subscription_identifier_available: Option<bool>,
    pub shared_subscription_available: Option<bool>,
}

impl Properties {
    pub fn add_user_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.user_properties.push(UserProperty::new(key, value));
    }

    /// Returns true when encoding would produce an empty block.
    pub fn is_empty(&self) -> bool {
        self.user_properties.is_empty() && PROPERTY_ORDER.iter().all(|id| self.value(*id).is_none())
    }

    /// Single valued property lookup. User properties are multi valued and
    /// always yield `None` here.
    fn value(&self, id: PropertyId) -> Option<PropertyValue<'_>> {
        use PropertyId::*;
        use PropertyValue::*;

        match id {
            PayloadFormatIndicator => self.payload_format_indicator.map(Byte),
            MessageExpiryInterval => self.message_expiry_interval.map(FourByteInteger),
            ContentType => self.content_type.as_deref().map(Utf8String),
            ResponseTopic => self.response_topic.as_deref().map(Utf8String),
            CorrelationData => self.correlation_data.as_deref().map(BinaryData),
            SubscriptionIdentifier => self.subscription_identifier.map(VariableInteger),
            SessionExpiryInterval => self.session_expiry_interval.map(FourByteInteger),
            AssignedClientIdentifier => self.assigned_client_identifier.as_deref().map(Utf8String),
            ServerKeepAlive => self.server_keep_alive.map(TwoByteInteger),
            AuthenticationMethod => self.authentication_method.as_deref().map(Utf8String),
            AuthenticationData => self.authentication_data.as_deref().map(BinaryData),
            RequestProblemInformation => self.request_problem_information.map(Boolean),
            WillDelayInterval => self.will_delay_interval.map(FourByteInteger),
            RequestResponseInformation => self.request_response_information.map(Boolean),
            ResponseInformation => self.response_information.as_deref().map(Utf8String),
            ServerReference => self.server_reference.as_deref().map(Utf8String),
            ReasonString => self.reason_string.as_deref().map(Utf8String),
            ReceiveMaximum => self.receive_maximum.map(TwoByteInteger),
            TopicAliasMaximum => self.topic_alias_maximum.map(TwoByteInteger),
            TopicAlias => self.topic_alias.map(TwoByteInteger),
            MaximumQoS => self.maximum_qos.map(Byte),
            RetainAvailable => self.retain_available.map(Boolean),
            UserProperty => None,
            MaximumPacketSize => self.maximum_packet_size.map(FourByteInteger),
            WildcardSubscriptionAvailable => self.wildcard_subscription_available.map(Boolean),
            SubscriptionIdentifierAvailable => self.subscription_identifier_available.map(Boolean),
            SharedSubscriptionAvailable => self.shared_subscription_available.map(Boolean),
        }
    }

    fn encode_body(&self, body: &mut Writer) -> crate::Result<usize> {
        let mut count = 0;

        for id in PROPERTY_ORDER {
            if id == PropertyId::UserProperty {
                for property in &self.user_properties {
                    body.write_byte(id.into());
                    property.encode(body)?;
                    count += 1;
                }

                continue;
            }

            if let Some(value) = self.value(id) {
                body.write_byte(id.into());
                value.encode(body)?;
                count += 1;
            }
        }

        Ok(count)
    }
}

impl Encoder for Properties {
    fn encode(&self, writer: &mut Writer) -> crate::Result<()> {
        let mut body = Writer::new();
        let count = self.encode_body(&mut body)?;

        let len = VariableByteInteger::try_from(body.len())?;
        trace!(properties = count, length = body.len(), "encoded property block");

        len.encode(writer)?;
        writer.write_bytes_raw(body.as_bytes());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use crate::{
        codec::{tests::decode_variable, Encoder, Writer},
        error::Error,
        properties::*,
    };
    use proptest::prelude::*;

    fn encode(properties: &Properties) -> crate::Result<Vec<u8>> {
        let mut writer = Writer::new();
        properties.encode(&mut writer)?;

        Ok(writer.as_bytes().to_vec())
    }

    #[test]
    fn test_empty_properties() -> crate::Result<()> {
        let properties = Properties::default();

        assert!(properties.is_empty());
        assert_eq!(encode(&properties)?, vec![0x00]);

        Ok(())
    }

    #[test]
    fn test_content_type_only() -> crate::Result<()> {
        let properties = Properties {
            content_type: Some(String::from("json")),
            ..Default::default()
        };

        assert!(!properties.is_empty());
        assert_eq!(
            encode(&properties)?,
            vec![0x07, 0x03, 0x00, 0x04, 0x6a, 0x73, 0x6f, 0x6e]
        );

        Ok(())
    }

    #[test]
    fn test_explicit_zero_values_are_encoded() -> crate::Result<()> {
        let properties = Properties {
            payload_format_indicator: Some(0),
            maximum_qos: Some(0),
            retain_available: Some(false),
            reason_string: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(
            encode(&properties)?,
            vec![0x09, 0x01, 0x00, 0x1f, 0x00, 0x00, 0x24, 0x00, 0x25, 0x00]
        );

        Ok(())
    }

    #[test]
    fn test_value_encodings() -> crate::Result<()> {
        let properties = Properties {
            message_expiry_interval: Some(0x0102_0304),
            correlation_data: Some(Bytes::from_static(&[0xaa, 0xbb])),
            subscription_identifier: Some(128),
            server_keep_alive: Some(60),
            request_problem_information: Some(true),
            ..Default::default()
        };

        assert_eq!(
            encode(&properties)?,
            vec![
                0x12, // Property length
                0x02, 0x01, 0x02, 0x03, 0x04, // Message expiry interval
                0x09, 0x00, 0x02, 0xaa, 0xbb, // Correlation data
                0x0b, 0x80, 0x01, // Subscription identifier
                0x13, 0x00, 0x3c, // Server keep alive
                0x17, 0x01, // Request problem information
            ]
        );

        Ok(())
    }

    #[test]
    fn test_connack_properties_ascending_order() -> crate::Result<()> {
        // Filled in a different order than the wire order
        let properties = Properties {
            shared_subscription_available: Some(true),
            wildcard_subscription_available: Some(true),
            topic_alias_maximum: Some(65535),
            assigned_client_identifier: Some(String::from("abc")),
            maximum_packet_size: Some(1048576),
            retain_available: Some(true),
            subscription_identifier_available: Some(true),
            ..Default::default()
        };

        assert_eq!(
            encode(&properties)?,
            vec![
                0x16, 0x12, 0x00, 0x03, 0x61, 0x62, 0x63, 0x22, 0xff, 0xff, 0x25, 0x01, 0x27,
                0x00, 0x10, 0x00, 0x00, 0x28, 0x01, 0x29, 0x01, 0x2a, 0x01,
            ]
        );

        Ok(())
    }

    #[test]
    fn test_user_properties_keep_duplicates_and_order() -> crate::Result<()> {
        let mut properties = Properties {
            retain_available: Some(true),
            maximum_packet_size: Some(1),
            ..Default::default()
        };
        properties.add_user_property("k", "2");
        properties.add_user_property("a", "1");
        properties.add_user_property("k", "3");

        assert_eq!(
            encode(&properties)?,
            vec![
                0x1c, // Property length
                0x25, 0x01, // Retain available
                0x26, 0x00, 0x01, 0x6b, 0x00, 0x01, 0x32, // k=2
                0x26, 0x00, 0x01, 0x61, 0x00, 0x01, 0x31, // a=1
                0x26, 0x00, 0x01, 0x6b, 0x00, 0x01, 0x33, // k=3
                0x27, 0x00, 0x00, 0x00, 0x01, // Maximum packet size
            ]
        );

        Ok(())
    }

    #[test]
    fn test_two_byte_property_length_prefix() -> crate::Result<()> {
        let properties = Properties {
            reason_string: Some("r".repeat(200)),
            ..Default::default()
        };

        let encoded = encode(&properties)?;

        // 1 identifier byte + 2 length bytes + 200 characters
        assert_eq!(&encoded[..2], &[0xcb, 0x01]);
        assert_eq!(encoded.len(), 2 + 203);

        Ok(())
    }

    #[test]
    fn test_oversized_string_is_rejected() {
        let properties = Properties {
            response_topic: Some("t".repeat(65536)),
            ..Default::default()
        };

        match encode(&properties) {
            Err(Error::StringTooLong { len }) => assert_eq!(len, 65536),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_oversized_user_property_is_rejected() {
        let mut properties = Properties::default();
        properties.add_user_property("key", "v".repeat(70000));

        let mut writer = Writer::new();
        let err = properties.encode(&mut writer).unwrap_err();

        assert!(err.is_range_error());
        assert!(writer.is_empty());
    }

    #[test]
    fn test_oversized_binary_is_rejected() {
        let properties = Properties {
            correlation_data: Some(Bytes::from(vec![0u8; 65536])),
            ..Default::default()
        };

        let mut writer = Writer::new();
        match properties.encode(&mut writer) {
            Err(Error::BinaryTooLong { len }) => assert_eq!(len, 65536),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(writer.is_empty());
    }

    #[test]
    fn test_subscription_identifier_out_of_range() {
        let properties = Properties {
            subscription_identifier: Some(268_435_456),
            ..Default::default()
        };

        match encode(&properties) {
            Err(Error::VariableByteIntegerOutOfRange(v)) => assert_eq!(v, 268_435_456),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_property_identifiers() {
        assert_eq!(u8::from(PropertyId::PayloadFormatIndicator), 0x01);
        assert_eq!(u8::from(PropertyId::SubscriptionIdentifier), 0x0b);
        assert_eq!(u8::from(PropertyId::ReasonString), 0x1f);
        assert_eq!(u8::from(PropertyId::UserProperty), 0x26);
        assert_eq!(u8::from(PropertyId::SharedSubscriptionAvailable), 0x2a);

        let mut previous = 0u8;
        for id in PROPERTY_ORDER {
            assert!(u8::from(id) > previous);
            previous = id.into();
        }
    }

    fn read_string(buffer: &[u8]) -> (String, &[u8]) {
        let len = u16::from_be_bytes([buffer[0], buffer[1]]) as usize;
        let text = String::from_utf8(buffer[2..2 + len].to_vec()).unwrap();

        (text, &buffer[2 + len..])
    }

    proptest! {
        #[test]
        fn prop_user_properties_preserve_insertion_order(
            entries in proptest::collection::vec(("[a-z]{0,8}", "[a-z0-9]{0,8}"), 2..16)
        ) {
            let mut properties = Properties::default();
            for (key, value) in &entries {
                properties.add_user_property(key.clone(), value.clone());
            }

            let first = encode(&properties).unwrap();
            let second = encode(&properties).unwrap();
            prop_assert_eq!(&first, &second);

            let (len, consumed) = decode_variable(&first).unwrap();
            let mut body = &first[consumed..];
            prop_assert_eq!(body.len(), len as usize);

            let mut decoded = Vec::new();
            while !body.is_empty() {
                prop_assert_eq!(body[0], 0x26);
                let (key, rest) = read_string(&body[1..]);
                let (value, rest) = read_string(rest);
                decoded.push((key, value));
                body = rest;
            }

            prop_assert_eq!(decoded, entries);
        }
    }
}
