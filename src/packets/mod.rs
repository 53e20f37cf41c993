//! Control packet assembly.
//!
//! Each packet encodes its variable header and payload into a scratch
//! [`Writer`] first; the fixed header is written once the body length is
//! known. A packet that fails to encode leaves the caller's writer untouched.

pub mod auth;
pub mod connack;
pub mod connect;
pub mod disconnect;
pub mod pingreq;
pub mod pingresp;
pub mod puback;
pub mod pubcomp;
pub mod publish;
pub mod pubrec;
pub mod pubrel;
pub mod suback;
pub mod subscribe;
pub mod unsuback;
pub mod unsubscribe;

use tracing::debug;

use crate::{
    codec::{Encoder, VariableByteInteger, Writer},
    properties::Properties,
    reason::ReasonCode,
};

pub(crate) fn encode_frame(writer: &mut Writer, header: u8, body: Writer) -> crate::Result<()> {
    let remaining_len = VariableByteInteger::try_from(body.len())?;

    writer.reserve(1 + remaining_len.encoded_size()? + body.len());
    writer.write_byte(header);
    remaining_len.encode(writer)?;
    writer.write_bytes_raw(body.as_bytes());

    Ok(())
}

/// Body shared by PUBACK, PUBREC, PUBREL and PUBCOMP. The reason code and
/// property block are dropped when neither carries information.
pub(crate) fn encode_ack(
    writer: &mut Writer,
    header: u8,
    packet_id: u16,
    reason: ReasonCode,
    properties: &Properties,
) -> crate::Result<()> {
    let mut body = Writer::new();

    packet_id.encode(&mut body)?;

    if !reason.is_success() {
        debug!(packet_id, reason = %reason, "Encoding acknowledgement with reason code");
    }

    if !reason.is_success() || !properties.is_empty() {
        reason.encode(&mut body)?;
        properties.encode(&mut body)?;
    }

    encode_frame(writer, header, body)
}

/// Body shared by DISCONNECT and AUTH, which may be sent with a remaining
/// length of zero.
pub(crate) fn encode_reason_only(
    writer: &mut Writer,
    header: u8,
    reason: ReasonCode,
    properties: &Properties,
) -> crate::Result<()> {
    let mut body = Writer::new();

    if !reason.is_success() {
        debug!(header, reason = %reason, "Encoding packet with reason code");
    }

    if !reason.is_success() || !properties.is_empty() {
        reason.encode(&mut body)?;
        properties.encode(&mut body)?;
    }

    encode_frame(writer, header, body)
}
