//! Length-prefix framing.
//!
//! Every length on the wire is an unsigned base-128 varint: seven payload
//! bits per byte, least-significant group first, high bit set on every byte
//! except the last. This is the same encoding protobuf uses, so the prost
//! primitives are reused rather than reimplemented.

use dexwire_types::{DexwireError, Result, TypePrefix, constants::TYPE_PREFIX_LEN};
use prost::encoding;

/// Append `value` as a varint.
pub fn encode_varint(value: u64, buf: &mut Vec<u8>) {
    encoding::encode_varint(value, buf);
}

/// Read one varint from the front of `buf`, advancing it.
///
/// # Errors
/// `MalformedFrame` if the input ends mid-varint or overflows 64 bits.
pub fn decode_varint(buf: &mut &[u8]) -> Result<u64> {
    encoding::decode_varint(buf).map_err(|e| DexwireError::MalformedFrame {
        reason: e.to_string(),
    })
}

/// `varint(len(bytes)) ‖ bytes`.
#[must_use]
pub fn length_prefixed(bytes: &[u8]) -> Vec<u8> {
    let len = bytes.len() as u64;
    let mut out = Vec::with_capacity(encoding::encoded_len_varint(len) + bytes.len());
    encode_varint(len, &mut out);
    out.extend_from_slice(bytes);
    out
}

/// `varint(4 + len(body)) ‖ prefix ‖ body`.
#[must_use]
pub fn frame_prefixed(prefix: TypePrefix, body: &[u8]) -> Vec<u8> {
    let len = TYPE_PREFIX_LEN + body.len();
    let mut out = Vec::with_capacity(encoding::encoded_len_varint(len as u64) + len);
    encode_varint(len as u64, &mut out);
    out.extend_from_slice(prefix.as_bytes());
    out.extend_from_slice(body);
    out
}

/// Strip a leading varint and return exactly the bytes it covers.
///
/// # Errors
/// `MalformedFrame` if the declared length differs from what follows.
pub fn split_length_prefixed(bytes: &[u8]) -> Result<&[u8]> {
    let mut cursor = bytes;
    let declared = decode_varint(&mut cursor)?;
    let declared = usize::try_from(declared).map_err(|_| DexwireError::MalformedFrame {
        reason: format!("declared length {declared} exceeds address space"),
    })?;

    if declared != cursor.len() {
        return Err(DexwireError::MalformedFrame {
            reason: format!(
                "declared length {declared}, {} bytes follow",
                cursor.len()
            ),
        });
    }
    Ok(cursor)
}

/// A parsed `varint ‖ prefix ‖ body` frame, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    pub prefix: TypePrefix,
    pub body: &'a [u8],
}

impl<'a> Frame<'a> {
    /// # Errors
    /// `MalformedFrame` on a length mismatch or a frame shorter than a prefix.
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        let content = split_length_prefixed(bytes)?;
        if content.len() < TYPE_PREFIX_LEN {
            return Err(DexwireError::MalformedFrame {
                reason: format!("{} bytes cannot hold a type prefix", content.len()),
            });
        }
        let (head, body) = content.split_at(TYPE_PREFIX_LEN);
        let prefix: [u8; TYPE_PREFIX_LEN] =
            head.try_into().map_err(|_| DexwireError::MalformedFrame {
                reason: "short type prefix".to_string(),
            })?;
        Ok(Self {
            prefix: TypePrefix(prefix),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use dexwire_types::{NEW_ORDER_PREFIX, STD_TX_PREFIX};

    use super::*;

    fn varint(value: u64) -> Vec<u8> {
        let mut out = Vec::new();
        encode_varint(value, &mut out);
        out
    }

    #[test]
    fn varint_known_vectors() {
        assert_eq!(varint(0), vec![0x00]);
        assert_eq!(varint(1), vec![0x01]);
        assert_eq!(varint(127), vec![0x7F]);
        assert_eq!(varint(128), vec![0x80, 0x01]);
        assert_eq!(varint(300), vec![0xAC, 0x02]);
        assert_eq!(varint(16_384), vec![0x80, 0x80, 0x01]);
    }

    #[test]
    fn decode_advances_cursor() {
        let bytes = [0xAC, 0x02, 0xFF];
        let mut cursor: &[u8] = &bytes;
        assert_eq!(decode_varint(&mut cursor).unwrap(), 300);
        assert_eq!(cursor, &[0xFF]);
    }

    #[test]
    fn decode_truncated_varint_fails() {
        let mut cursor: &[u8] = &[0x80];
        assert!(matches!(
            decode_varint(&mut cursor),
            Err(DexwireError::MalformedFrame { .. })
        ));
    }

    #[test]
    fn frame_length_covers_prefix_and_body() {
        let body = vec![0xAB; 200];
        let framed = frame_prefixed(NEW_ORDER_PREFIX, &body);
        // 204 needs two varint bytes.
        assert_eq!(&framed[..2], &varint(204)[..]);
        assert_eq!(framed.len(), 2 + 4 + 200);
        assert_eq!(&framed[2..6], NEW_ORDER_PREFIX.as_bytes());
    }

    #[test]
    fn frame_parse_recovers_parts() {
        let framed = frame_prefixed(STD_TX_PREFIX, b"payload");
        let frame = Frame::parse(&framed).unwrap();
        assert_eq!(frame.prefix, STD_TX_PREFIX);
        assert_eq!(frame.body, b"payload");
    }

    #[test]
    fn frame_parse_rejects_length_mismatch() {
        let mut framed = frame_prefixed(STD_TX_PREFIX, b"payload");
        framed.push(0x00);
        assert!(Frame::parse(&framed).is_err());
        framed.truncate(framed.len() - 2);
        assert!(Frame::parse(&framed).is_err());
    }

    #[test]
    fn frame_parse_rejects_short_content() {
        let framed = length_prefixed(&[0x01, 0x02]);
        assert!(matches!(
            Frame::parse(&framed),
            Err(DexwireError::MalformedFrame { .. })
        ));
    }

    #[test]
    fn length_prefixed_roundtrip() {
        let key = [0x02u8; 33];
        let framed = length_prefixed(&key);
        assert_eq!(framed[0], 33);
        assert_eq!(split_length_prefixed(&framed).unwrap(), &key);
    }
}
