//! Text encoding for length-prefixed strings

use crate::constants::{BufferConfig, ByteOrder, TextEncoding};
use crate::error::StashError;
use std::borrow::Cow;

/// Encode `text` under the configured encoding
///
/// UTF-8 and ASCII borrow the input; UTF-16 allocates.
pub fn encode_text(text: &str, config: BufferConfig) -> Result<Cow<'_, [u8]>, StashError> {
    match config.encoding {
        TextEncoding::Utf8 => Ok(Cow::Borrowed(text.as_bytes())),
        TextEncoding::Ascii => match text.chars().find(|c| !c.is_ascii()) {
            None => Ok(Cow::Borrowed(text.as_bytes())),
            Some(c) => Err(StashError::Encoding(format!(
                "character {:?} in {:?} is not ASCII",
                c, text
            ))),
        },
        TextEncoding::Utf16 => {
            let mut out = Vec::with_capacity(text.len() * 2);
            for unit in text.encode_utf16() {
                match config.byte_order {
                    ByteOrder::Little => out.extend_from_slice(&unit.to_le_bytes()),
                    ByteOrder::Big => out.extend_from_slice(&unit.to_be_bytes()),
                }
            }
            Ok(Cow::Owned(out))
        }
    }
}

/// Decode `bytes` under the configured encoding
pub fn decode_text(bytes: &[u8], config: BufferConfig) -> Result<String, StashError> {
    match config.encoding {
        TextEncoding::Utf8 => std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| StashError::Encoding(e.to_string())),
        TextEncoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
            // ASCII is a subset of UTF-8, so the conversion cannot fail here
            None => Ok(String::from_utf8_lossy(bytes).into_owned()),
            Some(at) => Err(StashError::Encoding(format!(
                "byte 0x{:02x} at offset {} is not ASCII",
                bytes[at], at
            ))),
        },
        TextEncoding::Utf16 => {
            if bytes.len() % 2 != 0 {
                return Err(StashError::Encoding(format!(
                    "UTF-16 text has odd length {}",
                    bytes.len()
                )));
            }
            let units = bytes.chunks_exact(2).map(|pair| match config.byte_order {
                ByteOrder::Little => u16::from_le_bytes([pair[0], pair[1]]),
                ByteOrder::Big => u16::from_be_bytes([pair[0], pair[1]]),
            });
            char::decode_utf16(units)
                .collect::<Result<String, _>>()
                .map_err(|e| StashError::Encoding(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_borrows() {
        let encoded = encode_text("héllo", BufferConfig::default()).unwrap();
        assert!(matches!(encoded, Cow::Borrowed(_)));
        assert_eq!(encoded.len(), 6);
    }

    #[test]
    fn test_ascii_rejects_multibyte() {
        let config = BufferConfig::default().with_encoding(TextEncoding::Ascii);
        let result = encode_text("naïve", config);
        assert!(matches!(result, Err(StashError::Encoding(_))));

        let result = decode_text(&[b'a', 0xC3, 0xAF], config);
        assert!(matches!(result, Err(StashError::Encoding(_))));
    }

    #[test]
    fn test_utf16_follows_byte_order() {
        let little = BufferConfig::default().with_encoding(TextEncoding::Utf16);
        let big = little.with_byte_order(ByteOrder::Big);

        assert_eq!(encode_text("A", little).unwrap().as_ref(), &[0x41, 0x00]);
        assert_eq!(encode_text("A", big).unwrap().as_ref(), &[0x00, 0x41]);

        let encoded = encode_text("日本🦀", big).unwrap();
        assert_eq!(decode_text(&encoded, big).unwrap(), "日本🦀");
    }

    #[test]
    fn test_utf16_rejects_odd_length_and_lone_surrogate() {
        let config = BufferConfig::default().with_encoding(TextEncoding::Utf16);
        assert!(decode_text(&[0x41], config).is_err());
        assert!(decode_text(&[0x00, 0xD8], config).is_err());
    }

    #[test]
    fn test_invalid_utf8() {
        let result = decode_text(&[0xFF, 0xFE], BufferConfig::default());
        assert!(matches!(result, Err(StashError::Encoding(_))));
    }
}
