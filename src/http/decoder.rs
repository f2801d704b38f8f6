//! Incremental UTF-8 decoder for streamed response bodies.
//!
//! Chunk boundaries can fall inside a multi-byte sequence. The decoder holds
//! back an incomplete trailing sequence until the next chunk arrives and
//! replaces invalid bytes with U+FFFD. One decoder per response.

use std::char::REPLACEMENT_CHARACTER;

#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode as much of `pending + chunk` as forms complete characters.
    pub fn write(&mut self, chunk: &[u8]) -> String {
        let mut bytes = std::mem::take(&mut self.pending);
        bytes.extend_from_slice(chunk);

        let mut out = String::with_capacity(bytes.len());
        let mut start = 0;

        while start < bytes.len() {
            match std::str::from_utf8(&bytes[start..]) {
                Ok(valid) => {
                    out.push_str(valid);
                    start = bytes.len();
                }
                Err(err) => {
                    let valid_end = start + err.valid_up_to();
                    if let Ok(valid) = std::str::from_utf8(&bytes[start..valid_end]) {
                        out.push_str(valid);
                    }
                    match err.error_len() {
                        Some(len) => {
                            out.push(REPLACEMENT_CHARACTER);
                            start = valid_end + len;
                        }
                        // Incomplete sequence at the end: wait for more bytes.
                        None => {
                            start = valid_end;
                            break;
                        }
                    }
                }
            }
        }

        self.pending = bytes[start..].to_vec();
        out
    }

    /// Flush at end of stream. A dangling partial sequence becomes U+FFFD.
    pub fn end(&mut self) -> String {
        if self.pending.is_empty() {
            String::new()
        } else {
            self.pending.clear();
            REPLACEMENT_CHARACTER.to_string()
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        let mut decoder = Utf8Decoder::new();
        assert_eq!(decoder.write(b"{\"id\":"), "{\"id\":");
        assert_eq!(decoder.write(b"\"abc123\"}"), "\"abc123\"}");
        assert_eq!(decoder.end(), "");
    }

    #[test]
    fn test_split_multibyte_sequence() {
        // "é" is 0xC3 0xA9, "€" is 0xE2 0x82 0xAC
        let mut decoder = Utf8Decoder::new();
        assert_eq!(decoder.write(&[b'a', 0xC3]), "a");
        assert!(decoder.has_pending());
        assert_eq!(decoder.write(&[0xA9, 0xE2]), "é");
        assert_eq!(decoder.write(&[0x82]), "");
        assert_eq!(decoder.write(&[0xAC, b'b']), "€b");
        assert!(!decoder.has_pending());
    }

    #[test]
    fn test_invalid_byte_replaced() {
        let mut decoder = Utf8Decoder::new();
        assert_eq!(decoder.write(&[b'x', 0xFF, b'y']), "x\u{FFFD}y");
    }

    #[test]
    fn test_truncated_tail_flushed_as_replacement() {
        let mut decoder = Utf8Decoder::new();
        assert_eq!(decoder.write(&[b'z', 0xE2, 0x82]), "z");
        assert_eq!(decoder.end(), "\u{FFFD}");
        assert_eq!(decoder.end(), "");
    }
}
