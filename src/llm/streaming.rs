//! Incremental UTF-8 decoding for the response stream.
//!
//! The endpoint streams raw UTF-8 text with no framing, so a chunk boundary
//! can land in the middle of a multi-byte character. The decoder holds the
//! incomplete tail bytes until the next chunk arrives — the accumulated text
//! is always a valid prefix of the final output, never a replacement
//! character that later "heals".

use encoding_rs::{Decoder, UTF_8};

/// Streaming-safe UTF-8 decoder. Feed chunks with [`decode`](Self::decode)
/// in arrival order, then call [`finish`](Self::finish) once the stream
/// reports completion.
pub struct Utf8StreamDecoder {
    inner: Decoder,
}

impl Utf8StreamDecoder {
    pub fn new() -> Self {
        Self {
            inner: UTF_8.new_decoder_without_bom_handling(),
        }
    }

    /// Decode one chunk. Returns the text that became available, which may
    /// be empty if the chunk ends inside a multi-byte sequence.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        let mut out = String::with_capacity(
            self.inner
                .max_utf8_buffer_length(chunk.len())
                .unwrap_or(chunk.len() * 3),
        );
        let (result, read, _replaced) = self.inner.decode_to_string(chunk, &mut out, false);
        debug_assert_eq!(result, encoding_rs::CoderResult::InputEmpty);
        debug_assert_eq!(read, chunk.len());
        out
    }

    /// Flush the decoder at end of stream. A dangling partial sequence is
    /// surfaced as U+FFFD, matching a lone truncated byte's meaning.
    pub fn finish(mut self) -> String {
        let mut out = String::with_capacity(4);
        let _ = self.inner.decode_to_string(&[], &mut out, true);
        out
    }
}

impl Default for Utf8StreamDecoder {
    fn default() -> Self {
        Self::new()
    }
}
