//! Incremental server-sent events decoder.
//!
//! `streamGenerateContent?alt=sse` answers with `data: {json}` events
//! separated by blank lines. Network chunks can split an event (or a UTF-8
//! sequence) anywhere, so bytes are buffered until an event is complete.

/// Buffers raw bytes and yields complete `data` payloads
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk and return every event completed by it.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer
            .extend(chunk.iter().copied().filter(|b| *b != b'\r'));

        let mut events = Vec::new();
        while let Some(end) = find_event_end(&self.buffer) {
            let raw: Vec<u8> = self.buffer.drain(..end + 2).collect();
            if let Some(data) = parse_event(&raw) {
                events.push(data);
            }
        }
        events
    }

    /// Flush a trailing event that was not terminated by a blank line.
    pub fn finish(&mut self) -> Option<String> {
        let raw = std::mem::take(&mut self.buffer);
        parse_event(&raw)
    }
}

fn find_event_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(2).position(|w| w == b"\n\n")
}

fn parse_event(raw: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(raw);
    let data: Vec<&str> = text
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(|data| data.strip_prefix(' ').unwrap_or(data))
        .collect();
    if data.is_empty() {
        None
    } else {
        Some(data.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_event() {
        let mut decoder = SseDecoder::new();
        assert_eq!(decoder.push(b"data: {\"a\":1}\n\n"), vec!["{\"a\":1}"]);
    }

    #[test]
    fn test_event_split_across_chunks() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.push(b"data: {\"te").is_empty());
        assert!(decoder.push(b"xt\":\"Hal\"}\r\n").is_empty());
        assert_eq!(decoder.push(b"\r\ndata: {}\r\n\r\n"), vec!["{\"text\":\"Hal\"}", "{}"]);
    }

    #[test]
    fn test_multibyte_split_is_preserved() {
        let text = "data: Selamat pagi \u{1F4DA}\n\n".as_bytes();
        let (head, tail) = text.split_at(text.len() - 4);
        let mut decoder = SseDecoder::new();
        assert!(decoder.push(head).is_empty());
        assert_eq!(decoder.push(tail), vec!["Selamat pagi \u{1F4DA}"]);
    }

    #[test]
    fn test_comments_and_other_fields_are_ignored() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.push(b": keep-alive\n\n").is_empty());
        assert_eq!(decoder.push(b"event: message\ndata: x\n\n"), vec!["x"]);
    }

    #[test]
    fn test_finish_flushes_unterminated_event() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.push(b"data: last").is_empty());
        assert_eq!(decoder.finish().as_deref(), Some("last"));
        assert!(decoder.finish().is_none());
    }
}
