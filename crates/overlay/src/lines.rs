use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

/// Reads `\n`-terminated lines from raw bytes. Invalid UTF-8 is replaced,
/// never an error.
///
/// Partially read bytes stay buffered, so a `next_line` future dropped by a
/// timeout can be started again without losing input.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    buf:    Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// The next line without its terminator, or `None` at end of input.
    pub async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let n = self.reader.read_until(b'\n', &mut self.buf).await?;
        if n == 0 && self.buf.is_empty() {
            return Ok(None);
        }

        let mut line = std::mem::take(&mut self.buf);
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }

        Ok(Some(match String::from_utf8(line) {
            Ok(text) => text,
            Err(e) => {
                warn!("input line is not valid UTF-8; invalid bytes replaced");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn splits_and_strips_terminators() {
        let mut lines = LineReader::new(&b"10\r\n20 a\nlast"[..]);
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("10"));
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("20 a"));
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("last"));
        assert_eq!(lines.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn invalid_utf8_is_replaced() {
        let mut lines = LineReader::new(&b"50 \xff\xfe\n\n"[..]);
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("50 \u{fffd}\u{fffd}"));
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some(""));
        assert_eq!(lines.next_line().await.unwrap(), None);
    }
}
