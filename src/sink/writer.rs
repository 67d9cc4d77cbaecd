use std::io::Write;

use super::Transport;

/// [WriterTransport] delivers sentences to any byte writer:
/// standard output, a file or an in-memory buffer.
pub struct WriterTransport<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> WriterTransport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Transport for WriterTransport<W> {
    fn send(&mut self, sentence: &str) -> std::io::Result<()> {
        self.writer.write_all(sentence.as_bytes())?;
        self.writer.flush()
    }
}
