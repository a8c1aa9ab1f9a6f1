use std::io::{self, Write};

/// Bytes held before they are handed to the inner writer.
const BUFFER_CAPACITY: usize = 64 * 1024;

/// Buffered newline-delimited writer.
///
/// Lines are only counted once their bytes have been accepted by the inner
/// writer, so `lines_written` is exact even after a failed or partial write.
/// Candidates are appended whole and the buffer is drained between
/// candidates, so stopping between two calls never leaves half a line behind.
pub struct LineSink<W: Write> {
    inner: W,
    buffer: Vec<u8>,
    produced: u64,
    lines: u64,
    bytes: u64,
}

impl<W: Write> LineSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buffer: Vec::with_capacity(BUFFER_CAPACITY),
            produced: 0,
            lines: 0,
            bytes: 0,
        }
    }

    /// Write `prefix` followed by `chars` and a line terminator.
    pub fn write_candidate<I>(&mut self, prefix: &str, chars: I) -> io::Result<()>
    where
        I: IntoIterator<Item = char>,
    {
        self.buffer.extend_from_slice(prefix.as_bytes());
        let mut utf8 = [0_u8; 4];
        for ch in chars {
            let encoded = ch.encode_utf8(&mut utf8);
            self.buffer.extend_from_slice(encoded.as_bytes());
        }
        self.buffer.push(b'\n');
        self.produced += 1;

        if self.buffer.len() >= BUFFER_CAPACITY {
            self.drain()?;
        }
        Ok(())
    }

    /// Write a finished candidate followed by a line terminator.
    pub fn write_line(&mut self, value: &str) -> io::Result<()> {
        self.write_candidate(value, std::iter::empty())
    }

    /// Candidates handed to the sink, buffered or not.
    pub fn lines_produced(&self) -> u64 {
        self.produced
    }

    /// Complete lines accepted by the inner writer so far.
    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    /// Bytes accepted by the inner writer so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.drain()?;
        self.inner.flush()
    }

    /// Hand the buffer to the inner writer, counting whatever it accepted
    /// before a failure.
    fn drain(&mut self) -> io::Result<()> {
        let mut offset = 0;
        let result = loop {
            if offset == self.buffer.len() {
                break Ok(());
            }
            match self.inner.write(&self.buffer[offset..]) {
                Ok(0) => break Err(io::ErrorKind::WriteZero.into()),
                Ok(n) => offset += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => break Err(err),
            }
        };

        let accepted = &self.buffer[..offset];
        let newlines = accepted.iter().filter(|&&byte| byte == b'\n').count();
        self.lines += newlines as u64;
        self.bytes += offset as u64;
        self.buffer.drain(..offset);
        result
    }
}
