//! Byte-level console I/O.
//!
//! The machine talks to its host through the [`Console`] trait: one byte
//! out per OUT, one byte in per IN. [`Stdio`] binds the trait to the
//! process's standard streams; tests substitute an in-memory console.

use std::io::{self, BufWriter, Read, Stdin, Stdout, Write};

/// Byte-stream interface the machine performs I/O through.
///
/// Bytes are emitted in program-issue order and consumed in host-stream
/// order; implementations must not reorder either direction.
pub trait Console {
    /// Writes one byte to the output stream.
    fn put(&mut self, byte: u8) -> io::Result<()>;

    /// Reads one byte, or `None` once the input stream is exhausted.
    fn get(&mut self) -> io::Result<Option<u8>>;

    /// Flushes any buffered output to the host.
    fn flush(&mut self) -> io::Result<()>;
}

/// Console backed by the process's standard streams.
///
/// Output is buffered; the driver flushes it on halt and on fault exit.
pub struct Stdio {
    input: Stdin,
    output: BufWriter<Stdout>,
}

impl Stdio {
    pub fn new() -> Self {
        Self {
            input: io::stdin(),
            output: BufWriter::new(io::stdout()),
        }
    }
}

impl Default for Stdio {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for Stdio {
    fn put(&mut self, byte: u8) -> io::Result<()> {
        self.output.write_all(&[byte])
    }

    fn get(&mut self) -> io::Result<Option<u8>> {
        // A program that prompts before reading expects the prompt to be
        // visible while it blocks.
        self.output.flush()?;
        let mut byte = [0u8; 1];
        loop {
            return match self.input.read(&mut byte) {
                Ok(0) => Ok(None),
                Ok(_) => Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => Err(e),
            };
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}
