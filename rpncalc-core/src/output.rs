//! Output sink for evaluation results
//!
//! The batch runner and the REPL write every result and every error line
//! through this trait, so the core never touches stdout directly. The CLI
//! supplies a stdout implementation; tests collect into a `Vec<u8>`.

use std::io;

/// Destination for result and error lines.
pub trait Output {
    /// Write bytes to the output.
    fn write(&mut self, data: &[u8]) -> io::Result<()>;

    /// Flush any buffered output.
    fn flush(&mut self) -> io::Result<()>;

    /// Write `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text.as_bytes())?;
        self.write(b"\n")
    }
}

// RUST CONCEPT: Implementing a local trait for a std type
// An in-memory sink, handy for tests and for embedding the calculator
impl Output for Vec<u8> {
    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        self.try_reserve(data.len())
            .map_err(|err| io::Error::new(io::ErrorKind::OutOfMemory, err))?;
        self.extend_from_slice(data);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
