// Stdout wrapper implementing Output

use std::io::{self, Write};

use rpncalc_core::Output;

pub struct StdoutOutput {
    stdout: io::Stdout,
}

impl StdoutOutput {
    pub fn new() -> Self {
        StdoutOutput { stdout: io::stdout() }
    }
}

impl Default for StdoutOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for StdoutOutput {
    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        self.stdout.lock().write_all(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.lock().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_writes_to_stdout() {
        let mut output = StdoutOutput::default();
        output.write(b"").unwrap();
        output.flush().unwrap();
    }
}
