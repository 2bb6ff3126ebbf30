use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Line-oriented terminal: prompts on `output`, answers come from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Prints `prompt` and reads one trimmed line, `None` once input is closed.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            log::debug!("input closed");
            return Ok(None);
        }
        // undecodable bytes become U+FFFD and fail parsing like any other typo
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}
