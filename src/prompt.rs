use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line source and user-visible output of the shell.
pub struct ShellPrompt<R, W> {
    prompt: String,
    input: R,
    output: W,
}

impl ShellPrompt<StdinLock<'static>, Stdout> {
    pub fn stdio(prompt: &str) -> Self {
        ShellPrompt::new(prompt, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ShellPrompt<R, W> {
    pub fn new(prompt: &str, input: R, output: W) -> Self {
        ShellPrompt {
            prompt: prompt.to_string(),
            input,
            output,
        }
    }

    pub fn show_prompt(&mut self) -> io::Result<()> {
        self.output.write_all(self.prompt.as_bytes())?;
        self.output.flush()
    }

    /// One line including its newline, or `None` once input is exhausted.
    /// Bytes that are not UTF-8 are replaced rather than rejected.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        let bytes_read = self.input.read_until(b'\n', &mut buf)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    pub fn message(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{}", msg)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}
