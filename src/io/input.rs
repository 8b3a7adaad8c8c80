use std::io::{self, BufRead, IsTerminal, Write};

pub struct InputHandler {
    prompt: Option<String>,
}

impl InputHandler {
    /// Prompts on stderr only when stdin is a terminal.
    pub fn for_stdin(prompt: &str) -> Self {
        let prompt = io::stdin().is_terminal().then(|| prompt.to_string());
        InputHandler { prompt }
    }

    pub fn read_line(&self) -> io::Result<Option<String>> {
        Self::read_from(&mut io::stdin().lock(), self.prompt.as_deref(), &mut io::stderr())
    }

    pub fn read_from<R: BufRead, W: Write>(
        reader: &mut R,
        prompt: Option<&str>,
        out: &mut W,
    ) -> io::Result<Option<String>> {
        if let Some(prompt) = prompt {
            write!(out, "{}", prompt)?;
            out.flush()?;
        }

        let mut buf = String::new();
        let bytes_read = reader.read_line(&mut buf)?;
        if bytes_read == 0 {
            // EOF (e.g., Ctrl-D)
            if prompt.is_some() {
                writeln!(out)?;
            }
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
    }
}
