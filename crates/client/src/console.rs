//! Line-based prompts over any reader/writer pair.

use std::io::{self, BufRead, Write};

/// Text console. Every read returns `None` once input is exhausted.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn println(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", line.as_ref())
    }

    /// Prints each line in order.
    pub fn print_lines<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.println(line)?;
        }
        Ok(())
    }

    /// Shows `prompt` and reads one trimmed line.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Reads until the answer is one of `options` (case-insensitive).
    ///
    /// Returns the matching option as given, or `None` at end of input.
    pub fn choose<'o>(&mut self, prompt: &str, options: &[&'o str]) -> io::Result<Option<&'o str>> {
        loop {
            let Some(answer) = self.prompt(prompt)? else {
                return Ok(None);
            };
            if let Some(option) = options.iter().find(|o| o.eq_ignore_ascii_case(&answer)) {
                return Ok(Some(*option));
            }
            self.println(format!(
                "Invalid input. Please choose from: {}",
                options.join(", ")
            ))?;
        }
    }

    /// Reads a 1-based menu number in `1..=count`, or `cancel` if given.
    ///
    /// Returns the 0-based index; `None` for cancel or end of input.
    pub fn choose_index(
        &mut self,
        prompt: &str,
        count: usize,
        cancel: Option<&str>,
    ) -> io::Result<Option<usize>> {
        let numbers: Vec<String> = (1..=count).map(|n| n.to_string()).collect();
        let mut options: Vec<&str> = numbers.iter().map(String::as_str).collect();
        if let Some(cancel) = cancel {
            options.push(cancel);
        }

        let answer = self.choose(prompt, &options)?;
        Ok(answer.and_then(|a| a.parse::<usize>().ok()).map(|n| n - 1))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
