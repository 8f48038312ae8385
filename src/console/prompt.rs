use std::io;
use std::io::{BufRead, ErrorKind, Write};

// Prompt is the line-oriented console: questions and results go to the output,
// answers are read one line at a time from the input.
pub(crate) struct Prompt<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Prompt<'a> {
    pub(crate) fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self {
            input,
            output,
        }
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    // Prints the question without a line break and returns the trimmed answer.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "console input closed"));
        }
        Ok(line.trim().to_string())
    }

    pub fn pause(&mut self) -> io::Result<()> {
        self.say("\nPress Enter to continue...")?;
        self.output.flush()?;
        let _ = self.read_line()?;
        Ok(())
    }
}
