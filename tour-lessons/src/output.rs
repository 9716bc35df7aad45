use std::fmt;
use std::io::{self, Write};

/// Line-oriented sink shared by every print routine.
///
/// The binary wraps standard output; tests wrap a `Vec<u8>`.
pub struct Printer<'a> {
    out: &'a mut dyn Write,
    lines: usize,
}

impl<'a> Printer<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out, lines: 0 }
    }

    pub fn line(&mut self, text: impl fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.lines += 1;
        Ok(())
    }

    pub fn lines_written(&self) -> usize {
        self.lines
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_lines() {
        let mut buffer = Vec::new();
        let mut printer = Printer::new(&mut buffer);
        printer.line("a").unwrap();
        printer.line(42).unwrap();
        assert_eq!(printer.lines_written(), 2);
        assert_eq!(String::from_utf8(buffer).unwrap(), "a\n42\n");
    }
}
