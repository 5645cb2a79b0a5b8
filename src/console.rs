// Captured output stream

use std::io::{self, Write};

/// Console that captures everything the demonstration prints
#[derive(Debug, Clone, Default)]
pub struct Console {
    text: String,
}

impl Console {
    pub fn new() -> Self {
        Console {
            text: String::new(),
        }
    }

    /// Print without newline
    pub fn print(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Print followed by a newline
    pub fn println(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.text.push('\n');
    }

    /// Everything printed so far, verbatim
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        let mut result: Vec<String> = self.text.split('\n').map(|s| s.to_string()).collect();
        // Remove trailing empty string if text ended with newline
        if result.last().is_some_and(|s| s.is_empty()) {
            result.pop();
        }
        result
    }

    /// Write the captured text to a real stream
    pub fn flush_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.text.as_bytes())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_and_println_join() {
        let mut console = Console::new();
        console.print("Size: ");
        console.println("4 bytes");
        console.blank_line();
        console.println("next");

        assert_eq!(console.text(), "Size: 4 bytes\n\nnext\n");
        assert_eq!(console.get_output(), vec!["Size: 4 bytes", "", "next"]);
    }

    #[test]
    fn test_unterminated_last_line_is_kept() {
        let mut console = Console::new();
        console.print("partial");
        assert_eq!(console.get_output(), vec!["partial"]);
    }

    #[test]
    fn test_flush_writes_verbatim() {
        let mut console = Console::new();
        console.println("a");
        let mut sink = Vec::new();
        console.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"a\n");
    }
}
