//! The primitive type demonstration
//!
//! [`Demo::new`] declares one local per demonstrated type in a [`Frame`], and
//! [`Demo::run`] prints a [`Section`] for each: a label line with the value, any
//! extra lines, then the size line. Sections are separated by a blank line.
//!
//! ```text
//! Integer (int): 4
//! Size: 4 bytes
//!
//! Float: 4.5
//! ...
//! ```

use crate::console::Console;
use crate::constants::DOUBLE_PRECISION;
use crate::errors::DemoError;
use crate::formatting::{format_size, format_value, Precision};
use crate::memory::frame::Frame;
use crate::memory::value::Value;

/// One demonstrated local: its literal and how it is printed
#[derive(Debug, Clone, Copy)]
struct Entry {
    variable: &'static str,
    init: fn() -> Value,
    label: &'static str,
    precision: Precision,
}

const ENTRIES: [Entry; 8] = [
    Entry {
        variable: "num1",
        init: || Value::Int(4),
        label: "Integer (int)",
        precision: Precision::Shortest,
    },
    Entry {
        variable: "num2",
        init: || Value::Float(4.5),
        label: "Float",
        precision: Precision::Shortest,
    },
    Entry {
        variable: "num3",
        init: || Value::Double(434.4343),
        label: "Double",
        precision: Precision::Fixed(DOUBLE_PRECISION),
    },
    Entry {
        variable: "isAdult",
        init: || Value::Bool(true),
        label: "Boolean",
        precision: Precision::Shortest,
    },
    Entry {
        variable: "grade",
        init: || Value::Char(b'A' as i8),
        label: "Character",
        precision: Precision::Shortest,
    },
    Entry {
        variable: "bigNum",
        init: || Value::LongLong(9_876_543_210),
        label: "Long Long",
        precision: Precision::Shortest,
    },
    Entry {
        variable: "smallNum",
        init: || Value::Short(32767),
        label: "Short",
        precision: Precision::Shortest,
    },
    Entry {
        variable: "name",
        init: || Value::Str(String::from("Mercury-CPP")),
        label: "String",
        precision: Precision::Shortest,
    },
];

/// Lines printed for one demonstrated local
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub variable: String,
    pub lines: Vec<String>,
}

/// The demonstration program
#[derive(Debug, Clone)]
pub struct Demo {
    frame: Frame,
}

impl Demo {
    /// Declare every demonstrated local
    pub fn new() -> Result<Self, DemoError> {
        let mut frame = Frame::new("main");
        for entry in &ENTRIES {
            frame.declare(entry.variable, (entry.init)())?;
        }
        Ok(Demo { frame })
    }

    /// The frame holding the demonstrated locals
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Build the printed sections, in declaration order
    pub fn sections(&self) -> Result<Vec<Section>, DemoError> {
        ENTRIES
            .iter()
            .map(|entry| {
                let var = self.frame.lookup(entry.variable)?;
                let mut lines = vec![format!(
                    "{}: {}",
                    entry.label,
                    format_value(&var.value, entry.precision)
                )];
                if let Some(c) = var.value.as_char() {
                    lines.push(format!("ASCII value: {}", c));
                }
                lines.push(format_size(var.size()));

                Ok(Section {
                    variable: entry.variable.to_string(),
                    lines,
                })
            })
            .collect()
    }

    /// Print every section to the console
    pub fn run(&self, console: &mut Console) -> Result<(), DemoError> {
        for (i, section) in self.sections()?.iter().enumerate() {
            if i > 0 {
                console.blank_line();
            }
            for line in &section.lines {
                console.println(line);
            }
        }
        Ok(())
    }

    /// The complete output text
    pub fn render(&self) -> Result<String, DemoError> {
        let mut console = Console::new();
        self.run(&mut console)?;
        Ok(console.text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimType;

    #[test]
    fn test_declares_every_type_once() {
        let demo = Demo::new().unwrap();
        let types: Vec<PrimType> = demo.frame().locals().map(|(_, v)| v.prim_type()).collect();
        assert_eq!(types, PrimType::ALL.to_vec());
    }

    #[test]
    fn test_character_section_has_ascii_line() {
        let demo = Demo::new().unwrap();
        let sections = demo.sections().unwrap();
        let grade = sections.iter().find(|s| s.variable == "grade").unwrap();
        assert_eq!(
            grade.lines,
            vec!["Character: A", "ASCII value: 65", "Size: 1 bytes"]
        );
    }

    #[test]
    fn test_other_sections_have_two_lines() {
        let demo = Demo::new().unwrap();
        for section in demo.sections().unwrap() {
            if section.variable != "grade" {
                assert_eq!(section.lines.len(), 2, "{}", section.variable);
            }
        }
    }

    #[test]
    fn test_no_trailing_blank_line() {
        let text = Demo::new().unwrap().render().unwrap();
        assert!(text.ends_with(" bytes\n"));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn test_locals_hold_their_literals() {
        let demo = Demo::new().unwrap();
        let frame = demo.frame();
        assert_eq!(frame.lookup("num1").unwrap().value, Value::Int(4));
        assert_eq!(frame.lookup("num3").unwrap().value, Value::Double(434.4343));
        assert_eq!(frame.lookup("grade").unwrap().value, Value::Char(65));
        assert_eq!(
            frame.lookup("bigNum").unwrap().value,
            Value::LongLong(9_876_543_210)
        );
        assert_eq!(
            frame.lookup("name").unwrap().value,
            Value::Str("Mercury-CPP".to_string())
        );
    }
}
