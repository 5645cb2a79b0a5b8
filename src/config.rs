// Command-line options

use crate::errors::DemoError;

/// What the binary should do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Open the memory inspector after printing
    pub inspect: bool,
    /// Progress diagnostics on stderr
    pub verbose: bool,
    /// Print usage and exit
    pub help: bool,
}

impl Options {
    /// Parse arguments, excluding the program name
    pub fn parse<I, S>(args: I) -> Result<Self, DemoError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Options::default();
        for arg in args {
            match arg.as_ref() {
                "-i" | "--inspect" => options.inspect = true,
                "-v" | "--verbose" => options.verbose = true,
                "-h" | "--help" => options.help = true,
                other => {
                    return Err(DemoError::UnknownArgument {
                        arg: other.to_string(),
                    })
                }
            }
        }
        Ok(options)
    }
}

/// Usage text for the given program name
pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {} [options]\n\
         \n\
         Options:\n  \
         -i, --inspect    Open the memory inspector after printing\n  \
         -v, --verbose    Print progress to stderr\n  \
         -h, --help       Show this message",
        program_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_prints_only() {
        let options = Options::parse(Vec::<String>::new()).unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_short_and_long_flags() {
        let options = Options::parse(["-i", "--verbose"]).unwrap();
        assert!(options.inspect);
        assert!(options.verbose);
        assert!(!options.help);

        assert!(Options::parse(["--help"]).unwrap().help);
    }

    #[test]
    fn test_unknown_argument() {
        let err = Options::parse(["--color"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown argument '--color'");
    }

    #[test]
    fn test_usage_names_program() {
        assert!(usage("primsize").starts_with("Usage: primsize [options]"));
    }
}
