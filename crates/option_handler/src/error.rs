#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    ArgumentConflict(String),
    MissingArgument(String),
    DuplicateOption(String),
    InvalidName(String),
    UnknownArgType(String),
}

impl Error {
    /// The long name (or offending input) this error is about
    pub fn name(&self) -> &str {
        match self {
            Self::ArgumentConflict(name)
            | Self::MissingArgument(name)
            | Self::DuplicateOption(name)
            | Self::InvalidName(name)
            | Self::UnknownArgType(name) => name,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArgumentConflict(name) => {
                write!(f, "argument given to a no-argument option: {}", name)
            }
            Self::MissingArgument(name) => {
                write!(f, "required option missing its argument: {}", name)
            }
            Self::DuplicateOption(name) => write!(f, "duplicate option found: {}", name),
            Self::InvalidName(name) => write!(f, "invalid option name: '{}'", name),
            Self::UnknownArgType(kind) => write!(
                f,
                "unknown argument type '{}' (expected none, required or optional)",
                kind
            ),
        }
    }
}

impl std::error::Error for Error {}
