use crate::Error;

/// How many arguments an option takes
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum ArgType {
    /// A bare flag, e.g. `--help`
    None,
    /// At least one value must follow the flag
    Required,
    /// Values may follow the flag
    Optional,
}

impl ArgType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Required => "required",
            Self::Optional => "optional",
        }
    }

    pub const fn takes_values(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl std::fmt::Display for ArgType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ArgType {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let kind = match () {
            _ if input.eq_ignore_ascii_case("none") => Self::None,
            _ if input.eq_ignore_ascii_case("required") => Self::Required,
            _ if input.eq_ignore_ascii_case("optional") => Self::Optional,
            _ => return Err(Error::UnknownArgType(input.to_string())),
        };
        Ok(kind)
    }
}

/// A declared option. The long name is its identity, the short name is a
/// secondary match key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OptionSpec {
    short: char,
    long: Box<str>,
    arg: ArgType,
    multiple: bool,
}

impl OptionSpec {
    pub const SHORT: &'static str = "-";
    pub const LONG: &'static str = "--";

    pub fn new(short: char, long: &str, arg: ArgType, multiple: bool) -> Result<Self, Error> {
        if short == '-' || short.is_whitespace() {
            return Err(Error::InvalidName(short.to_string()));
        }

        if long.is_empty() || long.starts_with('-') || long.contains(char::is_whitespace) {
            return Err(Error::InvalidName(long.to_string()));
        }

        Ok(Self {
            short,
            long: long.into(),
            arg,
            multiple,
        })
    }

    pub const fn short(&self) -> char {
        self.short
    }

    pub fn long(&self) -> &str {
        &*self.long
    }

    pub const fn arg(&self) -> ArgType {
        self.arg
    }

    pub const fn multiple(&self) -> bool {
        self.multiple
    }

    /// Whether `token` is `-X` for this short name or `--name` for this long name
    pub fn matches(&self, token: &str) -> bool {
        if let Some(long) = token.strip_prefix(Self::LONG) {
            return long == self.long();
        }

        let mut chars = match token.strip_prefix(Self::SHORT) {
            Some(rest) => rest.chars(),
            None => return false,
        };

        matches!(
            (chars.next(), chars.next()),
            (Some(ch), None) if ch == self.short
        )
    }
}

impl std::fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}, {}{}", Self::SHORT, self.short, Self::LONG, self.long)?;
        if self.arg.takes_values() {
            write!(f, " <{}>", self.arg)?;
        }
        if self.multiple {
            f.write_str("...")?;
        }
        Ok(())
    }
}
