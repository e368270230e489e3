use std::collections::HashMap;

use crate::{ArgType, Error, OptionSpec};

/// Holds the raw argument tokens, the declared options and whatever was
/// captured for them.
///
/// Every [`Handler::add_option`] scans the full token list for that one option,
/// so options are matched independently of each other and of declaration order.
#[derive(Default, Clone, Debug)]
pub struct Handler {
    args: Box<[String]>,
    options: Vec<OptionSpec>,
    parsed: HashMap<Box<str>, Vec<String>>,
}

impl Handler {
    /// Create a handler over `args`. The program name should already be removed.
    pub fn new<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create a handler over the process arguments, skipping the program name
    pub fn from_env() -> Self {
        Self::new(std::env::args().skip(1))
    }

    /// A token is a flag if it starts with `-` and has something after it.
    /// Anything else is a value.
    pub fn is_flag(token: &str) -> bool {
        token.len() > 1 && token.starts_with('-')
    }

    /// Declare an option and immediately scan the arguments for it.
    ///
    /// Nothing is recorded for the option unless the whole scan succeeds.
    ///
    /// # Errors
    /// - [`Error::InvalidName`] if the short or long name can't be a flag
    /// - [`Error::DuplicateOption`] if `long` was already declared
    /// - [`Error::ArgumentConflict`] if an [`ArgType::None`] flag is followed by a value
    /// - [`Error::MissingArgument`] if an [`ArgType::Required`] flag has no value after it
    pub fn add_option(
        mut self,
        short: char,
        long: &str,
        arg: ArgType,
        multiple: bool,
    ) -> Result<Self, Error> {
        let spec = OptionSpec::new(short, long, arg, multiple)?;
        if self.spec(spec.long()).is_some() {
            return Err(Error::DuplicateOption(long.to_string()));
        }

        match self.scan(&spec)? {
            Some(values) => {
                log::debug!("{} matched with {} value(s)", spec, values.len());
                self.parsed.insert(spec.long().into(), values);
            }
            None => log::debug!("{} not found", spec),
        }

        self.options.push(spec);
        Ok(self)
    }

    /// Whether the option's flag appeared at least once
    pub fn get_option(&self, long: &str) -> bool {
        self.parsed.contains_key(long)
    }

    /// The first captured value, or an empty string if there isn't one
    pub fn get_argument(&self, long: &str) -> &str {
        self.get_arguments(long)
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Every captured value, in the order they were seen
    pub fn get_arguments(&self, long: &str) -> &[String] {
        self.parsed
            .get(long)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The declared options, in declaration order
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    pub fn spec(&self, long: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|spec| spec.long() == long)
    }

    /// Looks up by the secondary key. If more than one option shares `short`,
    /// the first declared wins.
    pub fn spec_by_short(&self, short: char) -> Option<&OptionSpec> {
        self.options.iter().find(|spec| spec.short() == short)
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn scan(&self, spec: &OptionSpec) -> Result<Option<Vec<String>>, Error> {
        let mut found: Option<Vec<String>> = None;

        let mut pos = 0;
        while let Some(token) = self.args.get(pos) {
            pos += 1;
            if !spec.matches(token) {
                continue;
            }

            log::trace!("'{}' at {} matches --{}", token, pos - 1, spec.long());

            let next = self.args.get(pos).map(String::as_str);
            match (spec.arg(), next) {
                (ArgType::None, Some(next)) if !Self::is_flag(next) => {
                    return Err(Error::ArgumentConflict(spec.long().to_string()));
                }

                (ArgType::None, ..) => {
                    found.get_or_insert_with(Vec::new);
                }

                (ArgType::Required, None) => {
                    return Err(Error::MissingArgument(spec.long().to_string()));
                }

                (ArgType::Required, Some(next)) if Self::is_flag(next) => {
                    return Err(Error::MissingArgument(spec.long().to_string()));
                }

                (ArgType::Required, ..) | (ArgType::Optional, ..) => {
                    let values = found.get_or_insert_with(Vec::new);
                    while let Some(value) = self.args.get(pos) {
                        if Self::is_flag(value) {
                            break;
                        }
                        Self::capture(values, value, spec.multiple());
                        pos += 1;
                    }
                }
            }
        }

        Ok(found)
    }

    // non-multiple options only ever hold one value, the latest one
    fn capture(values: &mut Vec<String>, value: &str, multiple: bool) {
        match values.first_mut() {
            Some(first) if !multiple => *first = value.to_string(),
            _ => values.push(value.to_string()),
        }
    }
}
