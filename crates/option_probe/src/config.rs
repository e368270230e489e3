use std::path::{Path, PathBuf};

use anyhow::Context as _;
use option_handler::{ArgType, Handler};

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Config {
    #[serde(default)]
    pub options: Vec<Declared>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Declared {
    pub short: char,
    pub long: String,
    #[serde(default)]
    pub arg: Arg,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub mandatory: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arg {
    None,
    Required,
    Optional,
}

impl Default for Arg {
    fn default() -> Self {
        Self::None
    }
}

impl From<Arg> for ArgType {
    fn from(arg: Arg) -> Self {
        match arg {
            Arg::None => Self::None,
            Arg::Required => Self::Required,
            Arg::Optional => Self::Optional,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: vec![
                Declared {
                    short: 'm',
                    long: "mode".into(),
                    arg: Arg::Required,
                    multiple: false,
                    mandatory: true,
                },
                Declared {
                    short: 'h',
                    long: "help".into(),
                    arg: Arg::None,
                    multiple: false,
                    mandatory: false,
                },
            ],
        }
    }
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "probe.toml";

    // the binary always declares these itself to find the config file
    pub const CONFIG_SHORT: char = 'c';
    pub const CONFIG_LONG: &'static str = "config";

    /// Loads the config at `path`, falling back to the built-in declarations
    /// (and trying to write them out as an example) if it doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            let example = Self::example_path(path);
            log::warn!(
                "cannot find '{}', using the built-in options",
                path.display()
            );
            if !example.exists() {
                match Self::write_default(&example) {
                    Ok(..) => log::info!("wrote the built-in options to '{}'", example.display()),
                    Err(err) => log::warn!("{:#}", err),
                }
            }
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read '{}'", path.display()))?;
        let config: Self =
            toml::from_str(&data).with_context(|| format!("cannot parse '{}'", path.display()))?;
        config
            .check_reserved()
            .with_context(|| format!("invalid options in '{}'", path.display()))?;
        Ok(config)
    }

    /// Writes the built-in declarations to `path`
    pub fn write_default(path: &Path) -> anyhow::Result<()> {
        let data = toml::to_string_pretty(&Self::default())?;
        std::fs::write(path, &data)
            .with_context(|| format!("cannot write '{}'", path.display()))
    }

    fn check_reserved(&self) -> anyhow::Result<()> {
        for opt in &self.options {
            if opt.short == Self::CONFIG_SHORT || opt.long == Self::CONFIG_LONG {
                anyhow::bail!(
                    "'-{}, --{}' is reserved for the config path and cannot be declared",
                    Self::CONFIG_SHORT,
                    Self::CONFIG_LONG
                );
            }
        }
        Ok(())
    }

    /// Declares every configured option, in order, on `handler`
    pub fn declare(&self, handler: Handler) -> Result<Handler, option_handler::Error> {
        self.options.iter().try_fold(handler, |handler, opt| {
            handler.add_option(opt.short, &opt.long, opt.arg.into(), opt.multiple)
        })
    }

    /// Mandatory options that were not given, or were given without a value
    pub fn missing<'a>(&'a self, handler: &'a Handler) -> impl Iterator<Item = &'a str> + 'a {
        self.options
            .iter()
            .filter(|opt| opt.mandatory)
            .filter(move |opt| {
                !handler.get_option(&opt.long)
                    || (opt.arg != Arg::None && handler.get_argument(&opt.long).is_empty())
            })
            .map(|opt| opt.long.as_str())
    }

    fn example_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".example");
        path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probe.toml");
        std::fs::write(
            &path,
            r#"
            [[options]]
            short = "f"
            long = "films"
            arg = "required"
            multiple = true
            mandatory = true

            [[options]]
            short = "q"
            long = "quiet"
            "#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.options.len(), 2);
        assert_eq!(config.options[0].arg, Arg::Required);
        assert_eq!(config.options[1].arg, Arg::None);
        assert!(!config.options[1].mandatory);

        let handler = config
            .declare(Handler::new(vec!["--films", "a", "b", "-q", "--films", "c"]))
            .unwrap();
        assert_eq!(handler.get_arguments("films"), &["a", "b", "c"]);
        assert!(handler.get_option("quiet"));
        assert_eq!(config.missing(&handler).count(), 0);
    }

    #[test]
    fn missing_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probe.toml");

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());

        let example = dir.path().join("probe.toml.example");
        assert!(example.exists());
        assert_eq!(Config::load(&example).unwrap(), Config::default());
    }

    #[test]
    fn unwritable_example_still_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("probe.toml");

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn config_flag_is_reserved() {
        let tests = &[
            "[[options]]\nshort = \"x\"\nlong = \"config\"\narg = \"required\"\n",
            "[[options]]\nshort = \"c\"\nlong = \"color\"\n",
        ];

        for test in tests {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("probe.toml");
            std::fs::write(&path, test).unwrap();

            let err = Config::load(&path).unwrap_err();
            assert!(format!("{:#}", err).contains("reserved"), "{}", test);
        }
    }

    #[test]
    fn bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probe.toml");
        std::fs::write(&path, "[[options]]\nshort = \"ab\"\nlong = \"x\"\n").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn mandatory() {
        let config = Config::default();

        let handler = config.declare(Handler::new(vec!["-h"])).unwrap();
        assert_eq!(config.missing(&handler).collect::<Vec<_>>(), vec!["mode"]);

        let handler = config.declare(Handler::new(vec!["-m", "fast"])).unwrap();
        assert_eq!(config.missing(&handler).count(), 0);

        let err = config.declare(Handler::new(vec!["-m"])).unwrap_err();
        assert_eq!(err, option_handler::Error::MissingArgument("mode".into()));
    }
}
