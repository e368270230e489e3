use std::path::PathBuf;

use anyhow::Context as _;
use option_handler::{ArgType, Handler};

mod config;
use config::Config;

fn init_logger() -> anyhow::Result<()> {
    alto_logger::init_alt_term_logger()?;
    Ok(())
}

// the config file is found with the same parser, before the real options are known
fn config_path() -> anyhow::Result<PathBuf> {
    let handler = Handler::from_env()
        .add_option(
            Config::CONFIG_SHORT,
            Config::CONFIG_LONG,
            ArgType::Required,
            false,
        )
        .context("cannot find the config path")?;

    let path = match handler.get_argument(Config::CONFIG_LONG) {
        "" => Config::DEFAULT_PATH,
        path => path,
    };
    Ok(path.into())
}

fn report(handler: &Handler) {
    if handler.get_option("help") {
        println!("The options for this program are...");
        for spec in handler.options() {
            println!("  {}", spec);
        }
    }

    for spec in handler.options() {
        let name = spec.long();
        match handler.get_arguments(name) {
            [] if handler.get_option(name) => println!("{}: set", name),
            [] => println!("{}: not set", name),
            values => println!("{}: {}", name, values.join(" ")),
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logger()?;

    let path = config_path()?;
    let config = Config::load(&path)?;

    let handler = Handler::from_env()
        .add_option(
            Config::CONFIG_SHORT,
            Config::CONFIG_LONG,
            ArgType::Required,
            false,
        )
        .and_then(|handler| config.declare(handler))
        .with_context(|| format!("cannot apply the options from '{}'", path.display()))?;

    log::trace!("args: {:?}", handler.args());
    report(&handler);

    let mut ok = true;
    for name in config.missing(&handler) {
        eprintln!("{} must be set.", name);
        ok = false;
    }

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}
