//! Declare command-line options one at a time and look up what was passed.
//!
//! ```
//! use option_handler::{ArgType, Handler};
//!
//! let handler = Handler::new(vec!["-m", "fast", "--help"])
//!     .add_option('m', "mode", ArgType::Required, false)?
//!     .add_option('h', "help", ArgType::None, false)?;
//!
//! assert!(handler.get_option("help"));
//! assert_eq!(handler.get_argument("mode"), "fast");
//! # Ok::<(), option_handler::Error>(())
//! ```
mod handler;
pub use handler::Handler;

mod spec;
pub use spec::{ArgType, OptionSpec};

mod error;
pub use error::Error;
