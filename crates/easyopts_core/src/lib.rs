//! # easyopts_core
//!
//! Registration-based command-line option declaration.
//!
//! Callers declare sections of options (long and short names, value kind,
//! requiredness, validate and assign callbacks), then hand the argument
//! vector to the store. The store matches tokens against the registry,
//! coerces values to their declared kinds, runs every validator before any
//! assignment, assigns in registration order and returns the tokens it did
//! not consume.
//!
//! # Architecture
//!
//! - **Store**: [`ProgramOptions`] owns the argument vector, the program
//!   description and the ordered sections
//! - **Sections**: named groups of options with a [`Visibility`]
//! - **Processor**: [`ProgramOptions::process`] implements the
//!   match/coerce/validate/assign pipeline
//! - **Driver**: [`ProgramOptions::run`] acts on the built-in `--help` and
//!   `--version` options and returns a [`Flow`] for the host to act upon
//! - **Help**: text and JSON renderers filtered by visibility
//!
//! # Example
//!
//! ```rust
//! use easyopts_core::{Flow, OptionDecl, ProgramOptions, Value, ValueKind, Visibility};
//!
//! #[derive(Default)]
//! struct Settings {
//!     count: i32,
//! }
//!
//! let mut store = ProgramOptions::new(["prog", "--count=3", "file.txt"], "Example program");
//! let main = store.add_section("Main", "Main options", Visibility::Public).unwrap();
//! store
//!     .add_option(
//!         main,
//!         OptionDecl::new("count", ValueKind::SignedInt, |v: &Value, s: &mut Settings| {
//!             s.count = v.as_i64().unwrap_or_default() as i32;
//!         })
//!         .short('c')
//!         .required()
//!         .validate(|v: &Value| v.as_i64().is_some_and(|n| n > 0))
//!         .description("How many times"),
//!     )
//!     .unwrap();
//!
//! let mut settings = Settings::default();
//! let flow = store.run(&mut settings, &mut std::io::stdout()).unwrap();
//! assert_eq!(settings.count, 3);
//! match flow {
//!     Flow::Continue(rest) => assert_eq!(rest.as_slice(), &["file.txt"]),
//!     Flow::Exit(_) => unreachable!(),
//! }
//! ```

pub mod builtin;
pub mod config;
pub mod driver;
pub mod error;
pub mod help;
pub mod option;
pub mod processor;
pub mod remaining;
pub mod section;
pub mod store;
pub mod value;

// Re-export main types for convenience
pub use builtin::{BuiltinAction, COMMON_HIDDEN_SECTION, COMMON_SECTION};
pub use config::ParserConfig;
pub use driver::{version, Flow, VERSION};
pub use error::{ErrorCategory, OptsError, OptsResult};
pub use help::{
    help_document, render_json, render_text, usage_line, HelpDocument, HelpFilter, HelpFormat,
    HelpOption, HelpSection,
};
pub use option::{Assign, OptionDecl, RegisteredOption, Requiredness, Validate};
pub use processor::Processed;
pub use remaining::RemainingArgs;
pub use section::{Section, SectionId, Visibility};
pub use store::{ProgramOptions, StoreState};
pub use value::{Value, ValueKind};
