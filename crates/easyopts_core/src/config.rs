//! Store and processor configuration.

use serde::{Deserialize, Serialize};

/// Settings fixed when a [`ProgramOptions`](crate::ProgramOptions) store is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParserConfig {
    /// Register the `Common` help/version sections at construction.
    pub register_builtins: bool,
    /// Treat a bare `--` as the end of options.
    pub end_of_options: bool,
    /// Accept an option more than once (last value wins).
    pub allow_repeats: bool,
    /// Program name shown in the usage line instead of `argv[0]`.
    pub program_name: Option<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            register_builtins: true,
            end_of_options: true,
            allow_repeats: true,
            program_name: None,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_builtins(mut self) -> Self {
        self.register_builtins = false;
        self
    }

    pub fn end_of_options(mut self, enabled: bool) -> Self {
        self.end_of_options = enabled;
        self
    }

    pub fn allow_repeats(mut self, allowed: bool) -> Self {
        self.allow_repeats = allowed;
        self
    }

    pub fn program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = Some(name.into());
        self
    }
}
