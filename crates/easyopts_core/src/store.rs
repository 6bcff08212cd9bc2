//! The program option store: ordered sections of registered options.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::builtin;
use crate::config::ParserConfig;
use crate::error::{OptsError, OptsResult};
use crate::option::{OptionDecl, RegisteredOption};
use crate::remaining::RemainingArgs;
use crate::section::{Section, SectionId, Visibility};

/// Program name used in the usage line when argv is empty.
pub const FALLBACK_PROGRAM_NAME: &str = "program";

/// Lifecycle of a store. Teardown consumes the store, so there is no freed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Constructed, built-ins registered, nothing declared by the caller yet.
    Initialized,
    /// At least one caller section or option has been added.
    Registering,
    /// The command line has been processed.
    Processed,
}

impl fmt::Display for StoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreState::Initialized => f.write_str("initialized"),
            StoreState::Registering => f.write_str("registering"),
            StoreState::Processed => f.write_str("processed"),
        }
    }
}

fn long_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Letters, digits, '-', '_' and '.', not starting with '-'
        Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.-]*$").expect("long option pattern is valid")
    })
}

fn valid_short(short: char) -> bool {
    short.is_ascii_alphanumeric() || short == '?'
}

/// Position of an option inside the store: (section index, option index).
pub(crate) type Slot = (usize, usize);

/// Holds the argument vector, the program description and every declared
/// section, in registration order.
///
/// `T` is the destination type handed to every assign callback.
pub struct ProgramOptions<T> {
    pub(crate) args: Vec<String>,
    pub(crate) description: String,
    pub(crate) config: ParserConfig,
    pub(crate) sections: Vec<Section<T>>,
    pub(crate) long_index: HashMap<String, Slot>,
    pub(crate) short_index: HashMap<char, Slot>,
    pub(crate) state: StoreState,
}

impl<T> ProgramOptions<T> {
    /// Create a store bound to `args` (including the program name) with the
    /// default configuration.
    pub fn new<I, S>(args: I, description: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(args, description, ParserConfig::default())
    }

    /// Create a store with an explicit configuration.
    pub fn with_config<I, S>(args: I, description: impl Into<String>, config: ParserConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self {
            args: args.into_iter().map(Into::into).collect(),
            description: description.into(),
            config,
            sections: Vec::new(),
            long_index: HashMap::new(),
            short_index: HashMap::new(),
            state: StoreState::Initialized,
        };
        if store.config.register_builtins {
            builtin::register(&mut store);
        }
        debug!(
            "Initialized option store with {} argument(s), {} built-in section(s)",
            store.args.len(),
            store.sections.len()
        );
        store
    }

    /// Append a section and return its handle for option registration.
    pub fn add_section(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        visibility: Visibility,
    ) -> OptsResult<SectionId> {
        self.enter_registering()?;
        Ok(self.push_section(name.into(), description.into(), visibility))
    }

    /// Append an option to `section`.
    ///
    /// Long names must be unique across the whole store, as must short names.
    pub fn add_option(&mut self, section: SectionId, decl: OptionDecl<T>) -> OptsResult<()> {
        self.enter_registering()?;
        if section.0 >= self.sections.len() {
            return Err(OptsError::UnknownSection(section.0));
        }
        if !long_name_pattern().is_match(&decl.long) {
            return Err(OptsError::InvalidLongOption(decl.long));
        }
        if let Some(&(s, _)) = self.long_index.get(&decl.long) {
            return Err(OptsError::DuplicateLongOption {
                long: decl.long,
                section: self.sections[s].name.clone(),
            });
        }
        if let Some(short) = decl.short {
            if !valid_short(short) {
                return Err(OptsError::InvalidShortOption(short));
            }
            if let Some(&(s, o)) = self.short_index.get(&short) {
                return Err(OptsError::DuplicateShortOption {
                    short,
                    existing: self.sections[s].options[o].long.clone(),
                });
            }
        }
        self.push_option(section, decl);
        Ok(())
    }

    pub(crate) fn push_section(
        &mut self,
        name: String,
        description: String,
        visibility: Visibility,
    ) -> SectionId {
        debug!("Registering section: {} ({})", name, visibility);
        self.sections.push(Section::new(name, description, visibility));
        SectionId(self.sections.len() - 1)
    }

    /// Insert without validation; callers check names first.
    pub(crate) fn push_option(&mut self, section: SectionId, decl: OptionDecl<T>) {
        let target = &mut self.sections[section.0];
        let slot = (section.0, target.options.len());
        debug!(
            "Registering option --{} in section {} ({:?}, {})",
            decl.long, target.name, decl.requiredness, decl.kind
        );
        self.long_index.insert(decl.long.clone(), slot);
        if let Some(short) = decl.short {
            self.short_index.insert(short, slot);
        }
        target.options.push(RegisteredOption::from(decl));
    }

    fn enter_registering(&mut self) -> OptsResult<()> {
        match self.state {
            StoreState::Initialized | StoreState::Registering => {
                self.state = StoreState::Registering;
                Ok(())
            }
            StoreState::Processed => Err(OptsError::InvalidStateTransition {
                from: self.state.to_string(),
                to: StoreState::Registering.to_string(),
            }),
        }
    }

    pub(crate) fn enter_processed(&mut self) -> OptsResult<()> {
        if self.state == StoreState::Processed {
            return Err(OptsError::InvalidStateTransition {
                from: self.state.to_string(),
                to: StoreState::Processed.to_string(),
            });
        }
        self.state = StoreState::Processed;
        Ok(())
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The full argument vector, program name included.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Name shown in the usage line.
    pub fn program_name(&self) -> &str {
        self.config
            .program_name
            .as_deref()
            .or_else(|| self.args.first().map(String::as_str))
            .unwrap_or(FALLBACK_PROGRAM_NAME)
    }

    pub fn sections(&self) -> &[Section<T>] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<&Section<T>> {
        self.sections.get(id.0)
    }

    /// Look up an option by its long name.
    pub fn find_long(&self, long: &str) -> Option<(SectionId, &RegisteredOption<T>)> {
        self.long_index
            .get(long)
            .map(|&(s, o)| (SectionId(s), &self.sections[s].options[o]))
    }

    /// Look up an option by its short name.
    pub fn find_short(&self, short: char) -> Option<(SectionId, &RegisteredOption<T>)> {
        self.short_index
            .get(&short)
            .map(|&(s, o)| (SectionId(s), &self.sections[s].options[o]))
    }

    /// Total number of registered options across all sections.
    pub fn option_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Tear down the store and, if given, a remainder produced by it.
    pub fn free(self, remaining: Option<RemainingArgs>) {
        debug!(
            "Releasing option store: {} section(s), {} option(s)",
            self.sections.len(),
            self.option_count()
        );
        if let Some(remaining) = remaining {
            remaining.free();
        }
    }
}

impl<T> fmt::Debug for ProgramOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgramOptions")
            .field("description", &self.description)
            .field("state", &self.state)
            .field("sections", &self.sections)
            .finish()
    }
}
