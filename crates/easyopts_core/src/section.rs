//! Named, ordered groups of options.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::option::RegisteredOption;

/// Visibility of a section in help output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Shown in default help.
    Public,
    /// Shown only when hidden help is requested.
    Hidden,
    /// Shown, but flagged as discouraged.
    Deprecated,
}

impl Visibility {
    /// Header text used by the text help renderer.
    pub fn describe(&self) -> &'static str {
        match self {
            Visibility::Public => "Options are public",
            Visibility::Hidden => "Options are hidden",
            Visibility::Deprecated => "Options are deprecated",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => f.write_str("public"),
            Visibility::Hidden => f.write_str("hidden"),
            Visibility::Deprecated => f.write_str("deprecated"),
        }
    }
}

/// Handle returned by [`ProgramOptions::add_section`](crate::ProgramOptions::add_section).
///
/// Only meaningful for the store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(pub(crate) usize);

impl SectionId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A section and the options registered into it, in registration order.
pub struct Section<T> {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) visibility: Visibility,
    pub(crate) options: Vec<RegisteredOption<T>>,
}

impl<T> Section<T> {
    pub(crate) fn new(name: String, description: String, visibility: Visibility) -> Self {
        Self {
            name,
            description,
            visibility,
            options: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn options(&self) -> &[RegisteredOption<T>] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<T> fmt::Debug for Section<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_text() {
        assert_eq!(Visibility::Public.describe(), "Options are public");
        assert_eq!(Visibility::Hidden.describe(), "Options are hidden");
        assert_eq!(Visibility::Deprecated.describe(), "Options are deprecated");
        assert_eq!(Visibility::Deprecated.to_string(), "deprecated");
    }

    #[test]
    fn test_new_section_is_empty() {
        let section: Section<()> = Section::new(
            "General".to_string(),
            "General options".to_string(),
            Visibility::Public,
        );
        assert!(section.is_empty());
        assert_eq!(section.name(), "General");
        assert_eq!(section.visibility(), Visibility::Public);
    }
}
