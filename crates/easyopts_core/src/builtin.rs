//! Options every store carries unless disabled: version and the help family.

use crate::help::{HelpFilter, HelpFormat};
use crate::option::{Handler, OptionDecl};
use crate::section::Visibility;
use crate::store::ProgramOptions;
use crate::value::ValueKind;

pub const COMMON_SECTION: &str = "Common";
pub const COMMON_HIDDEN_SECTION: &str = "Common Hidden";

/// Control request raised by a built-in option instead of a user assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinAction {
    /// Print the library version and keep going.
    Version,
    /// Print help in the given form, then stop with exit code 0.
    Help(HelpFilter, HelpFormat),
}

impl BuiltinAction {
    /// Whether processing stops once this action runs.
    pub fn terminates(&self) -> bool {
        matches!(self, BuiltinAction::Help(..))
    }
}

fn builtin<T>(long: &str, action: BuiltinAction, description: &str) -> OptionDecl<T> {
    OptionDecl::with_handler(long, ValueKind::String, Handler::Builtin(action))
        .switch()
        .description(description)
}

/// Add the `Common` and `Common Hidden` sections to a fresh store.
pub(crate) fn register<T>(store: &mut ProgramOptions<T>) {
    let common = store.push_section(
        COMMON_SECTION.to_string(),
        "Provide Common Arguments for help and versioning".to_string(),
        Visibility::Public,
    );
    store.push_option(
        common,
        builtin("version", BuiltinAction::Version, "Print the library's version information").short('v'),
    );
    store.push_option(
        common,
        builtin(
            "help",
            BuiltinAction::Help(HelpFilter::PublicOnly, HelpFormat::Text),
            "Print program usage and exit.",
        )
        .short('h'),
    );
    store.push_option(
        common,
        builtin(
            "help-json",
            BuiltinAction::Help(HelpFilter::PublicOnly, HelpFormat::Json),
            "Print program usage in Json format and exit.",
        ),
    );

    let hidden = store.push_section(
        COMMON_HIDDEN_SECTION.to_string(),
        "Provide Common Arguments for help and versioning (Hidden)".to_string(),
        Visibility::Hidden,
    );
    store.push_option(
        hidden,
        builtin(
            "help-hidden",
            BuiltinAction::Help(HelpFilter::IncludeHidden, HelpFormat::Text),
            "Print program usage (including hidden options) and exit.",
        ),
    );
    store.push_option(
        hidden,
        builtin(
            "help-hidden-json",
            BuiltinAction::Help(HelpFilter::IncludeHidden, HelpFormat::Json),
            "Print program usage in Json format (including hidden options) and exit.",
        ),
    );
}
