//! Top-level driver turning built-in actions into output and a control signal.

use std::io::Write;

use tracing::debug;

use crate::builtin::BuiltinAction;
use crate::error::OptsResult;
use crate::remaining::RemainingArgs;
use crate::store::ProgramOptions;

/// Library version, fixed at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> &'static str {
    VERSION
}

/// What the host program should do after [`ProgramOptions::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Options were assigned; carry on with the leftover arguments.
    Continue(RemainingArgs),
    /// A built-in finished the job; exit with this code.
    Exit(i32),
}

impl<T> ProgramOptions<T> {
    /// Process the store's argument vector and act on built-in options,
    /// writing any version or help output to `out`.
    pub fn run<W: Write>(&mut self, target: &mut T, out: &mut W) -> OptsResult<Flow> {
        let processed = self.process(target)?;
        self.finish(processed.actions, processed.remaining, out)
    }

    /// Same as [`run`](Self::run) for an explicit argument list (program name excluded).
    pub fn run_args<S: AsRef<str>, W: Write>(
        &mut self,
        args: &[S],
        target: &mut T,
        out: &mut W,
    ) -> OptsResult<Flow> {
        let processed = self.process_args(args, target)?;
        self.finish(processed.actions, processed.remaining, out)
    }

    fn finish<W: Write>(
        &self,
        actions: Vec<BuiltinAction>,
        remaining: RemainingArgs,
        out: &mut W,
    ) -> OptsResult<Flow> {
        for action in actions {
            match action {
                BuiltinAction::Version => {
                    writeln!(out, "Easyopts Version {}", version())?;
                }
                BuiltinAction::Help(filter, format) => {
                    debug!("Rendering {:?} help ({:?})", format, filter);
                    self.write_help(out, filter, format)?;
                    remaining.free();
                    return Ok(Flow::Exit(0));
                }
            }
        }
        Ok(Flow::Continue(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptsError;
    use crate::help::HelpFilter;
    use crate::option::OptionDecl;
    use crate::section::Visibility;
    use crate::value::{Value, ValueKind};

    fn store() -> ProgramOptions<Vec<String>> {
        let mut store = ProgramOptions::new(["prog"], "Driver test");
        let s = store.add_section("Main", "Main", Visibility::Public).unwrap();
        store
            .add_option(
                s,
                OptionDecl::new("input", ValueKind::String, |v: &Value, t: &mut Vec<String>| {
                    t.push(v.to_string());
                })
                .required(),
            )
            .unwrap();
        store
    }

    #[test]
    fn test_help_exits_and_skips_required_check() {
        let mut store = store();
        let mut out = Vec::new();
        let mut dest = Vec::new();
        let flow = store.run_args(&["--help"], &mut dest, &mut out).unwrap();
        assert_eq!(flow, Flow::Exit(0));
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Driver test\n\nUsage: prog"));
        assert!(!text.contains("Common Hidden"));
        assert!(dest.is_empty());
    }

    #[test]
    fn test_help_hidden_includes_hidden_builtins() {
        let mut store = store();
        let mut out = Vec::new();
        let flow = store
            .run_args(&["--help-hidden"], &mut Vec::new(), &mut out)
            .unwrap();
        assert_eq!(flow, Flow::Exit(0));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[Common Hidden: Options are hidden]"));
        assert_eq!(text, store.help_text(HelpFilter::IncludeHidden));
    }

    #[test]
    fn test_help_json() {
        let mut store = store();
        let mut out = Vec::new();
        store
            .run_args(&["--help-json"], &mut Vec::new(), &mut out)
            .unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc["description"], "Driver test");
    }

    #[test]
    fn test_help_hidden_json() {
        let mut store = store();
        let mut out = Vec::new();
        let flow = store
            .run_args(&["--help-hidden-json"], &mut Vec::new(), &mut out)
            .unwrap();
        assert_eq!(flow, Flow::Exit(0));
        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let names: Vec<&str> = doc["sections"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|s| s["name"].as_str())
            .collect();
        assert_eq!(names, vec!["Common", "Common Hidden", "Main"]);
        assert_eq!(doc["sections"][1]["visibility"], "hidden");
    }

    #[test]
    fn test_version_alone_skips_required_check() {
        let mut store = store();
        let mut out = Vec::new();
        let mut dest = Vec::new();
        let flow = store.run_args(&["--version"], &mut dest, &mut out).unwrap();
        assert_eq!(flow, Flow::Continue(RemainingArgs::new()));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Easyopts Version {}\n", VERSION)
        );
        assert!(dest.is_empty());
    }

    #[test]
    fn test_version_with_user_options_still_checks_required() {
        let mut store = store();
        let s = store.add_section("Extra", "", Visibility::Public).unwrap();
        store
            .add_option(s, OptionDecl::new("extra", ValueKind::String, |_: &Value, _: &mut Vec<String>| {}))
            .unwrap();
        let mut out = Vec::new();
        let err = store
            .run_args(&["-v", "--extra=1"], &mut Vec::new(), &mut out)
            .unwrap_err();
        assert!(matches!(err, OptsError::MissingRequired { ref option } if option == "input"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_version_continues() {
        let mut store = store();
        let mut out = Vec::new();
        let mut dest = Vec::new();
        let flow = store
            .run_args(&["-v", "--input=a", "left"], &mut dest, &mut out)
            .unwrap();
        assert_eq!(flow, Flow::Continue(RemainingArgs::from(vec!["left".to_string()])));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Easyopts Version {}\n", VERSION)
        );
        assert_eq!(dest, vec!["a".to_string()]);
    }

    #[test]
    fn test_help_stops_later_assigns() {
        let mut store = store();
        let mut dest = Vec::new();
        let flow = store
            .run_args(&["--input=a", "-h"], &mut dest, &mut std::io::sink())
            .unwrap();
        assert_eq!(flow, Flow::Exit(0));
        // Common is registered before Main, so help halts ahead of --input
        assert!(dest.is_empty());
    }
}
