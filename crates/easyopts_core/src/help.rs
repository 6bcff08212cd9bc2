//! Help output: a plain-text layout and a JSON document carrying the same data.
//!
//! Short option names and default values are not part of the text layout;
//! the JSON form carries short names.

use std::io::Write;

use serde::Serialize;

use crate::error::OptsResult;
use crate::option::{RegisteredOption, Requiredness};
use crate::section::{Section, Visibility};
use crate::store::ProgramOptions;
use crate::value::ValueKind;

/// Which sections a help request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpFilter {
    PublicOnly,
    IncludeHidden,
}

impl HelpFilter {
    pub fn shows(&self, visibility: Visibility) -> bool {
        match self {
            HelpFilter::PublicOnly => visibility != Visibility::Hidden,
            HelpFilter::IncludeHidden => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpFormat {
    Text,
    Json,
}

/// Structured help, serialized for `--help-json`.
#[derive(Debug, Serialize)]
pub struct HelpDocument {
    pub description: String,
    pub program: String,
    pub usage: String,
    pub sections: Vec<HelpSection>,
}

#[derive(Debug, Serialize)]
pub struct HelpSection {
    pub name: String,
    pub visibility: Visibility,
    pub description: String,
    pub options: Vec<HelpOption>,
}

#[derive(Debug, Serialize)]
pub struct HelpOption {
    pub long: String,
    pub short: Option<char>,
    pub kind: ValueKind,
    pub requiredness: Requiredness,
    pub description: String,
}

fn visible_sections<T>(
    store: &ProgramOptions<T>,
    filter: HelpFilter,
) -> impl Iterator<Item = &Section<T>> {
    store
        .sections()
        .iter()
        .filter(move |section| filter.shows(section.visibility()))
}

/// The synopsis after `Usage: `, e.g. `prog --input=X [--level=X]`.
pub fn usage_line<T>(store: &ProgramOptions<T>, filter: HelpFilter) -> String {
    let mut line = store.program_name().to_string();
    for option in visible_sections(store, filter).flat_map(Section::options) {
        if option.requiredness() == Requiredness::Required {
            line.push_str(&format!(" --{}=X", option.long()));
        } else {
            line.push_str(&format!(" [--{}=X]", option.long()));
        }
    }
    line
}

fn option_line<T>(option: &RegisteredOption<T>) -> String {
    format!(
        "--{}=[{}] {}\n",
        option.long(),
        option.kind().label(),
        option.description()
    )
}

/// Render the text help form.
pub fn render_text<T>(store: &ProgramOptions<T>, filter: HelpFilter) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", store.description()));
    out.push_str(&format!("Usage: {}\n", usage_line(store, filter)));

    for section in visible_sections(store, filter) {
        out.push_str(&format!(
            "[{}: {}]\n",
            section.name(),
            section.visibility().describe()
        ));
        out.push_str(&format!("{}\n", section.description()));
        for option in section.options() {
            out.push_str(&option_line(option));
        }
        out.push('\n');
    }
    out
}

/// Build the structured help document.
pub fn help_document<T>(store: &ProgramOptions<T>, filter: HelpFilter) -> HelpDocument {
    HelpDocument {
        description: store.description().to_string(),
        program: store.program_name().to_string(),
        usage: usage_line(store, filter),
        sections: visible_sections(store, filter)
            .map(|section| HelpSection {
                name: section.name().to_string(),
                visibility: section.visibility(),
                description: section.description().to_string(),
                options: section
                    .options()
                    .iter()
                    .map(|option| HelpOption {
                        long: option.long().to_string(),
                        short: option.short(),
                        kind: option.kind(),
                        requiredness: option.requiredness(),
                        description: option.description().to_string(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Render the JSON help form (pretty-printed, trailing newline).
pub fn render_json<T>(store: &ProgramOptions<T>, filter: HelpFilter) -> OptsResult<String> {
    let mut json = serde_json::to_string_pretty(&help_document(store, filter))?;
    json.push('\n');
    Ok(json)
}

impl<T> ProgramOptions<T> {
    pub fn help_text(&self, filter: HelpFilter) -> String {
        render_text(self, filter)
    }

    pub fn help_json(&self, filter: HelpFilter) -> OptsResult<String> {
        render_json(self, filter)
    }

    /// Write help in the requested form to `out`.
    pub fn write_help<W: Write>(
        &self,
        out: &mut W,
        filter: HelpFilter,
        format: HelpFormat,
    ) -> OptsResult<()> {
        let rendered = match format {
            HelpFormat::Text => self.help_text(filter),
            HelpFormat::Json => self.help_json(filter)?,
        };
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfig;
    use crate::option::OptionDecl;
    use crate::value::Value;

    fn noop(_: &Value, _: &mut ()) {}

    fn sample() -> ProgramOptions<()> {
        let mut store =
            ProgramOptions::with_config(["demo"], "Demo program", ParserConfig::new().without_builtins());
        let a = store.add_section("A", "Section A", Visibility::Public).unwrap();
        store
            .add_option(
                a,
                OptionDecl::new("input", ValueKind::String, noop)
                    .required()
                    .description("Input file"),
            )
            .unwrap();
        store
            .add_option(
                a,
                OptionDecl::new("level", ValueKind::SignedInt, noop)
                    .short('l')
                    .description("Level"),
            )
            .unwrap();
        let h = store.add_section("H", "Section H", Visibility::Hidden).unwrap();
        store
            .add_option(h, OptionDecl::new("secret", ValueKind::Double, noop).description("Secret"))
            .unwrap();
        let d = store.add_section("D", "Section D", Visibility::Deprecated).unwrap();
        store
            .add_option(d, OptionDecl::new("old", ValueKind::Float, noop).description("Old"))
            .unwrap();
        store
    }

    #[test]
    fn test_render_text_public() {
        let text = sample().help_text(HelpFilter::PublicOnly);
        let expected = "Demo program\n\n\
Usage: demo --input=X [--level=X] [--old=X]\n\
[A: Options are public]\n\
Section A\n\
--input=[String] Input file\n\
--level=[Signed Integer] Level\n\
\n\
[D: Options are deprecated]\n\
Section D\n\
--old=[Float] Old\n\
\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_text_hidden_included() {
        let text = sample().help_text(HelpFilter::IncludeHidden);
        assert!(text.contains("[H: Options are hidden]\nSection H\n--secret=[Double] Secret\n"));
        assert!(text.contains("Usage: demo --input=X [--level=X] [--secret=X] [--old=X]\n"));
        let a = text.find("[A:").unwrap();
        let h = text.find("[H:").unwrap();
        let d = text.find("[D:").unwrap();
        assert!(a < h && h < d);
    }

    #[test]
    fn test_render_json_matches_filter() {
        let store = sample();
        let json = store.help_json(HelpFilter::PublicOnly).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
        let sections = doc["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0]["name"], "A");
        assert_eq!(sections[0]["options"][1]["short"], "l");
        assert_eq!(sections[0]["options"][1]["kind"], "signed_int");
        assert_eq!(sections[0]["options"][0]["requiredness"], "required");
        assert_eq!(sections[1]["visibility"], "deprecated");
        assert_eq!(doc["program"], "demo");

        let json = store.help_json(HelpFilter::IncludeHidden).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(doc["sections"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_json_escapes_text() {
        let store: ProgramOptions<()> = ProgramOptions::with_config(
            ["demo"],
            "Says \"hi\"\nand more",
            ParserConfig::new().without_builtins(),
        );
        let json = store.help_json(HelpFilter::PublicOnly).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(doc["description"], "Says \"hi\"\nand more");
    }

    #[test]
    fn test_write_help() {
        let store = sample();
        let mut buf = Vec::new();
        store
            .write_help(&mut buf, HelpFilter::PublicOnly, HelpFormat::Text)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), store.help_text(HelpFilter::PublicOnly));
    }
}
