//! Option declarations for the demo program.
//!
//! Four sections exercise every visibility: A and D are public, B is
//! deprecated and C is hidden (only listed by `--help-hidden`).

use easyopts_core::{OptionDecl, OptsResult, ProgramOptions, Value, ValueKind, Visibility};

pub const DESCRIPTION: &str = "This is the general description of this test program";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SectionA {
    pub sa0: Option<String>,
    pub sa1: Option<String>,
    pub ia2: Option<i32>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SectionB {
    pub sb0: Option<String>,
    pub sb1: Option<String>,
    pub fb2: Option<f32>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SectionC {
    pub dc0: Option<f64>,
    pub dc1: Option<f64>,
    pub ic2: Option<i32>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SectionD {
    pub dd0: Option<f64>,
    pub dd1: Option<f64>,
    pub fd2: Option<f32>,
}

/// Destination filled in by the assign callbacks.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DemoOptions {
    pub a: SectionA,
    pub b: SectionB,
    pub c: SectionC,
    pub d: SectionD,
}

fn non_empty(v: &Value) -> bool {
    v.as_str().is_some_and(|s| !s.trim().is_empty())
}

fn non_negative(v: &Value) -> bool {
    v.as_i64().is_some_and(|n| n >= 0)
}

fn finite(v: &Value) -> bool {
    v.as_f64().is_some_and(f64::is_finite)
}

fn string(v: &Value) -> Option<String> {
    v.as_str().map(str::to_string)
}

fn int(v: &Value) -> Option<i32> {
    match v {
        Value::I32(n) => Some(*n),
        _ => None,
    }
}

fn float(v: &Value) -> Option<f32> {
    match v {
        Value::F32(n) => Some(*n),
        _ => None,
    }
}

/// Build the demo store over `args` (program name first).
pub fn build_store<I, S>(args: I) -> OptsResult<ProgramOptions<DemoOptions>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut store = ProgramOptions::new(args, DESCRIPTION);

    let sect = store.add_section(
        "Section A",
        "This is the first test section, it should have 3 options: two strings and an integer",
        Visibility::Public,
    )?;
    store.add_option(
        sect,
        OptionDecl::new("argA0", ValueKind::String, |v: &Value, o: &mut DemoOptions| {
            o.a.sa0 = string(v);
        })
        .required()
        .validate(non_empty)
        .description("Section A, argument 0 description"),
    )?;
    store.add_option(
        sect,
        OptionDecl::new("argA1", ValueKind::String, |v: &Value, o: &mut DemoOptions| {
            o.a.sa1 = string(v);
        })
        .optional()
        .validate(non_empty)
        .description("Section A, argument 1 description"),
    )?;
    store.add_option(
        sect,
        OptionDecl::new("iargA2", ValueKind::SignedInt, |v: &Value, o: &mut DemoOptions| {
            o.a.ia2 = int(v);
        })
        .short('a')
        .optional()
        .validate(non_negative)
        .description("Section A, argument 2 description"),
    )?;

    let sect = store.add_section(
        "Section B",
        "This is the second test section, it should have 2 options: two strings and a float",
        Visibility::Deprecated,
    )?;
    store.add_option(
        sect,
        OptionDecl::new("argB0", ValueKind::String, |v: &Value, o: &mut DemoOptions| {
            o.b.sb0 = string(v);
        })
        .optional()
        .validate(non_empty)
        .description("Section B, argument 0 description"),
    )?;
    store.add_option(
        sect,
        OptionDecl::new("argB1", ValueKind::String, |v: &Value, o: &mut DemoOptions| {
            o.b.sb1 = string(v);
        })
        .optional()
        .description("Section B, argument 1 description"),
    )?;
    store.add_option(
        sect,
        OptionDecl::new("iargB2", ValueKind::Float, |v: &Value, o: &mut DemoOptions| {
            o.b.fb2 = float(v);
        })
        .optional()
        .validate(finite)
        .description("Section B, argument 2 description"),
    )?;

    let sect = store.add_section(
        "Section C",
        "This is the third test section, it should have 2 options: two doubles and an integer",
        Visibility::Hidden,
    )?;
    store.add_option(
        sect,
        OptionDecl::new("argC0", ValueKind::Double, |v: &Value, o: &mut DemoOptions| {
            o.c.dc0 = v.as_f64();
        })
        .optional()
        .validate(finite)
        .description("Section C, argument 0 description"),
    )?;
    store.add_option(
        sect,
        OptionDecl::new("argC1", ValueKind::Double, |v: &Value, o: &mut DemoOptions| {
            o.c.dc1 = v.as_f64();
        })
        .optional()
        .validate(finite)
        .description("Section C, argument 1 description"),
    )?;
    store.add_option(
        sect,
        OptionDecl::new("iargC2", ValueKind::SignedInt, |v: &Value, o: &mut DemoOptions| {
            o.c.ic2 = int(v);
        })
        .optional()
        .description("Section C, argument 2 description"),
    )?;

    let sect = store.add_section(
        "Section D",
        "This is the fourth test section, it should have 2 options: two doubles and a float",
        Visibility::Public,
    )?;
    store.add_option(
        sect,
        OptionDecl::new("argD0", ValueKind::Double, |v: &Value, o: &mut DemoOptions| {
            o.d.dd0 = v.as_f64();
        })
        .short('d')
        .required()
        .validate(finite)
        .description("Section D, argument 0 description"),
    )?;
    store.add_option(
        sect,
        OptionDecl::new("argD1", ValueKind::Double, |v: &Value, o: &mut DemoOptions| {
            o.d.dd1 = v.as_f64();
        })
        .optional()
        .validate(finite)
        .description("Section D, argument 1 description"),
    )?;
    store.add_option(
        sect,
        OptionDecl::new("iargD2", ValueKind::Float, |v: &Value, o: &mut DemoOptions| {
            o.d.fd2 = float(v);
        })
        .optional()
        .validate(finite)
        .description("Section D, argument 2 description"),
    )?;

    Ok(store)
}
