use std::fmt;
use std::io;

use super::{lesson, Lesson};
use crate::error::TourResult;
use crate::output::Printer;

pub(super) const LESSON: Lesson = lesson(
    "arguments",
    "Named, variadic and keyword argument styles.",
    run,
);

/// Loosely typed argument for the variadic and keyword demonstrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl ArgValue {
    /// Literal form: strings quoted, everything else as displayed.
    pub fn repr(&self) -> String {
        match self {
            ArgValue::Str(text) => format!("{text:?}"),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Str(text) => f.write_str(text),
            ArgValue::Int(value) => write!(f, "{value}"),
            ArgValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Int(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

/// Keyword arguments, kept in the order they were passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KwArgs {
    entries: Vec<(&'static str, ArgValue)>,
}

impl KwArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key`, replacing an earlier value with the same key in place.
    pub fn with(mut self, key: &'static str, value: impl Into<ArgValue>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for KwArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .entries
            .iter()
            .map(|(key, value)| format!("{key}: {}", value.repr()))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{joined}}}")
    }
}

fn list_repr(args: &[ArgValue]) -> String {
    let joined = args
        .iter()
        .map(ArgValue::repr)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

pub struct NamedArgs<'a> {
    pub name: &'a str,
    pub age: &'a str,
}

pub fn named_args(out: &mut Printer<'_>, args: NamedArgs<'_>) -> io::Result<()> {
    out.line(format_args!("named args {} {}", args.name, args.age))
}

pub fn var_args(out: &mut Printer<'_>, args: &[ArgValue]) -> io::Result<()> {
    let joined = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    out.line(format_args!("var args {joined}"))
}

pub fn var_named_args(out: &mut Printer<'_>, kwargs: &KwArgs) -> io::Result<()> {
    out.line(format_args!("kwargs {kwargs}"))
}

pub fn rest_array_args(out: &mut Printer<'_>, name: &str, rest: &[ArgValue]) -> io::Result<()> {
    out.line(format_args!("rest {name} {}", list_repr(rest)))
}

pub fn rest_kwargs(out: &mut Printer<'_>, name: &str, kwargs: &KwArgs) -> io::Result<()> {
    out.line(format_args!("rest {name} {kwargs}"))
}

pub fn mix(
    out: &mut Printer<'_>,
    name: &str,
    args: &[ArgValue],
    kwargs: &KwArgs,
) -> io::Result<()> {
    out.line(format_args!("mix {name} {} {kwargs}", list_repr(args)))
}

pub fn run(out: &mut Printer<'_>) -> TourResult<()> {
    named_args(
        out,
        NamedArgs {
            age: "23",
            name: "fran",
        },
    )?;

    var_args(out, &["hi".into(), 1_i64.into(), true.into()])?;

    var_named_args(out, &KwArgs::new().with("name", "fran").with("age", 123_i64))?;

    rest_array_args(
        out,
        "fran",
        &["23".into(), 1_i64.into(), 2_i64.into(), true.into()],
    )?;

    let status = KwArgs::new()
        .with("age", 23_i64)
        .with("status", "midly content");
    rest_kwargs(out, "fran", &status)?;
    mix(out, "fran", &["leplant".into()], &status)?;
    Ok(())
}
