use std::io;

use super::{lesson, Lesson};
use crate::error::TourResult;
use crate::output::Printer;
use crate::values::{self, greeting, print_with, Record, NAME};

pub(super) const LESSON: Lesson = lesson(
    "basics",
    "Functions, closures, records, collections and interpolation.",
    run,
);

pub fn hello_world(out: &mut Printer<'_>) -> io::Result<()> {
    out.line("hello world")
}

pub fn record() -> Record {
    Record {
        key: "value",
        ref_fn: hello_world,
        ref_lambda: print_with(|out, text| out.line(text)),
    }
}

/// Every value the basics lesson builds. Construction prints nothing.
#[derive(Debug)]
pub struct Showcase {
    pub record: Record,
    pub array: [i64; 3],
    pub tuple: (i64, i64, i64),
    pub set: std::collections::HashSet<i64>,
}

impl Showcase {
    pub fn new() -> Self {
        Self {
            record: record(),
            array: values::array(),
            tuple: values::tuple(),
            set: values::set(),
        }
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(out: &mut Printer<'_>) -> TourResult<()> {
    hello_world(out)?;

    let hello_world_lambda = |out: &mut Printer<'_>| out.line("hello world");
    hello_world_lambda(out)?;

    let _showcase = Showcase::new();

    out.line(greeting(NAME))?;
    Ok(())
}
