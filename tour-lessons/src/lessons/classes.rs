use std::io;

use super::{lesson, Lesson};
use crate::error::TourResult;
use crate::output::Printer;

pub(super) const LESSON: Lesson = lesson(
    "classes",
    "Shared behaviour through a trait with a default method.",
    run,
);

pub trait Animal {
    fn talk(&self, out: &mut Printer<'_>) -> io::Result<()> {
        out.line("me talking: ...")
    }
}

/// An animal with nothing to add to the default behaviour.
pub struct Critter;

impl Animal for Critter {}

pub struct Cat {
    pub name: String,
}

impl Cat {
    pub const CLASS_ATTRIBUTE: &'static str = "version 1";

    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for Cat {
    fn talk(&self, out: &mut Printer<'_>) -> io::Result<()> {
        out.line(format_args!("meow, im {}", self.name))
    }
}

pub fn run(out: &mut Printer<'_>) -> TourResult<()> {
    let animals: Vec<Box<dyn Animal>> = vec![Box::new(Critter), Box::new(Cat::new("mr kitty"))];
    for animal in &animals {
        animal.talk(out)?;
    }
    Ok(())
}
