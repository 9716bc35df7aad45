mod arguments;
mod basics;
mod classes;
mod loops;

use crate::error::{TourError, TourResult};
use crate::output::Printer;

pub use arguments::{ArgValue, KwArgs};
pub use basics::{hello_world, record, Showcase};
pub use classes::{Animal, Cat, Critter};
pub use loops::{double, is_even};

pub type LessonFn = fn(&mut Printer<'_>) -> TourResult<()>;

#[derive(Clone, Copy)]
pub struct Lesson {
    pub name: &'static str,
    pub summary: &'static str,
    pub run: LessonFn,
}

pub const fn lesson(name: &'static str, summary: &'static str, run: LessonFn) -> Lesson {
    Lesson { name, summary, run }
}

pub static LESSONS: &[Lesson] = &[
    basics::LESSON,
    arguments::LESSON,
    classes::LESSON,
    loops::LESSON,
];

/// Name of the lesson run when nothing else is requested.
pub const DEFAULT_LESSON: &str = "basics";

pub fn find_lesson(name: &str) -> Option<&'static Lesson> {
    LESSONS.iter().find(|lesson| lesson.name == name)
}

pub fn run_lesson(name: &str, out: &mut Printer<'_>) -> TourResult<()> {
    let lesson = find_lesson(name).ok_or_else(|| TourError::UnknownLesson {
        name: name.to_string(),
    })?;
    let before = out.lines_written();
    log::debug!("lesson:start name={}", lesson.name);
    (lesson.run)(out)?;
    log::debug!(
        "lesson:done name={} lines={}",
        lesson.name,
        out.lines_written() - before
    );
    Ok(())
}
