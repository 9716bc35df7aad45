mod docblocks;
mod error;
mod lessons;
mod output;
mod values;

pub use crate::docblocks::{blocks_for_lang, BlockParser, CodeBlock};
pub use crate::error::{TourError, TourResult};
pub use crate::lessons::{
    double, find_lesson, hello_world, is_even, lesson, record, run_lesson, Animal, ArgValue, Cat,
    Critter, KwArgs, Lesson, LessonFn, Showcase, DEFAULT_LESSON, LESSONS,
};
pub use crate::output::Printer;
pub use crate::values::{
    array, greeting, print_with, set, set_of, tuple, tuple_elements, PrintRoutine, PrintWith,
    Record, NAME,
};

/// Runs the default lesson once against `out`.
pub fn run_demo(out: &mut Printer<'_>) -> TourResult<()> {
    run_lesson(DEFAULT_LESSON, out)
}
