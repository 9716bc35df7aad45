use super::{lesson, Lesson};
use crate::error::TourResult;
use crate::output::Printer;

pub(super) const LESSON: Lesson = lesson(
    "loops",
    "Iteration styles and map/filter pipelines.",
    run,
);

const ELEMENTS: [&str; 3] = ["first element", "second element", "etc"];
const NUMBERS: [i64; 4] = [1, 2, 3, 4];

pub fn double(x: i64) -> i64 {
    x + x
}

pub fn is_even(x: i64) -> bool {
    x % 2 == 0
}

#[allow(clippy::needless_range_loop)]
pub fn run(out: &mut Printer<'_>) -> TourResult<()> {
    for element in ELEMENTS {
        out.line(element)?;
    }

    for (index, element) in ELEMENTS.iter().enumerate() {
        out.line(format_args!("{index} {element}"))?;
    }

    for index in 0..ELEMENTS.len() {
        let element = ELEMENTS[index];
        out.line(format_args!("{index} {element}"))?;
    }

    let result: Vec<i64> = NUMBERS.iter().map(|x| x + x).collect();
    out.line(format_args!("{result:?}"))?;

    let result: Vec<i64> = NUMBERS.iter().copied().map(double).collect();
    out.line(format_args!("{result:?}"))?;

    let result: Vec<i64> = NUMBERS.iter().copied().filter(|x| is_even(*x)).collect();
    out.line(format_args!("{result:?}"))?;

    let result: Vec<i64> = NUMBERS
        .iter()
        .copied()
        .filter(|x| is_even(*x))
        .map(double)
        .collect();
    out.line(format_args!("{result:?}"))?;
    Ok(())
}
