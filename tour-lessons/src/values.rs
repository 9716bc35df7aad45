use std::collections::HashSet;
use std::fmt;
use std::io;

use crate::output::Printer;

/// Name interpolated into the greeting.
pub const NAME: &str = "fran";

/// A print routine taking no arguments besides the sink.
pub type PrintRoutine = fn(&mut Printer<'_>) -> io::Result<()>;

/// A print routine that prints the text it is given.
pub type PrintWith = Box<dyn Fn(&mut Printer<'_>, &str) -> io::Result<()>>;

/// Boxes a closure as a [`PrintWith`].
pub fn print_with<F>(routine: F) -> PrintWith
where
    F: Fn(&mut Printer<'_>, &str) -> io::Result<()> + 'static,
{
    Box::new(routine)
}

/// Record with a plain value and two callable fields.
pub struct Record {
    pub key: &'static str,
    pub ref_fn: PrintRoutine,
    pub ref_lambda: PrintWith,
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("key", &self.key)
            .field("ref_fn", &"fn")
            .field("ref_lambda", &"closure")
            .finish()
    }
}

pub fn greeting(name: &str) -> String {
    format!("hello {name}")
}

pub fn array() -> [i64; 3] {
    [1, 2, 3]
}

pub fn tuple() -> (i64, i64, i64) {
    (1, 2, 3)
}

/// Spreads a triple back into a sequence so it can be compared with [`array`].
pub fn tuple_elements((first, second, third): (i64, i64, i64)) -> [i64; 3] {
    [first, second, third]
}

pub fn set_of(values: impl IntoIterator<Item = i64>) -> HashSet<i64> {
    values.into_iter().collect()
}

pub fn set() -> HashSet<i64> {
    set_of([1, 2, 3])
}
