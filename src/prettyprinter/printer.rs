/*
The actual, conditionally compiled prettyprinter implementation
*/

use super::tokens::*;
use std::fmt::{self, Display, Formatter};

/// A value which can be prettyprinted
pub trait PrettyPrint {
    /// Prettyprint a value to a given formatter
    fn prettyprint(&self, fmt: &mut Formatter) -> Result<(), fmt::Error>;
}

/// Prettyprint a bracketed, space separated list of items
pub fn prettyprint_list<I>(fmt: &mut Formatter, items: I) -> Result<(), fmt::Error>
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(fmt, "{}", TUPLE_OPEN)?;
    let mut first = true;
    for item in items {
        if !first {
            write!(fmt, "{}", LIST_SEP)?;
        }
        first = false;
        write!(fmt, "{}", item)?;
    }
    write!(fmt, "{}", TUPLE_CLOSE)
}
