/*!
A prettyprinter for unions, tags and instances
*/

#[cfg(feature = "prettyprinter")]
mod printer;
#[cfg(feature = "prettyprinter")]
pub use printer::*;

pub mod tokens;
