/*!
Folding over instances of a union, with a per-variant update rule

Each case of a reducer takes a payload and returns a [`Step`]: a function from the old accumulator to
the new one. Folding a sequence of instances is then a plain left fold, where each instance selects
the step applied to the accumulator.
*/
use super::Matcher;
use crate::error::Error;
use crate::instance::Instance;
use std::fmt::{self, Debug, Formatter};

/// A transformation of an accumulator
pub type Step<Acc> = Box<dyn FnOnce(Acc) -> Acc>;

/// Box a transformation of an accumulator into a [`Step`]
#[inline]
pub fn step<Acc, F>(f: F) -> Step<Acc>
where
    F: FnOnce(Acc) -> Acc + 'static,
{
    Box::new(f)
}

/// A reducer over the instances of a union
pub struct Reducer<P, Acc> {
    /// The matcher selecting the step for each instance
    matcher: Matcher<P, Step<Acc>>,
}

impl<P, Acc> Reducer<P, Acc> {
    /// Create a reducer from a matcher returning steps
    #[inline]
    pub fn new(matcher: Matcher<P, Step<Acc>>) -> Reducer<P, Acc> {
        Reducer { matcher }
    }
    /// Get the matcher underlying this reducer
    #[inline]
    pub fn matcher(&self) -> &Matcher<P, Step<Acc>> {
        &self.matcher
    }
    /// Update an accumulator with the next instance
    pub fn apply(&self, acc: Acc, next: &Instance<P>) -> Result<Acc, Error> {
        let step = self.matcher.apply(next)?;
        Ok(step(acc))
    }
    /// Fold a sequence of instances into an accumulator, from left to right
    ///
    /// Stops at the first instance which cannot be dispatched.
    pub fn fold<'a, I>(&self, init: Acc, instances: I) -> Result<Acc, Error>
    where
        I: IntoIterator<Item = &'a Instance<P>>,
        P: 'a,
    {
        instances
            .into_iter()
            .try_fold(init, |acc, next| self.apply(acc, next))
    }
}

impl<P, Acc> Debug for Reducer<P, Acc> {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        fmt.debug_struct("Reducer")
            .field("matcher", &self.matcher)
            .finish()
    }
}
