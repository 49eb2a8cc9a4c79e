/*!
Case analysis over the instances of a union

A [`Cases`] set maps [`Key`]s to [`Handler`]s. It is checked against a union *once*, when it is turned
into a [`Matcher`]: every key must name a variant of the union or be a placeholder, every handler
must be callable with what its key dispatches, and every variant must be covered, either by its own
case or by the default case `_`. The resulting matcher can then be applied to any number of
instances without further checks.

# Placeholders
- `_` handles every variant without a case of its own. It may take either the payload or, when given
  as a [`Handler::Raw`], the whole instance.
- `__` handles instances carrying no tag of the union at all, and is always given the whole instance.
*/
use crate::error::Error;
use crate::instance::Instance;
use crate::prettyprinter::tokens::{DEFAULT_CASE, KEYWORD_CASE, UNTAGGED_CASE};
use crate::union::Union;
use crate::{debug_from_display, quick_display};
use smallvec::SmallVec;
use std::fmt::{self, Debug, Formatter};
use tracing::{debug, trace};

pub mod map;
pub mod reduce;

/// The key of a case
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum Key {
    /// The case for a given variant
    Variant(String),
    /// The default case, `_`
    Default,
    /// The untagged case, `__`
    Untagged,
}

impl Key {
    /// Get the textual form of this key
    pub fn as_str(&self) -> &str {
        match self {
            Key::Variant(name) => name.as_str(),
            Key::Default => DEFAULT_CASE,
            Key::Untagged => UNTAGGED_CASE,
        }
    }
    /// Whether this key is a placeholder
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        !matches!(self, Key::Variant(_))
    }
}

impl Key {
    /// Get the placeholder spelled by a key, if any
    fn placeholder(key: &str) -> Option<Key> {
        match key {
            DEFAULT_CASE => Some(Key::Default),
            UNTAGGED_CASE => Some(Key::Untagged),
            _ => None,
        }
    }
}

impl From<&str> for Key {
    /// Parse a key, recognizing the placeholders `_` and `__`
    fn from(key: &str) -> Key {
        Key::placeholder(key).unwrap_or_else(|| Key::Variant(key.to_owned()))
    }
}

impl From<String> for Key {
    fn from(key: String) -> Key {
        Key::placeholder(&key).unwrap_or(Key::Variant(key))
    }
}

debug_from_display!(Key);
quick_display!(Key, s, fmt => write!(fmt, "{}", s.as_str()));

/// A handler taking the payload of an instance, along with an extra argument
pub type PayloadFn<P, R, A> = Box<dyn Fn(&P, &A) -> R + Send + Sync>;

/// A handler taking a whole instance, along with an extra argument
pub type RawFn<P, R, A> = Box<dyn Fn(&Instance<P>, &A) -> R + Send + Sync>;

/// The handler of a case
pub enum Handler<P, R, A = ()> {
    /// A handler called with the payload of the matched instance
    Payload(PayloadFn<P, R, A>),
    /// A handler called with the matched instance itself
    Raw(RawFn<P, R, A>),
}

impl<P, R, A> Handler<P, R, A> {
    /// Create a handler called with the payload of the matched instance
    pub fn payload<F>(handler: F) -> Handler<P, R, A>
    where
        F: Fn(&P, &A) -> R + Send + Sync + 'static,
    {
        Handler::Payload(Box::new(handler))
    }
    /// Create a handler called with the matched instance itself
    pub fn raw<F>(handler: F) -> Handler<P, R, A>
    where
        F: Fn(&Instance<P>, &A) -> R + Send + Sync + 'static,
    {
        Handler::Raw(Box::new(handler))
    }
    /// Call this handler on an instance
    #[inline]
    fn call(&self, instance: &Instance<P>, extra: &A) -> R {
        match self {
            Handler::Payload(handler) => handler(instance.payload(), extra),
            Handler::Raw(handler) => handler(instance, extra),
        }
    }
}

impl<P, R, A> Debug for Handler<P, R, A> {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Handler::Payload(_) => write!(fmt, "Handler::Payload(..)"),
            Handler::Raw(_) => write!(fmt, "Handler::Raw(..)"),
        }
    }
}

/// A set of cases, not yet checked against any union
///
/// Cases are extra-argument free by default; use [`Cases::with_extra`] to build cases whose handlers
/// take an extra argument of type `A`.
pub struct Cases<P, R, A = ()> {
    /// The cases, in insertion order
    entries: Vec<(Key, Handler<P, R, A>)>,
}

impl<P, R> Cases<P, R> {
    /// Create a new, empty set of cases
    pub fn new() -> Cases<P, R> {
        Cases {
            entries: Vec::new(),
        }
    }
}

impl<P, R, A> Default for Cases<P, R, A> {
    fn default() -> Cases<P, R, A> {
        Cases {
            entries: Vec::new(),
        }
    }
}

impl<P, R, A> Cases<P, R, A> {
    /// Create a new, empty set of cases whose handlers take an extra argument
    pub fn with_extra() -> Cases<P, R, A> {
        Self::default()
    }
    /// Add a case
    ///
    /// Adding the same key twice is only reported when the cases are checked.
    pub fn insert<K: Into<Key>>(mut self, key: K, handler: Handler<P, R, A>) -> Cases<P, R, A> {
        self.entries.push((key.into(), handler));
        self
    }
    /// Iterate over the keys of these cases, in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &Key> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }
    /// Get the number of cases in this set
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    /// Whether this set of cases is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P: 'static, R: 'static, A: 'static> Cases<P, R, A> {
    /// Add a case taking the payload of an instance
    pub fn on<K, F>(self, key: K, handler: F) -> Cases<P, R, A>
    where
        K: Into<Key>,
        F: Fn(&P) -> R + Send + Sync + 'static,
    {
        self.insert(key, Handler::payload(move |payload, _| handler(payload)))
    }
    /// Add a case taking the payload of an instance and the extra argument
    pub fn on_with<K, F>(self, key: K, handler: F) -> Cases<P, R, A>
    where
        K: Into<Key>,
        F: Fn(&P, &A) -> R + Send + Sync + 'static,
    {
        self.insert(key, Handler::payload(handler))
    }
    /// Add the default case `_`, taking the payload of an instance
    pub fn otherwise<F>(self, handler: F) -> Cases<P, R, A>
    where
        F: Fn(&P) -> R + Send + Sync + 'static,
    {
        self.on(Key::Default, handler)
    }
    /// Add the untagged case `__`, taking the whole (untagged) instance
    pub fn untagged<F>(self, handler: F) -> Cases<P, R, A>
    where
        F: Fn(&Instance<P>) -> R + Send + Sync + 'static,
    {
        self.insert(Key::Untagged, Handler::raw(move |instance, _| handler(instance)))
    }
    /// Add the untagged case `__`, taking the whole (untagged) instance and the extra argument
    pub fn untagged_with<F>(self, handler: F) -> Cases<P, R, A>
    where
        F: Fn(&Instance<P>, &A) -> R + Send + Sync + 'static,
    {
        self.insert(Key::Untagged, Handler::raw(handler))
    }
}

impl<P, R, A> Debug for Cases<P, R, A> {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        fmt.debug_map()
            .entries(self.entries.iter().map(|(key, handler)| (key, handler)))
            .finish()
    }
}

/// The number of per-variant cases a matcher stores before allocating
const INLINE_CASES: usize = 8;

/// A set of cases checked against a union, ready to be applied to its instances
pub struct Matcher<P, R, A = ()> {
    /// The union matched on
    union: Union,
    /// The case for each variant, by index
    arms: SmallVec<[Option<PayloadFn<P, R, A>>; INLINE_CASES]>,
    /// The default case, if any
    default: Option<Handler<P, R, A>>,
    /// The untagged case, if any
    untagged: Option<RawFn<P, R, A>>,
}

impl<P, R, A> Matcher<P, R, A> {
    /// Check a set of cases against a union
    pub fn new(union: &Union, cases: Cases<P, R, A>) -> Result<Matcher<P, R, A>, Error> {
        Self::build(union, cases).map_err(|err| {
            debug!(union = %union, error = %err, "rejected case set");
            err
        })
    }
    fn build(union: &Union, cases: Cases<P, R, A>) -> Result<Matcher<P, R, A>, Error> {
        let mut arms: SmallVec<[Option<PayloadFn<P, R, A>>; INLINE_CASES]> =
            (0..union.len()).map(|_| None).collect();
        let mut default = None;
        let mut untagged = None;
        for (key, handler) in cases.entries {
            match key {
                Key::Variant(name) => {
                    let ix = match union.registry().index_of(&name) {
                        Some(ix) => ix,
                        None => return Err(Error::UnknownCase(name)),
                    };
                    if arms[ix].is_some() {
                        return Err(Error::DuplicateCase(name));
                    }
                    match handler {
                        Handler::Payload(handler) => arms[ix] = Some(handler),
                        Handler::Raw(_) => return Err(Error::MalformedHandler(name)),
                    }
                }
                Key::Default => {
                    if default.is_some() {
                        return Err(Error::DuplicateCase(DEFAULT_CASE.to_owned()));
                    }
                    default = Some(handler)
                }
                Key::Untagged => {
                    if untagged.is_some() {
                        return Err(Error::DuplicateCase(UNTAGGED_CASE.to_owned()));
                    }
                    match handler {
                        Handler::Raw(handler) => untagged = Some(handler),
                        Handler::Payload(_) => {
                            return Err(Error::MalformedHandler(UNTAGGED_CASE.to_owned()))
                        }
                    }
                }
            }
        }
        if default.is_none() {
            let missing: Vec<String> = union
                .variants()
                .iter()
                .zip(arms.iter())
                .filter(|(_, arm)| arm.is_none())
                .map(|(variant, _)| variant.name().to_owned())
                .collect();
            if !missing.is_empty() {
                return Err(Error::NonExhaustive { missing });
            }
        }
        Ok(Matcher {
            union: union.clone(),
            arms,
            default,
            untagged,
        })
    }
    /// Get the union this matcher matches on
    #[inline]
    pub fn union(&self) -> &Union {
        &self.union
    }
    /// Whether this matcher has a default case
    #[inline]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
    /// Whether this matcher has an untagged case
    #[inline]
    pub fn has_untagged(&self) -> bool {
        self.untagged.is_some()
    }
    /// Apply this matcher to an instance, passing an extra argument to the selected handler
    pub fn apply_with(&self, instance: &Instance<P>, extra: &A) -> Result<R, Error> {
        let variant = match self.union.variant_of(instance) {
            Some(variant) => variant,
            None => {
                trace!(union = %self.union, "dispatching untagged instance");
                return match &self.untagged {
                    Some(handler) => Ok(handler(instance, extra)),
                    None => Err(Error::Untagged),
                };
            }
        };
        trace!(variant = variant.name(), "dispatching instance");
        if let Some(Some(arm)) = self.arms.get(variant.index()) {
            return Ok(arm(instance.payload(), extra));
        }
        match &self.default {
            Some(handler) => Ok(handler.call(instance, extra)),
            // Ruled out by construction
            None => Err(Error::NonExhaustive {
                missing: vec![variant.name().to_owned()],
            }),
        }
    }
}

impl<P, R> Matcher<P, R> {
    /// Apply this matcher to an instance
    #[inline]
    pub fn apply(&self, instance: &Instance<P>) -> Result<R, Error> {
        self.apply_with(instance, &())
    }
}

impl<P, R, A> Debug for Matcher<P, R, A> {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        fmt.debug_struct("Matcher")
            .field("union", &self.union)
            .field(
                "cases",
                &self
                    .union
                    .variants()
                    .iter()
                    .zip(self.arms.iter())
                    .filter(|(_, arm)| arm.is_some())
                    .map(|(variant, _)| variant.name())
                    .collect::<Vec<_>>(),
            )
            .field("default", &self.default)
            .field("untagged", &self.untagged.is_some())
            .finish()
    }
}

impl<P, R, A> fmt::Display for Matcher<P, R, A> {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}{}", KEYWORD_CASE, self.union)
    }
}
