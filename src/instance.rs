/*!
Instances: payloads tagged with (at most) one variant
*/
use crate::registry::Tag;
use std::fmt::{self, Debug, Display, Formatter};

/// A payload, together with the tag of the variant it was constructed as, if any
///
/// Instances are immutable: they can only be created by a variant's constructor (or as untagged
/// values), and their payload can only be read.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Instance<P> {
    /// The tag of this instance, if any
    tag: Option<Tag>,
    /// The payload of this instance
    payload: P,
}

impl<P> Instance<P> {
    /// Tag a payload
    #[inline]
    pub(crate) fn tagged(tag: Tag, payload: P) -> Instance<P> {
        Instance {
            tag: Some(tag),
            payload,
        }
    }
    /// Create an instance carrying no tag at all
    #[inline]
    pub fn untagged(payload: P) -> Instance<P> {
        Instance { tag: None, payload }
    }
    /// Get the tag of this instance, if any
    #[inline]
    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }
    /// Whether this instance carries a tag of any union
    #[inline]
    pub fn is_tagged(&self) -> bool {
        self.tag.is_some()
    }
    /// Get the payload of this instance, whatever its tag
    ///
    /// Prefer [`Variant::unbox`](crate::Variant::unbox), which checks the tag.
    #[inline]
    pub fn payload(&self) -> &P {
        &self.payload
    }
    /// Take the payload of this instance, whatever its tag
    #[inline]
    pub fn into_payload(self) -> P {
        self.payload
    }
    /// Split this instance into its tag and payload
    #[inline]
    pub fn into_parts(self) -> (Option<Tag>, P) {
        (self.tag, self.payload)
    }
}

impl<P> From<P> for Instance<P> {
    #[inline]
    fn from(payload: P) -> Instance<P> {
        Instance::untagged(payload)
    }
}

impl<P: Debug> Display for Instance<P> {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        #[cfg(feature = "prettyprinter")]
        {
            crate::prettyprinter::PrettyPrint::prettyprint(self, fmt)
        }
        #[cfg(not(feature = "prettyprinter"))]
        {
            match &self.tag {
                Some(tag) => write!(fmt, "{}({:?})", tag.name(), self.payload),
                None => write!(fmt, "({:?})", self.payload),
            }
        }
    }
}

#[cfg(feature = "prettyprinter")]
mod prettyprint_impl {
    use super::*;
    use crate::prettyprinter::tokens::{KEYWORD_UNTAGGED, SEXPR_CLOSE, SEXPR_OPEN};
    use crate::prettyprinter::PrettyPrint;

    impl<P: Debug> PrettyPrint for Instance<P> {
        fn prettyprint(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
            let head = self.tag.as_ref().map(Tag::name).unwrap_or(KEYWORD_UNTAGGED);
            write!(
                fmt,
                "{}{}{:?}{}",
                head, SEXPR_OPEN, self.payload, SEXPR_CLOSE
            )
        }
    }
}
