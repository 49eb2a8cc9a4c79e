/*!
Variants, acting as the constructor, membership test and checked unwrap for their instances
*/
use crate::error::Error;
use crate::instance::Instance;
use crate::registry::Tag;
use crate::{debug_from_display, quick_display};
use tracing::debug;

/// A single variant of a union
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Variant {
    /// The tag given to this variant's instances
    tag: Tag,
}

debug_from_display!(Variant);
quick_display!(Variant, s, fmt => write!(fmt, "{}", s.tag));

impl Variant {
    /// Create the variant corresponding to a tag
    #[inline]
    pub(crate) fn new(tag: Tag) -> Variant {
        Variant { tag }
    }
    /// Get the name of this variant
    #[inline]
    pub fn name(&self) -> &str {
        self.tag.name()
    }
    /// Get the index of this variant in its union's declaration
    #[inline]
    pub fn index(&self) -> usize {
        self.tag.index()
    }
    /// Get the tag of this variant
    #[inline]
    pub fn tag(&self) -> &Tag {
        &self.tag
    }
    /// Construct an instance of this variant from a payload
    #[inline]
    pub fn construct<P>(&self, payload: P) -> Instance<P> {
        Instance::tagged(self.tag.clone(), payload)
    }
    /// Check whether an instance belongs to this variant
    #[inline]
    pub fn is<P>(&self, instance: &Instance<P>) -> bool {
        instance.tag() == Some(&self.tag)
    }
    /// Check whether an instance belongs to this variant and its payload satisfies a predicate
    ///
    /// The predicate is only called on instances of this variant.
    #[inline]
    pub fn is_with<P, F>(&self, instance: &Instance<P>, predicate: F) -> bool
    where
        F: FnOnce(&P) -> bool,
    {
        self.is(instance) && predicate(instance.payload())
    }
    /// Get the payload of an instance of this variant
    ///
    /// Fails on instances of any other variant, or carrying no tag of this union.
    pub fn unbox<'a, P>(&self, instance: &'a Instance<P>) -> Result<&'a P, Error> {
        if self.is(instance) {
            Ok(instance.payload())
        } else {
            Err(self.mismatch(instance.tag()))
        }
    }
    /// Take the payload of an instance of this variant
    pub fn unbox_into<P>(&self, instance: Instance<P>) -> Result<P, Error> {
        if self.is(&instance) {
            Ok(instance.into_payload())
        } else {
            Err(self.mismatch(instance.tag()))
        }
    }
    fn mismatch(&self, found: Option<&Tag>) -> Error {
        let found = found
            .filter(|tag| tag.is_sibling(&self.tag))
            .map(|tag| tag.name().to_owned());
        debug!(expected = self.name(), ?found, "unboxed instance of another variant");
        Error::TypeMismatch {
            expected: self.name().to_owned(),
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::registry::Registry;
    use elysees::Arc;
    use pretty_assertions::assert_eq;

    fn variants(names: &[&str]) -> Vec<Variant> {
        let registry = Arc::new(Registry::build(names).unwrap());
        (0..names.len())
            .map(|ix| Variant::new(Tag::new(&registry, ix).unwrap()))
            .collect()
    }

    #[test]
    fn construction_and_unboxing() {
        let v = variants(&["A", "B"]);
        let (a, b) = (&v[0], &v[1]);
        let x = a.construct(String::from("payload"));
        assert_eq!(a.name(), "A");
        assert_eq!(b.index(), 1);
        assert!(a.is(&x));
        assert!(!b.is(&x));
        assert_eq!(a.unbox(&x), Ok(&String::from("payload")));
        assert_eq!(
            b.unbox(&x),
            Err(Error::TypeMismatch {
                expected: "B".into(),
                found: Some("A".into())
            })
        );
        assert_eq!(b.unbox(&x).unwrap_err().kind(), ErrorKind::TypeMismatch);
        assert_eq!(a.unbox_into(x.clone()), Ok(String::from("payload")));
        assert!(b.unbox_into(x).is_err());
    }

    #[test]
    fn predicates_only_see_own_payloads() {
        let v = variants(&["A", "B"]);
        let (a, b) = (&v[0], &v[1]);
        let x = a.construct(3);
        assert!(a.is_with(&x, |p| *p == 3));
        assert!(!a.is_with(&x, |p| *p == 4));
        assert!(!b.is_with(&x, |_| panic!("called on a foreign instance")));
    }

    #[test]
    fn foreign_instances_are_not_members() {
        let left = variants(&["A"]);
        let right = variants(&["A"]);
        let x = left[0].construct(());
        assert!(left[0].is(&x));
        assert!(!right[0].is(&x));
        assert!(!left[0].is(&Instance::untagged(())));
        assert_eq!(
            right[0].unbox(&x),
            Err(Error::TypeMismatch {
                expected: "A".into(),
                found: None
            })
        );
    }
}
