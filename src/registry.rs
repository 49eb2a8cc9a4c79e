/*!
Variant registries, mapping the variant names of a union to their tags and back

A registry is built once per union and never modified afterwards. Tags are scoped to the registry
which allocated them: two tags are equal only if they name the same variant of the *same* registry,
so unions declared with identical names never confuse each other's instances.
*/
use crate::error::Error;
use crate::prettyprinter::tokens::RESERVED;
use crate::{debug_from_display, display_pretty};
use ahash::RandomState;
use elysees::Arc;
use indexmap::IndexSet;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use tracing::debug;

/// The variant names declared by a union, in declaration order
#[derive(Debug, Clone)]
pub struct Registry {
    /// The declared names, each at its variant's index
    names: IndexSet<Box<str>, RandomState>,
}

impl Registry {
    /// Validate a list of variant names and build a registry for them
    ///
    /// Fails if a name is empty, is one of the placeholders `_` and `__`, or is declared twice.
    pub fn build<I, S>(names: I) -> Result<Registry, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names.into_iter();
        let mut set = IndexSet::with_capacity_and_hasher(names.size_hint().0, RandomState::new());
        for name in names {
            let name = name.as_ref();
            let err = if name.is_empty() {
                Error::EmptyVariantName
            } else if RESERVED.iter().any(|reserved| *reserved == name) {
                Error::ReservedVariantName(name.to_owned())
            } else if set.contains(name) {
                Error::DuplicateVariant(name.to_owned())
            } else {
                set.insert(Box::from(name));
                continue;
            };
            debug!(error = %err, "rejected variant declaration");
            return Err(err);
        }
        Ok(Registry { names: set })
    }
    /// Get the number of variants in this registry
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }
    /// Check whether this registry declares no variants at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
    /// Get the name of the variant at a given index, if any
    #[inline]
    pub fn name(&self, ix: usize) -> Option<&str> {
        self.names.get_index(ix).map(Deref::deref)
    }
    /// Get the index of the variant with a given name, if any
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.get_full(name).map(|(ix, _)| ix)
    }
    /// Check whether this registry declares a variant with a given name
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
    /// Iterate over the variant names of this registry, in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(Deref::deref)
    }
}

impl PartialEq for Registry {
    /// Registries are equal if they declare the same names in the same order. Note that this does
    /// *not* make their tags equal.
    fn eq(&self, other: &Registry) -> bool {
        self.names.iter().eq(other.names.iter())
    }
}

impl Eq for Registry {}

/// The identity of a single variant within a given registry
#[derive(Clone, Eq)]
pub struct Tag {
    /// The registry this tag was allocated by
    registry: Arc<Registry>,
    /// The index of this tag's variant
    ix: usize,
}

impl Tag {
    /// Get the tag for the variant at a given index of a registry, if any
    pub fn new(registry: &Arc<Registry>, ix: usize) -> Option<Tag> {
        if ix < registry.len() {
            Some(Tag {
                registry: registry.clone(),
                ix,
            })
        } else {
            None
        }
    }
    /// Get the registry which allocated this tag
    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
    /// Get the index of this tag's variant within its registry
    #[inline]
    pub fn index(&self) -> usize {
        self.ix
    }
    /// Get the name of this tag's variant
    #[inline]
    pub fn name(&self) -> &str {
        self.registry.name(self.ix).unwrap_or_default()
    }
    /// Check whether this tag was allocated by a given registry
    #[inline]
    pub fn belongs_to(&self, registry: &Arc<Registry>) -> bool {
        Arc::ptr_eq(&self.registry, registry)
    }
    /// Check whether this tag was allocated by the same registry as another
    #[inline]
    pub fn is_sibling(&self, other: &Tag) -> bool {
        Arc::ptr_eq(&self.registry, &other.registry)
    }
}

impl PartialEq for Tag {
    #[inline]
    fn eq(&self, other: &Tag) -> bool {
        self.ix == other.ix && Arc::ptr_eq(&self.registry, &other.registry)
    }
}

impl Hash for Tag {
    #[inline]
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        std::ptr::hash(self.registry.deref(), hasher);
        self.ix.hash(hasher)
    }
}

debug_from_display!(Tag);
display_pretty!(Tag, s, fmt => write!(fmt, "{}", s.name()));

#[cfg(feature = "prettyprinter")]
mod prettyprint_impl {
    use super::*;
    use crate::prettyprinter::tokens::{KEYWORD_TAG, SEXPR_CLOSE, SEXPR_OPEN};
    use crate::prettyprinter::PrettyPrint;
    use std::fmt::{self, Formatter};

    impl PrettyPrint for Tag {
        fn prettyprint(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
            write!(
                fmt,
                "{}{}{}{}",
                KEYWORD_TAG,
                SEXPR_OPEN,
                self.name(),
                SEXPR_CLOSE
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn registries_map_names_both_ways() {
        let registry = Registry::build(&["Loading", "Success", "Failure"]).unwrap();
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
        assert_eq!(registry.index_of("Success"), Some(1));
        assert_eq!(registry.index_of("Pending"), None);
        assert_eq!(registry.name(2), Some("Failure"));
        assert_eq!(registry.name(3), None);
        assert!(registry.contains("Loading"));
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["Loading", "Success", "Failure"]
        );
    }

    #[test]
    fn invalid_names_are_rejected() {
        assert_eq!(
            Registry::build(&["A", "B", "A"]),
            Err(Error::DuplicateVariant("A".into()))
        );
        assert_eq!(
            Registry::build(&["A", "_"]),
            Err(Error::ReservedVariantName("_".into()))
        );
        assert_eq!(
            Registry::build(&["__", "A"]),
            Err(Error::ReservedVariantName("__".into()))
        );
        assert_eq!(Registry::build(&["A", ""]), Err(Error::EmptyVariantName));
        for names in &[&["A", "A"][..], &["_"][..], &[""][..]] {
            assert!(Registry::build(*names).unwrap_err().kind().is_validation());
        }
        assert_eq!(
            Registry::build(&["___"]).map(|r| r.len()),
            Ok(1),
            "only the exact placeholders are reserved"
        );
        assert_eq!(
            Registry::build(&["_"]).unwrap_err().kind(),
            ErrorKind::ReservedToken
        );
    }

    #[test]
    fn empty_registries_are_allowed() {
        let registry = Registry::build(Vec::<String>::new()).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.names().count(), 0);
    }

    #[test]
    fn tags_are_scoped_to_their_registry() {
        let left = Arc::new(Registry::build(&["A", "B"]).unwrap());
        let right = Arc::new(Registry::build(&["A", "B"]).unwrap());
        // Same names, same structure...
        assert_eq!(*left, *right);

        let left_a = Tag::new(&left, 0).unwrap();
        let left_b = Tag::new(&left, 1).unwrap();
        let right_a = Tag::new(&right, 0).unwrap();
        assert!(Tag::new(&left, 2).is_none());

        // ...but different identities
        assert_eq!(left_a, Tag::new(&left, 0).unwrap());
        assert_eq!(left_a, left_a.clone());
        assert_ne!(left_a, left_b);
        assert_ne!(left_a, right_a);
        assert_eq!(left_a.name(), right_a.name());

        assert!(left_a.belongs_to(&left));
        assert!(!right_a.belongs_to(&left));
        assert!(left_a.is_sibling(&left_b));
        assert!(!left_a.is_sibling(&right_a));
        assert_eq!(left_b.index(), 1);
        assert_eq!(left_b.registry().name(1), Some("B"));
    }

    #[test]
    #[cfg(feature = "prettyprinter")]
    fn tags_are_prettyprinted() {
        let registry = Arc::new(Registry::build(&["Loading", "Success"]).unwrap());
        let tag = Tag::new(&registry, 1).unwrap();
        assert_eq!(format!("{}", tag), "#tag(Success)");
        assert_eq!(format!("{:?}", tag), "#tag(Success)");
    }
}
