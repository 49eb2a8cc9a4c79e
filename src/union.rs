/*!
Tagged union types
*/
use crate::case::map::{retag, MapCase};
use crate::case::reduce::{Reducer, Step};
use crate::case::{Cases, Matcher};
use crate::error::Error;
use crate::instance::Instance;
use crate::registry::{Registry, Tag};
use crate::variant::Variant;
use crate::{debug_from_display, display_pretty};
use elysees::Arc;
#[cfg_attr(feature = "prettyprinter", allow(unused_imports))]
use itertools::Itertools;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, Index};
use tracing::debug;

/// A tagged union type, declared from a list of variant names
///
/// A union is cheap to clone, and is only ever equal to its own clones: two unions declared with the
/// same names are still distinct types.
#[derive(Clone)]
pub struct Union {
    /// The registry of this union's variants
    registry: Arc<Registry>,
    /// The variants of this union, in declaration order
    variants: Box<[Variant]>,
}

impl Union {
    /// Declare a new union from a list of variant names
    pub fn define<I, S>(names: I) -> Result<Union, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let registry = Arc::new(Registry::build(names)?);
        let variants = (0..registry.len())
            .filter_map(|ix| Tag::new(&registry, ix))
            .map(Variant::new)
            .collect();
        let union = Union { registry, variants };
        debug!(union = %union, "defined union");
        Ok(union)
    }
    /// Get the registry of this union
    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
    /// Get the variants of this union, in declaration order
    #[inline]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }
    /// Get the variant of this union with a given name, if any
    #[inline]
    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.registry
            .index_of(name)
            .and_then(|ix| self.variants.get(ix))
    }
    /// Get the number of variants of this union
    #[inline]
    pub fn len(&self) -> usize {
        self.variants.len()
    }
    /// Whether this union has no variants at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
    /// Get the variant of this union an instance belongs to, if any
    #[inline]
    pub fn variant_of<P>(&self, instance: &Instance<P>) -> Option<&Variant> {
        instance
            .tag()
            .filter(|tag| tag.belongs_to(&self.registry))
            .and_then(|tag| self.variants.get(tag.index()))
    }
    /// Check whether an instance carries any tag of this union
    #[inline]
    pub fn is<P>(&self, instance: &Instance<P>) -> bool {
        self.variant_of(instance).is_some()
    }
    /// Check a set of cases against this union, yielding a reusable matcher
    pub fn case<P, R, A>(&self, cases: Cases<P, R, A>) -> Result<Matcher<P, R, A>, Error> {
        Matcher::new(self, cases)
    }
    /// Check a set of cases against this union, and apply them to a single instance
    pub fn case_of<P, R>(&self, cases: Cases<P, R>, instance: &Instance<P>) -> Result<R, Error> {
        self.case(cases)?.apply(instance)
    }
    /// Check a set of cases against this union, and apply them to a single instance and extra argument
    pub fn case_of_with<P, R, A>(
        &self,
        cases: Cases<P, R, A>,
        instance: &Instance<P>,
        extra: &A,
    ) -> Result<R, Error> {
        self.case(cases)?.apply_with(instance, extra)
    }
    /// Check a set of payload transformations against this union, yielding a matcher which re-tags
    /// each result with the variant it came from
    ///
    /// Variants without a case are passed through unchanged. The placeholders `_` and `__` are
    /// rejected.
    pub fn map_case<P, A>(&self, cases: Cases<P, P, A>) -> Result<MapCase<P, A>, Error>
    where
        P: Clone + 'static,
        A: 'static,
    {
        self.case(retag(self, cases)?)
    }
    /// Check a set of payload transformations against this union, and apply them to a single instance
    pub fn map_case_of<P>(
        &self,
        cases: Cases<P, P>,
        instance: &Instance<P>,
    ) -> Result<Instance<P>, Error>
    where
        P: Clone + 'static,
    {
        self.map_case(cases)?.apply(instance)
    }
    /// Check a set of payload transformations against this union, and apply them to a single instance
    /// and extra argument
    pub fn map_case_of_with<P, A>(
        &self,
        cases: Cases<P, P, A>,
        instance: &Instance<P>,
        extra: &A,
    ) -> Result<Instance<P>, Error>
    where
        P: Clone + 'static,
        A: 'static,
    {
        self.map_case(cases)?.apply_with(instance, extra)
    }
    /// Check a set of cases returning accumulator steps against this union, yielding a reducer
    pub fn reducer<P, Acc>(&self, cases: Cases<P, Step<Acc>>) -> Result<Reducer<P, Acc>, Error> {
        self.case(cases).map(Reducer::new)
    }
}

impl<'a> Index<&'a str> for Union {
    type Output = Variant;
    /// Get the variant with a given name, panicking if there is none
    fn index(&self, name: &'a str) -> &Variant {
        match self.variant(name) {
            Some(variant) => variant,
            None => panic!("Union {} has no variant named {:?}", self, name),
        }
    }
}

impl PartialEq for Union {
    #[inline]
    fn eq(&self, other: &Union) -> bool {
        Arc::ptr_eq(&self.registry, &other.registry)
    }
}

impl Eq for Union {}

impl Hash for Union {
    #[inline]
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        std::ptr::hash(self.registry.deref(), hasher)
    }
}

debug_from_display!(Union);
display_pretty!(Union, s, fmt => write!(fmt, "{}", s.registry.names().format(" | ")));

#[cfg(feature = "prettyprinter")]
mod prettyprint_impl {
    use super::*;
    use crate::prettyprinter::tokens::KEYWORD_UNION;
    use crate::prettyprinter::{prettyprint_list, PrettyPrint};
    use std::fmt::{self, Formatter};

    impl PrettyPrint for Union {
        fn prettyprint(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
            write!(fmt, "{}", KEYWORD_UNION)?;
            prettyprint_list(fmt, self.registry.names())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unions_expose_one_variant_per_name() {
        let u = Union::define(vec!["Loading", "Success", "Failure"]).unwrap();
        assert_eq!(u.len(), 3);
        assert!(!u.is_empty());
        assert_eq!(
            u.variants().iter().map(Variant::name).collect::<Vec<_>>(),
            vec!["Loading", "Success", "Failure"]
        );
        assert_eq!(u["Success"].index(), 1);
        assert_eq!(u.variant("Success"), Some(&u["Success"]));
        assert_eq!(u.variant("Pending"), None);
        assert_eq!(u.registry().index_of("Failure"), Some(2));
    }

    #[test]
    fn invalid_declarations_fail_entirely() {
        assert_eq!(
            Union::define(&["A", "A"]).unwrap_err(),
            Error::DuplicateVariant("A".into())
        );
        assert_eq!(
            Union::define(&["A", "__"]).unwrap_err(),
            Error::ReservedVariantName("__".into())
        );
    }

    #[test]
    fn membership_is_per_union() {
        let u = Union::define(&["A", "B"]).unwrap();
        let twin = Union::define(&["A", "B"]).unwrap();
        let x = u["B"].construct(());
        assert!(u.is(&x));
        assert!(!twin.is(&x));
        assert!(!u.is(&Instance::untagged(())));
        assert_eq!(u.variant_of(&x), Some(&u["B"]));
        assert_eq!(twin.variant_of(&x), None);
        assert_eq!(u, u.clone());
        assert_ne!(u, twin);
        assert_ne!(u["A"], twin["A"]);
    }

    #[test]
    fn immediate_case_analysis() {
        let u = Union::define(&["A", "B"]).unwrap();
        let x = u["A"].construct(4);
        assert_eq!(
            u.case_of(Cases::new().on("A", |v: &i32| v + 1).on("B", |v: &i32| v - 1), &x),
            Ok(5)
        );
        assert_eq!(
            u.case_of_with(
                Cases::with_extra().otherwise(|v: &i32| *v).on_with("A", |v: &i32, k: &i32| v * k),
                &x,
                &3
            ),
            Ok(12)
        );
        let y = u
            .map_case_of(Cases::new().on("A", |v: &i32| -v), &x)
            .unwrap();
        assert_eq!(u["A"].unbox(&y), Ok(&-4));
        let z = u
            .map_case_of_with(
                Cases::with_extra().on_with("A", |v: &i32, k: &i32| v * k),
                &x,
                &3,
            )
            .unwrap();
        assert_eq!(u["A"].unbox(&z), Ok(&12));
        let b = u["B"].construct(7);
        assert_eq!(
            u.map_case_of_with(
                Cases::with_extra().on_with("A", |v: &i32, k: &i32| v * k),
                &b,
                &3
            ),
            Ok(b.clone())
        );
        assert_eq!(
            u.map_case_of_with(
                Cases::with_extra().on_with("C", |v: &i32, k: &i32| v * k),
                &x,
                &3
            ),
            Err(Error::UnknownCase("C".into()))
        );
        // Definition-time errors win over dispatch, even for one-off cases
        assert_eq!(
            u.case_of(Cases::new().on("A", |v: &i32| *v), &Instance::untagged(0)),
            Err(Error::NonExhaustive {
                missing: vec!["B".into()]
            })
        );
    }

    #[test]
    #[should_panic]
    fn indexing_unknown_variants_panics() {
        let u = Union::define(&["A"]).unwrap();
        let _ = &u["B"];
    }

    #[test]
    #[cfg(feature = "prettyprinter")]
    fn unions_are_prettyprinted() {
        let u = Union::define(&["Loading", "Success", "Failure"]).unwrap();
        assert_eq!(u.to_string(), "#union[Loading Success Failure]");
        assert_eq!(format!("{:?}", u), "#union[Loading Success Failure]");
        assert_eq!(u["Success"].to_string(), "#tag(Success)");
        let matcher = u.case(Cases::new().otherwise(|_: &()| ())).unwrap();
        assert_eq!(matcher.to_string(), "#case#union[Loading Success Failure]");
    }
}
