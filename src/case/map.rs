/*!
Case analysis which stays inside the union: every result is re-tagged with the variant it came from
*/
use super::{Cases, Handler, Key, Matcher};
use crate::error::Error;
use crate::instance::Instance;
use crate::union::Union;
use tracing::debug;

/// A matcher mapping instances of a union to instances of the same variant
pub type MapCase<P, A = ()> = Matcher<P, Instance<P>, A>;

/// Derive the cases of a [`MapCase`] from cases mapping payloads to payloads
///
/// Each handler's result is wrapped by its own variant's constructor, and variants without a case
/// are passed through unchanged by an implicit default case. Placeholders may not be given
/// explicitly, since `_` is supplied here and `__` has no variant to re-tag with.
pub(crate) fn retag<P, A>(
    union: &Union,
    cases: Cases<P, P, A>,
) -> Result<Cases<P, Instance<P>, A>, Error>
where
    P: Clone + 'static,
    A: 'static,
{
    if let Some(placeholder) = cases.keys().find(|key| key.is_placeholder()) {
        let err = Error::ReservedCase(placeholder.as_str().to_owned());
        debug!(union = %union, error = %err, "rejected case set");
        return Err(err);
    }
    let mut retagged: Cases<P, Instance<P>, A> = Cases::default();
    for (key, handler) in cases.entries {
        let name = match key {
            Key::Variant(name) => name,
            placeholder => return Err(Error::ReservedCase(placeholder.as_str().to_owned())),
        };
        let variant = match union.variant(&name) {
            Some(variant) => variant.clone(),
            None => return Err(Error::UnknownCase(name)),
        };
        let handler = match handler {
            Handler::Payload(handler) => handler,
            Handler::Raw(_) => return Err(Error::MalformedHandler(name)),
        };
        retagged = retagged.insert(
            name,
            Handler::payload(move |payload, extra| variant.construct(handler(payload, extra))),
        );
    }
    Ok(retagged.insert(
        Key::Default,
        Handler::raw(|instance: &Instance<P>, _| instance.clone()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn remote() -> Union {
        Union::define(&["Loading", "Success", "Failure"]).unwrap()
    }

    #[test]
    fn handled_variants_are_retagged() {
        let u = remote();
        let double = u.map_case(Cases::new().on("Success", |v: &i64| v * 2)).unwrap();
        let x = double.apply(&u["Success"].construct(3)).unwrap();
        assert!(u["Success"].is(&x));
        assert_eq!(u["Success"].unbox(&x), Ok(&6));
    }

    #[test]
    fn unhandled_variants_pass_through() {
        let u = remote();
        let double = u.map_case(Cases::new().on("Success", |v: &i64| v * 2)).unwrap();
        let failure = u["Failure"].construct(3);
        assert_eq!(double.apply(&failure), Ok(failure.clone()));
        assert!(u["Failure"].is(&double.apply(&failure).unwrap()));
        assert!(double.has_default());
        assert!(!double.has_untagged());
    }

    #[test]
    fn untagged_instances_cannot_be_mapped() {
        let u = remote();
        let double = u.map_case(Cases::new().on("Success", |v: &i64| v * 2)).unwrap();
        assert_eq!(double.apply(&Instance::untagged(3)), Err(Error::Untagged));
    }

    #[test]
    fn placeholders_are_reserved() {
        let u = remote();
        let default = u
            .map_case(Cases::new().otherwise(|v: &i64| *v))
            .unwrap_err();
        assert_eq!(default, Error::ReservedCase("_".into()));
        assert_eq!(default.kind(), ErrorKind::ReservedToken);
        let untagged = u
            .map_case(Cases::new().untagged(|raw: &Instance<i64>| *raw.payload()))
            .unwrap_err();
        assert_eq!(untagged, Error::ReservedCase("__".into()));
    }

    #[test]
    fn placeholders_are_reported_before_other_mistakes() {
        let u = remote();
        assert_eq!(
            u.map_case(
                Cases::new()
                    .on("Pending", |v: &i64| *v)
                    .otherwise(|v: &i64| *v)
            )
            .unwrap_err(),
            Error::ReservedCase("_".into())
        );
        assert_eq!(
            u.map_case(
                Cases::new()
                    .insert("Success", Handler::raw(|raw: &Instance<i64>, _| *raw.payload()))
                    .untagged(|raw: &Instance<i64>| *raw.payload())
            )
            .unwrap_err(),
            Error::ReservedCase("__".into())
        );
        assert_eq!(
            u.map_case(
                Cases::new()
                    .on("Success", |v: &i64| *v)
                    .on("Success", |v: &i64| *v)
                    .untagged(|raw: &Instance<i64>| *raw.payload())
            )
            .unwrap_err(),
            Error::ReservedCase("__".into())
        );
    }

    #[test]
    fn other_mistakes_are_still_caught() {
        let u = remote();
        assert_eq!(
            u.map_case(Cases::new().on("Pending", |v: &i64| *v)).unwrap_err(),
            Error::UnknownCase("Pending".into())
        );
        assert_eq!(
            u.map_case(
                Cases::new()
                    .on("Success", |v: &i64| *v)
                    .on("Success", |v: &i64| *v)
            )
            .unwrap_err(),
            Error::DuplicateCase("Success".into())
        );
    }

    #[test]
    fn extra_arguments_reach_mapped_handlers() {
        let u = remote();
        let shift = u
            .map_case(Cases::with_extra().on_with("Loading", |v: &i64, by: &i64| v + by))
            .unwrap();
        let x = shift.apply_with(&u["Loading"].construct(1), &10).unwrap();
        assert_eq!(u["Loading"].unbox(&x), Ok(&11));
    }
}
