/*!
`tagged` provides tagged unions (sum types) whose set of variants is only known at runtime, e.g. when
it is assembled from configuration. A union is declared from a list of variant names; each variant
then acts as a constructor, a membership test and a checked unwrap, and case analysis over instances
is checked for exhaustiveness *when the case set is assembled*, rather than when it is first used.

```rust
use tagged::{Cases, Union};

let remote = Union::define(vec!["Loading", "Success", "Failure"]).unwrap();
let answer = remote["Success"].construct(42);

let matcher = remote
    .case(
        Cases::new()
            .on("Loading", |_: &i64| 0)
            .on("Success", |v: &i64| v + 1)
            .on("Failure", |_: &i64| -1),
    )
    .unwrap();
assert_eq!(matcher.apply(&answer), Ok(43));

// Forgetting a variant is caught before any instance is ever matched
let incomplete = remote.case(Cases::new().on("Loading", |_: &i64| 0));
assert!(incomplete.is_err());
```
*/
#![forbid(unsafe_code, missing_docs, missing_debug_implementations)]

pub mod util;

pub mod case;
pub mod error;
pub mod instance;
pub mod registry;
pub mod union;
pub mod variant;

pub mod prettyprinter;

pub use case::{
    map::MapCase,
    reduce::{step, Reducer, Step},
    Cases, Handler, Key, Matcher,
};
pub use error::{Error, ErrorKind};
pub use instance::Instance;
pub use registry::{Registry, Tag};
pub use union::Union;
pub use variant::Variant;
