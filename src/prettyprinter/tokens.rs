/*!
The basic tokens used when declaring, matching and printing unions
*/

/// The placeholder for the default case, taken by every variant without a case of its own
pub const DEFAULT_CASE: &str = "_";

/// The placeholder for the untagged case, taken by instances carrying no tag of the union
pub const UNTAGGED_CASE: &str = "__";

/// The tokens which may never be used as variant names
pub const RESERVED: [&str; 2] = [DEFAULT_CASE, UNTAGGED_CASE];

/// The keyword for unions
pub const KEYWORD_UNION: &str = "#union";

/// The keyword for variant tags
pub const KEYWORD_TAG: &str = "#tag";

/// The keyword for untagged instances
pub const KEYWORD_UNTAGGED: &str = "#untagged";

/// The keyword for matchers
pub const KEYWORD_CASE: &str = "#case";

/// The opening delimiter for a payload
pub const SEXPR_OPEN: &str = "(";

/// The closing delimiter for a payload
pub const SEXPR_CLOSE: &str = ")";

/// The opening delimiter for a list of variants
pub const TUPLE_OPEN: &str = "[";

/// The closing delimiter for a list of variants
pub const TUPLE_CLOSE: &str = "]";

/// The separator between listed variants
pub const LIST_SEP: &str = " ";
