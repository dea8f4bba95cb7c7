//! Value rules for HTML elements and the date range form rule.
//!
//! Element rules look at the current values only; they skip elements
//! without a value so that emptiness stays the business of the required
//! flag. Messages come from the translation context, keyed by the codes
//! exported here.

mod date;
mod date_range;
mod numeric;
mod options;
mod text;

pub use date::DateValidator;
pub use date_range::DateRangeValidator;
pub use numeric::NumericValidator;
pub use options::{MultipleOptionValidator, NumberOfSelectedOptionsValidator, SingleOptionValidator};
pub use text::{AlphanumericValidator, InSetValidator, RegexValidator, StringLengthValidator};

// =============================================================================
// MESSAGE CODES
// =============================================================================

pub const ALNUM_INVALID: &str = "validators.alnum.invalid";
pub const DATE_INVALID: &str = "validators.date.invalid";
pub const IN_SET_INVALID: &str = "validators.inset.invalid";
pub const MULTISELECT_INVALID: &str = "validators.multiselect.invalid";
pub const MULTISELECT_REPEATED: &str = "validators.multiselect.repeated";
pub const NUMBER_OF_OPTIONS_MIN: &str = "validators.numberofoptions.min";
pub const NUMBER_OF_OPTIONS_MAX: &str = "validators.numberofoptions.max";
pub const NUMERIC_INVALID: &str = "validators.numeric.invalid";
pub const NUMERIC_GREATER_EQUAL: &str = "validators.numeric.greaterequal";
pub const NUMERIC_GREATER: &str = "validators.numeric.greater";
pub const NUMERIC_LESS_EQUAL: &str = "validators.numeric.lessequal";
pub const NUMERIC_LESS: &str = "validators.numeric.less";
pub const NUMERIC_TYPE_INTEGER: &str = "validators.numeric.type.integer";
pub const NUMERIC_TYPE_NUMBER: &str = "validators.numeric.type.number";
pub const REGEX_INVALID: &str = "validators.regex.invalid";
pub const SELECT_INVALID: &str = "validators.select.invalid";
pub const STRING_LENGTH_MIN: &str = "validators.stringlength.min";
pub const STRING_LENGTH_MAX: &str = "validators.stringlength.max";
pub const DATE_RANGE_INVALID: &str = "formvalidators.daterange.invalid";
pub const DATE_RANGE_SAME: &str = "formvalidators.daterange.same";

/// The first value, unless it is missing or empty.
fn present_value(values: &[Option<String>]) -> Option<&str> {
    values
        .first()
        .and_then(Option::as_deref)
        .filter(|value| !value.is_empty())
}
