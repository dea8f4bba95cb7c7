//! Numeric values and their bounds.

use formwork_core::{Element, Validator};
use formwork_i18n::Translation;

use super::{
    NUMERIC_GREATER, NUMERIC_GREATER_EQUAL, NUMERIC_INVALID, NUMERIC_LESS, NUMERIC_LESS_EQUAL,
    NUMERIC_TYPE_INTEGER, NUMERIC_TYPE_NUMBER, present_value,
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bound {
    value: f64,
    inclusive: bool,
}

/// The value must parse as a number and respect optional bounds.
///
/// Integer mode accepts what fits an `i64`; decimal mode accepts any finite
/// `f64`. Bounds are compared as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericValidator {
    allow_decimals: bool,
    lower: Option<Bound>,
    upper: Option<Bound>,
}

impl Default for NumericValidator {
    fn default() -> Self {
        Self::integer()
    }
}

impl NumericValidator {
    /// Whole numbers only.
    pub fn integer() -> Self {
        Self {
            allow_decimals: false,
            lower: None,
            upper: None,
        }
    }

    /// Any decimal number.
    pub fn decimal() -> Self {
        Self {
            allow_decimals: true,
            ..Self::integer()
        }
    }

    #[must_use]
    pub fn at_least(mut self, bound: f64) -> Self {
        self.lower = Some(Bound {
            value: bound,
            inclusive: true,
        });
        self
    }

    #[must_use]
    pub fn greater_than(mut self, bound: f64) -> Self {
        self.lower = Some(Bound {
            value: bound,
            inclusive: false,
        });
        self
    }

    #[must_use]
    pub fn at_most(mut self, bound: f64) -> Self {
        self.upper = Some(Bound {
            value: bound,
            inclusive: true,
        });
        self
    }

    #[must_use]
    pub fn less_than(mut self, bound: f64) -> Self {
        self.upper = Some(Bound {
            value: bound,
            inclusive: false,
        });
        self
    }

    pub fn allows_decimals(&self) -> bool {
        self.allow_decimals
    }

    fn parse(&self, value: &str) -> Option<f64> {
        if self.allow_decimals {
            value.parse::<f64>().ok().filter(|number| number.is_finite())
        } else {
            value.parse::<i64>().ok().map(|number| number as f64)
        }
    }
}

impl Validator for NumericValidator {
    fn validate(
        &self,
        _element: &Element,
        values: &[Option<String>],
        translation: &Translation,
    ) -> Vec<String> {
        let Some(value) = present_value(values) else {
            return Vec::new();
        };
        let Some(number) = self.parse(value.trim()) else {
            let type_code = if self.allow_decimals {
                NUMERIC_TYPE_NUMBER
            } else {
                NUMERIC_TYPE_INTEGER
            };
            let type_name = translation.message(type_code, &[]);
            return vec![translation.message(NUMERIC_INVALID, &[&value, &type_name])];
        };

        let mut errors = Vec::new();
        if let Some(bound) = self.lower {
            if bound.inclusive && number < bound.value {
                errors.push(translation.message(NUMERIC_GREATER_EQUAL, &[&value, &bound.value]));
            } else if !bound.inclusive && number <= bound.value {
                errors.push(translation.message(NUMERIC_GREATER, &[&value, &bound.value]));
            }
        }
        if let Some(bound) = self.upper {
            if bound.inclusive && number > bound.value {
                errors.push(translation.message(NUMERIC_LESS_EQUAL, &[&value, &bound.value]));
            } else if !bound.inclusive && number >= bound.value {
                errors.push(translation.message(NUMERIC_LESS, &[&value, &bound.value]));
            }
        }
        errors
    }

    fn breaks_chain_on_error(&self) -> bool {
        true
    }
}
