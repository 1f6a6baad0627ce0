//! Declarative field validation.
//!
//! Each input type declares its constraints as a table of [`Rule`]s per
//! field and runs them through a [`Validator`], which collects every
//! violation in declaration order. Only the first failing rule of a field
//! is reported.

use thiserror::Error;

/// A single field constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty (non-zero for integers).
    Required,
    /// Value must contain only ASCII letters and digits.
    Alphanumeric,
    /// Value must be exactly this many characters long.
    Len(usize),
    /// Value must be one of the listed names.
    OneOf(&'static [&'static str]),
    /// Value must be a decimal number within [-90, 90].
    Latitude,
    /// Value must be a decimal number within [-180, 180].
    Longitude,
    /// Integer value (or string length) must be at least this.
    Gte(i64),
    /// Integer value (or string length) must be at most this.
    Lte(i64),
}

impl Rule {
    /// Constraint name as reported in violation messages.
    pub fn tag(&self) -> String {
        match self {
            Rule::Required => "required".to_string(),
            Rule::Alphanumeric => "alphanum".to_string(),
            Rule::Len(n) => format!("len={n}"),
            Rule::OneOf(names) => format!("oneof={}", names.join(" ")),
            Rule::Latitude => "latitude".to_string(),
            Rule::Longitude => "longitude".to_string(),
            Rule::Gte(n) => format!("gte={n}"),
            Rule::Lte(n) => format!("lte={n}"),
        }
    }

    fn check(&self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (Rule::Required, FieldValue::Str(s)) => !s.is_empty(),
            (Rule::Required, FieldValue::Int(n)) => *n != 0,
            (Rule::Gte(min), FieldValue::Int(n)) => n >= min,
            (Rule::Lte(max), FieldValue::Int(n)) => n <= max,
            (Rule::Gte(min), FieldValue::Str(s)) => char_count(s) >= *min,
            (Rule::Lte(max), FieldValue::Str(s)) => char_count(s) <= *max,
            (rule, FieldValue::Str(s)) => rule.check_str(s),
            (rule, FieldValue::Int(n)) => rule.check_str(&n.to_string()),
        }
    }

    fn check_str(&self, s: &str) -> bool {
        match self {
            Rule::Alphanumeric => !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric()),
            Rule::Len(n) => s.chars().count() == *n,
            Rule::OneOf(names) => names.contains(&s),
            Rule::Latitude => in_degree_range(s, 90.0),
            Rule::Longitude => in_degree_range(s, 180.0),
            Rule::Required | Rule::Gte(_) | Rule::Lte(_) => true,
        }
    }
}

fn char_count(s: &str) -> i64 {
    i64::try_from(s.chars().count()).unwrap_or(i64::MAX)
}

fn in_degree_range(s: &str, bound: f64) -> bool {
    is_plain_decimal(s)
        && s.parse::<f64>()
            .is_ok_and(|v| v.is_finite() && (-bound..=bound).contains(&v))
}

/// Matches `[-+]?(0|[1-9]\d*)(\.\d+)?`.
fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    let whole_ok = all_digits(whole) && (whole == "0" || !whole.starts_with('0'));
    whole_ok && fraction.is_none_or(all_digits)
}

/// A value under validation.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Int(i64),
}

impl std::fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Str(s) => f.write_str(s),
            FieldValue::Int(n) => write!(f, "{n}"),
        }
    }
}

/// One failed constraint: the field, the offending value, and the rule tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub value: String,
    pub tag: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]: '{}' | Needs to implement '{}'",
            self.field, self.value, self.tag
        )
    }
}

/// Ordered, non-empty list of violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_violations(.0))]
pub struct ValidationErrors(pub Vec<Violation>);

impl ValidationErrors {
    /// A single violation of `rule` by `value`.
    pub fn single(field: &str, value: impl std::fmt::Display, rule: Rule) -> Self {
        Self(vec![Violation {
            field: field.to_string(),
            value: value.to_string(),
            tag: rule.tag(),
        }])
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// Returns true if the named field failed validation.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Collects violations across the fields of one input.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a field against its rules, recording the first failure.
    pub fn field(mut self, name: &str, value: FieldValue<'_>, rules: &[Rule]) -> Self {
        if let Some(rule) = rules.iter().find(|rule| !rule.check(&value)) {
            self.violations.push(Violation {
                field: name.to_string(),
                value: value.to_string(),
                tag: rule.tag(),
            });
        }
        self
    }

    pub fn str(self, name: &str, value: &str, rules: &[Rule]) -> Self {
        self.field(name, FieldValue::Str(value), rules)
    }

    pub fn int(self, name: &str, value: i64, rules: &[Rule]) -> Self {
        self.field(name, FieldValue::Int(value), rules)
    }

    /// Like [`Validator::str`], but absent values are not checked.
    pub fn optional_str(self, name: &str, value: Option<&str>, rules: &[Rule]) -> Self {
        match value {
            Some(value) => self.str(name, value, rules),
            None => self,
        }
    }

    /// Like [`Validator::int`], but absent values are not checked.
    pub fn optional_int(self, name: &str, value: Option<i64>, rules: &[Rule]) -> Self {
        match value {
            Some(value) => self.int(name, value, rules),
            None => self,
        }
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VEHICLE_ID: &[Rule] = &[Rule::Required, Rule::Alphanumeric, Rule::Len(7)];

    #[test]
    fn valid_input_passes() {
        let result = Validator::new()
            .str("vehicle_id", "ABC1234", VEHICLE_ID)
            .int("speed", 0, &[Rule::Gte(0)])
            .finish();
        assert!(result.is_ok());
    }

    #[test]
    fn reports_first_failed_rule_per_field() {
        let err = Validator::new()
            .str("vehicle_id", "", VEHICLE_ID)
            .finish()
            .unwrap_err();

        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].tag, "required");
        assert_eq!(
            err.to_string(),
            "[vehicle_id]: '' | Needs to implement 'required'"
        );
    }

    #[test]
    fn joins_violations_in_declaration_order() {
        let err = Validator::new()
            .str("vehicle_id", "AB-1234", VEHICLE_ID)
            .str("status", "parked", &[Rule::OneOf(&["moving", "stopped"])])
            .int("speed", -5, &[Rule::Gte(0)])
            .finish()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "[vehicle_id]: 'AB-1234' | Needs to implement 'alphanum' and \
             [status]: 'parked' | Needs to implement 'oneof=moving stopped' and \
             [speed]: '-5' | Needs to implement 'gte=0'"
        );
        assert!(err.has_field("speed"));
    }

    #[test]
    fn length_is_checked_after_charset() {
        let err = Validator::new()
            .str("vehicle_id", "ABC12345", VEHICLE_ID)
            .finish()
            .unwrap_err();
        assert_eq!(err.violations()[0].tag, "len=7");
    }

    #[test]
    fn coordinate_ranges() {
        assert!(Rule::Latitude.check(&FieldValue::Str("-23.55052")));
        assert!(Rule::Latitude.check(&FieldValue::Str("90")));
        assert!(Rule::Latitude.check(&FieldValue::Str("+45.0")));
        assert!(!Rule::Latitude.check(&FieldValue::Str("90.5")));
        assert!(!Rule::Latitude.check(&FieldValue::Str("abc")));
        assert!(!Rule::Latitude.check(&FieldValue::Str("")));
        assert!(!Rule::Latitude.check(&FieldValue::Str("1e1")));

        assert!(Rule::Longitude.check(&FieldValue::Str("-46.633308")));
        assert!(Rule::Longitude.check(&FieldValue::Str("179.99")));
        assert!(!Rule::Longitude.check(&FieldValue::Str("-180.01")));
        assert!(!Rule::Longitude.check(&FieldValue::Str("NaN")));
    }

    #[test]
    fn coordinates_must_be_plain_decimals() {
        assert!(Rule::Latitude.check(&FieldValue::Str("0")));
        assert!(Rule::Latitude.check(&FieldValue::Str("-0.5")));
        assert!(Rule::Longitude.check(&FieldValue::Str("180.0")));

        for value in ["1.", ".5", "0090", "09", "-", "1.2.3", "--1", "+-1", " 1"] {
            assert!(
                !Rule::Latitude.check(&FieldValue::Str(value)),
                "latitude accepted {value:?}"
            );
            assert!(
                !Rule::Longitude.check(&FieldValue::Str(value)),
                "longitude accepted {value:?}"
            );
        }
    }

    #[test]
    fn optional_fields_are_skipped_when_absent() {
        let result = Validator::new()
            .optional_str("vehicle_id", None, VEHICLE_ID)
            .optional_int("limit", None, &[Rule::Gte(1), Rule::Lte(100)])
            .finish();
        assert!(result.is_ok());

        let err = Validator::new()
            .optional_int("limit", Some(101), &[Rule::Gte(1), Rule::Lte(100)])
            .finish()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "[limit]: '101' | Needs to implement 'lte=100'"
        );
    }
}
