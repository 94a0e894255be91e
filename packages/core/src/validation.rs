use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::{ContactInput, EmailChange};

/// Which operation a body is being validated for.
///
/// Both share one schema. On update the `id` path parameter is merged into
/// the option set, so a body `id` key is accepted there (and ignored).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
}

impl Operation {
    fn defined_options(self) -> &'static [&'static str] {
        match self {
            Operation::Create => &["country", "email", "name"],
            Operation::Update => &["country", "email", "id", "name"],
        }
    }
}

/// A single schema violation in a contact request body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("The request body is not valid JSON: {0}.")]
    InvalidJson(String),

    #[error("The request body must be a JSON object, but is of type {0:?}.")]
    NotAnObject(&'static str),

    #[error("The option {option:?} does not exist. Defined options are: {}.", quoted_list(.defined))]
    UndefinedOption {
        option: String,
        defined: &'static [&'static str],
    },

    #[error("{}", missing_message(.0))]
    MissingOptions(Vec<&'static str>),

    #[error("The option {option:?} is expected to be of type {expected:?}, but is of type {actual:?}.")]
    InvalidType {
        option: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("The option {option:?} must be at least {min} {} long.", characters(.min))]
    TooShort { option: &'static str, min: usize },

    #[error("The option {option:?} with value {value:?} is expected to match pattern {pattern:?}.")]
    PatternMismatch {
        option: &'static str,
        value: String,
        pattern: &'static str,
    },

    #[error("The option \"email\" with value {0:?} is not a valid email address.")]
    InvalidEmail(String),
}

/// Every violation found in one request body, in field order.
///
/// Displays as the individual messages joined by a single space; that string
/// is what the API returns as the 400 `message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<Violation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Violation> for ValidationErrors {
    fn from(v: Violation) -> Self {
        Self(vec![v])
    }
}

/// Minimum length of `name`, in characters.
pub const NAME_MIN_LENGTH: usize = 1;

/// Pattern a `country` value must match.
pub const COUNTRY_PATTERN: &str = "^[A-Z]{2}$";

/// Parse raw request bytes and validate them with [`validate_contact`].
pub fn validate_contact_json(body: &[u8], op: Operation) -> Result<ContactInput, ValidationErrors> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| Violation::InvalidJson(e.to_string()))?;
    validate_contact(&value, op)
}

/// Validate a contact create/update body and map it to [`ContactInput`].
///
/// Schema: `name` (string, at least [`NAME_MIN_LENGTH`] characters,
/// required), `country` (string matching [`COUNTRY_PATTERN`], required),
/// `email` (string in email format, optional; `null` clears it on update).
///
/// Returns every violation found rather than stopping at the first one.
pub fn validate_contact(body: &Value, op: Operation) -> Result<ContactInput, ValidationErrors> {
    let map = match body {
        Value::Object(map) => map,
        other => return Err(Violation::NotAnObject(type_name(other)).into()),
    };

    let mut violations = Vec::new();

    let defined = op.defined_options();
    for key in map.keys() {
        if !defined.contains(&key.as_str()) {
            violations.push(Violation::UndefinedOption {
                option: key.clone(),
                defined,
            });
        }
    }

    let missing: Vec<&'static str> = ["country", "name"]
        .into_iter()
        .filter(|k| !map.contains_key(*k))
        .collect();
    if !missing.is_empty() {
        violations.push(Violation::MissingOptions(missing));
    }

    let name = string_option(map, "name", &mut violations);
    if let Some(name) = name {
        if name.chars().count() < NAME_MIN_LENGTH {
            violations.push(Violation::TooShort {
                option: "name",
                min: NAME_MIN_LENGTH,
            });
        }
    }

    let email = match map.get("email") {
        None => Some(EmailChange::Keep),
        Some(Value::Null) => Some(EmailChange::Clear),
        Some(Value::String(s)) if EMAIL_RE.is_match(s) => Some(EmailChange::Set(s.clone())),
        Some(Value::String(s)) => {
            violations.push(Violation::InvalidEmail(s.clone()));
            None
        }
        Some(other) => {
            violations.push(Violation::InvalidType {
                option: "email",
                expected: "string",
                actual: type_name(other),
            });
            None
        }
    };

    let country = string_option(map, "country", &mut violations);
    if let Some(country) = country {
        if !COUNTRY_RE.is_match(country) {
            violations.push(Violation::PatternMismatch {
                option: "country",
                value: country.to_string(),
                pattern: COUNTRY_PATTERN,
            });
        }
    }

    match (name, country, email) {
        (Some(name), Some(country), Some(email)) if violations.is_empty() => Ok(ContactInput {
            name: name.to_string(),
            country: country.to_string(),
            email,
        }),
        _ => Err(ValidationErrors(violations)),
    }
}

// --- helpers -----------------------------------------------------------------

/// Fetch a required string option. Absence is reported separately, so only
/// type mismatches are recorded here.
fn string_option<'a>(
    map: &'a Map<String, Value>,
    option: &'static str,
    violations: &mut Vec<Violation>,
) -> Option<&'a str> {
    match map.get(option)? {
        Value::String(s) => Some(s),
        other => {
            violations.push(Violation::InvalidType {
                option,
                expected: "string",
                actual: type_name(other),
            });
            None
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn quoted_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

fn missing_message(missing: &[&str]) -> String {
    match missing {
        [one] => format!("The required option \"{one}\" is missing."),
        many => format!("The required options {} are missing.", quoted_list(many)),
    }
}

fn characters(n: &usize) -> &'static str {
    if *n == 1 {
        "character"
    } else {
        "characters"
    }
}

static COUNTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COUNTRY_PATTERN).expect("invalid country regex"));

/// WHATWG `input[type=email]` grammar.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("invalid email regex")
});

// --- tests -------------------------------------------------------------------
