use crate::error::GenError;
use tracing::warn;

/// Validation rule attached to one parameter field
///
/// Built from an `apivalidator` tag such as
/// `"required,paramname=id,min=1,max=10"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationRule {
    /// Value must be non-empty (strings) or non-zero/present (integers)
    pub required: bool,
    /// Inclusive lower bound: length for strings, value for integers
    pub min: Option<i64>,
    /// Inclusive upper bound: length for strings, value for integers
    pub max: Option<i64>,
    /// Allowed literal values, in tag order without duplicates
    pub enum_values: Vec<String>,
    /// External parameter name overriding the lower-cased field name
    pub rename: Option<String>,
    /// Value substituted when the incoming value is empty
    pub default_value: Option<String>,
}

/// One clause of the tag grammar
#[derive(Debug, Clone, PartialEq, Eq)]
enum Clause<'a> {
    Required,
    Pair { key: &'a str, value: &'a str },
}

/// Split a tag into clauses: `clause(,clause)*`, `clause ::= "required" | key "=" value`.
fn tokenize(tag: &str) -> Result<Vec<Clause<'_>>, GenError> {
    if tag.trim().is_empty() {
        return Ok(Vec::new());
    }
    tag.split(',')
        .map(str::trim)
        .map(|clause| {
            if clause.is_empty() {
                return Err(GenError::rule(tag, "empty clause"));
            }
            match clause.split_once('=') {
                Some((key, value)) => {
                    let key = key.trim();
                    if key.is_empty() {
                        return Err(GenError::rule(
                            tag,
                            format!("clause '{}' has no key", clause),
                        ));
                    }
                    Ok(Clause::Pair {
                        key,
                        value: value.trim(),
                    })
                }
                None if clause == "required" => Ok(Clause::Required),
                None => Err(GenError::rule(
                    tag,
                    format!("clause '{}' is neither 'required' nor key=value", clause),
                )),
            }
        })
        .collect()
}

fn parse_bound(tag: &str, key: &str, value: &str) -> Result<i64, GenError> {
    value.parse::<i64>().map_err(|_| {
        GenError::rule(tag, format!("{} must be an integer, got '{}'", key, value))
    })
}

/// Parse an `apivalidator` tag into a [`ValidationRule`]
///
/// Unknown keys are skipped with a warning so newer tags keep working with older
/// generators. When a key repeats, the last occurrence wins.
///
/// # Errors
///
/// Returns [`GenError::Rule`] for malformed clauses (including `required=..`),
/// non-numeric bounds and empty `paramname`/`enum` values.
pub fn parse_rule(tag: &str) -> Result<ValidationRule, GenError> {
    let mut rule = ValidationRule::default();
    for clause in tokenize(tag)? {
        let (key, value) = match clause {
            Clause::Required => {
                rule.required = true;
                continue;
            }
            Clause::Pair { key, value } => (key, value),
        };
        match key {
            "required" => {
                return Err(GenError::rule(
                    tag,
                    format!("'required' takes no value, got 'required={}'", value),
                ))
            }
            "paramname" => {
                if value.is_empty() {
                    return Err(GenError::rule(tag, "paramname must not be empty"));
                }
                rule.rename = Some(value.to_string());
            }
            "enum" => {
                let mut values: Vec<String> = Vec::new();
                for member in value.split('|').map(str::trim) {
                    if member.is_empty() {
                        return Err(GenError::rule(tag, "enum members must not be empty"));
                    }
                    if !values.iter().any(|v| v == member) {
                        values.push(member.to_string());
                    }
                }
                rule.enum_values = values;
            }
            "default" => rule.default_value = Some(value.to_string()),
            "min" => rule.min = Some(parse_bound(tag, key, value)?),
            "max" => rule.max = Some(parse_bound(tag, key, value)?),
            other => warn!(tag, key = other, "ignoring unknown apivalidator key"),
        }
    }
    Ok(rule)
}

impl ValidationRule {
    /// Render the canonical tag for this rule
    ///
    /// Parsing the result yields an identical rule.
    pub fn to_tag(&self) -> String {
        let mut clauses = Vec::new();
        if self.required {
            clauses.push("required".to_string());
        }
        if let Some(name) = &self.rename {
            clauses.push(format!("paramname={}", name));
        }
        if let Some(min) = self.min {
            clauses.push(format!("min={}", min));
        }
        if let Some(max) = self.max {
            clauses.push(format!("max={}", max));
        }
        if !self.enum_values.is_empty() {
            clauses.push(format!("enum={}", self.enum_values.join("|")));
        }
        if let Some(default) = &self.default_value {
            clauses.push(format!("default={}", default));
        }
        clauses.join(",")
    }

    /// True when a `default` clause is present, even an empty one
    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }
}
