//! Field-schema descriptors and the generic form operations built on them.
//!
//! Every resource publishes a static slice of [`FieldSpec`]. Forms are edited
//! through `field=value` assignments coerced by that schema, so the list
//! screen never needs per-resource editing code.

use serde_json::{Map, Value};

use super::Resource;
use crate::error::FieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Integer { min: i64, max: i64 },
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name (camelCase as the API expects)
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
    pub example: &'static str,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str, example: &'static str) -> Self {
        Self {
            name,
            label,
            required: true,
            kind: FieldKind::Text,
            example,
        }
    }

    pub const fn long_text(name: &'static str, label: &'static str, example: &'static str) -> Self {
        Self {
            name,
            label,
            required: true,
            kind: FieldKind::LongText,
            example,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub const fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Convert raw user input into the JSON value stored in the form.
    /// `Value::Null` means "leave the optional field unset".
    fn coerce(&self, raw: &str) -> Result<Value, FieldError> {
        let trimmed = raw.trim();

        match self.kind {
            FieldKind::Text | FieldKind::LongText => {
                if trimmed.is_empty() && !self.required {
                    Ok(Value::Null)
                } else {
                    Ok(Value::String(raw.to_string()))
                }
            }
            FieldKind::Integer { min, max } => {
                let value: i64 = trimmed.parse().map_err(|_| FieldError::NotAnInteger {
                    field: self.name,
                    value: raw.to_string(),
                })?;
                if value < min || value > max {
                    return Err(FieldError::OutOfRange {
                        field: self.name,
                        min,
                        max,
                        value,
                    });
                }
                Ok(Value::from(value))
            }
            FieldKind::Choice(options) => {
                if trimmed.is_empty() {
                    if self.required {
                        return Err(FieldError::MissingRequired(self.name));
                    }
                    return Ok(Value::Null);
                }
                options
                    .iter()
                    .find(|option| option.eq_ignore_ascii_case(trimmed))
                    .map(|option| Value::String(option.to_string()))
                    .ok_or_else(|| FieldError::NotAChoice {
                        field: self.name,
                        options: options.join(", "),
                    })
            }
        }
    }
}

pub fn find_field<R: Resource>(name: &str) -> Result<&'static FieldSpec, FieldError> {
    R::schema()
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| FieldError::UnknownField {
            resource: R::KIND.name(),
            field: name.to_string(),
        })
}

fn to_object<R: Resource>(form: &R) -> Result<Map<String, Value>, FieldError> {
    match serde_json::to_value(form) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(FieldError::Encoding(format!("expected an object, got {other}"))),
        Err(e) => Err(FieldError::Encoding(e.to_string())),
    }
}

/// Apply one `field=value` edit, returning the updated form.
pub fn assign<R: Resource>(form: &R, field: &str, raw: &str) -> Result<R, FieldError> {
    let spec = find_field::<R>(field)?;
    let mut object = to_object(form)?;

    match spec.coerce(raw)? {
        Value::Null => {
            object.remove(spec.name);
        }
        value => {
            object.insert(spec.name.to_string(), value);
        }
    }

    serde_json::from_value(Value::Object(object)).map_err(|e| FieldError::Encoding(e.to_string()))
}

/// Split `field=value`; the value may itself contain `=`.
pub fn parse_assignment(input: &str) -> Result<(&str, &str), FieldError> {
    match input.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => Ok((field.trim(), value)),
        _ => Err(FieldError::InvalidAssignment(input.to_string())),
    }
}

/// Check the required-field set and integer ranges of a form.
pub fn validate<R: Resource>(form: &R) -> Result<(), FieldError> {
    let object = to_object(form)?;

    for spec in R::schema() {
        let value = object.get(spec.name);
        match spec.kind {
            FieldKind::Integer { min, max } => {
                let number = value.and_then(Value::as_i64);
                match number {
                    Some(n) if n < min || n > max => {
                        return Err(FieldError::OutOfRange {
                            field: spec.name,
                            min,
                            max,
                            value: n,
                        })
                    }
                    None if spec.required => return Err(FieldError::MissingRequired(spec.name)),
                    _ => {}
                }
            }
            _ if spec.required => {
                let present = value
                    .and_then(Value::as_str)
                    .map(|s| !s.trim().is_empty())
                    .unwrap_or(false);
                if !present {
                    return Err(FieldError::MissingRequired(spec.name));
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Current value of a form field rendered as text; `None` when unset.
pub fn field_value<R: Resource>(form: &R, name: &str) -> Option<String> {
    let object = to_object(form).ok()?;
    match object.get(name)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Label/value pairs for every set field, in schema order.
pub fn describe<R: Resource>(form: &R) -> Vec<(&'static str, String)> {
    R::schema()
        .iter()
        .filter_map(|spec| {
            field_value(form, spec.name)
                .filter(|v| !v.is_empty())
                .map(|v| (spec.label, v))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, Skill};

    #[test]
    fn assign_coerces_integers_and_checks_range() {
        let skill = Skill::default();
        let updated = assign(&skill, "proficiency", "95").unwrap();
        assert_eq!(updated.proficiency, 95);

        assert_eq!(
            assign(&skill, "proficiency", "101"),
            Err(FieldError::OutOfRange {
                field: "proficiency",
                min: 0,
                max: 100,
                value: 101
            })
        );
        assert!(matches!(
            assign(&skill, "proficiency", "ninety"),
            Err(FieldError::NotAnInteger { .. })
        ));
    }

    #[test]
    fn choice_fields_canonicalize_case() {
        let skill = assign(&Skill::default(), "category", "devops").unwrap();
        assert_eq!(skill.category.as_deref(), Some("DevOps"));
        assert!(matches!(
            assign(&Skill::default(), "category", "Gardening"),
            Err(FieldError::NotAChoice { .. })
        ));
    }

    #[test]
    fn blank_optional_field_is_cleared() {
        let project = Project {
            github_url: Some("https://github.com/x".into()),
            ..Project::default()
        };
        let cleared = assign(&project, "githubUrl", "  ").unwrap();
        assert_eq!(cleared.github_url, None);
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(matches!(
            assign(&Skill::default(), "color", "red"),
            Err(FieldError::UnknownField { resource: "skills", .. })
        ));
    }

    #[test]
    fn validate_reports_first_missing_required_field() {
        let project = Project {
            title: "Portfolio".into(),
            ..Project::default()
        };
        assert_eq!(validate(&project), Err(FieldError::MissingRequired("description")));
    }

    #[test]
    fn assignment_splits_on_first_equals() {
        assert_eq!(
            parse_assignment("liveUrl=https://x.dev/?a=b").unwrap(),
            ("liveUrl", "https://x.dev/?a=b")
        );
        assert!(parse_assignment("=oops").is_err());
        assert!(parse_assignment("no-equals").is_err());
    }
}
