use super::rule::ValidationRule;
use crate::config::{GeneratorConfig, RequiredDefaultPolicy};
use crate::error::GenError;
use std::fmt;
use tracing::warn;

/// Primitive integer types a parameter field may be declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntType {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
}

impl IntType {
    fn from_ident(ident: &str) -> Option<Self> {
        Some(match ident {
            "i8" => IntType::I8,
            "i16" => IntType::I16,
            "i32" => IntType::I32,
            "i64" => IntType::I64,
            "i128" => IntType::I128,
            "isize" => IntType::Isize,
            "u8" => IntType::U8,
            "u16" => IntType::U16,
            "u32" => IntType::U32,
            "u64" => IntType::U64,
            "u128" => IntType::U128,
            "usize" => IntType::Usize,
            _ => return None,
        })
    }

    /// Rust spelling of the type, used in `parse::<T>()`
    pub fn as_str(self) -> &'static str {
        match self {
            IntType::I8 => "i8",
            IntType::I16 => "i16",
            IntType::I32 => "i32",
            IntType::I64 => "i64",
            IntType::I128 => "i128",
            IntType::Isize => "isize",
            IntType::U8 => "u8",
            IntType::U16 => "u16",
            IntType::U32 => "u32",
            IntType::U64 => "u64",
            IntType::U128 => "u128",
            IntType::Usize => "usize",
        }
    }

    /// Inclusive value range; pointer-sized types assume a 64-bit target
    pub fn range(self) -> (i128, i128) {
        match self {
            IntType::I8 => (i8::MIN.into(), i8::MAX.into()),
            IntType::I16 => (i16::MIN.into(), i16::MAX.into()),
            IntType::I32 => (i32::MIN.into(), i32::MAX.into()),
            IntType::I64 | IntType::Isize => (i64::MIN.into(), i64::MAX.into()),
            IntType::I128 => (i128::MIN, i128::MAX),
            IntType::U8 => (0, u8::MAX.into()),
            IntType::U16 => (0, u16::MAX.into()),
            IntType::U32 => (0, u32::MAX.into()),
            IntType::U64 | IntType::Usize => (0, u64::MAX.into()),
            IntType::U128 => (0, i128::MAX),
        }
    }

    /// Whether `value` is representable in this type
    pub fn contains(self, value: i128) -> bool {
        let (lo, hi) = self.range();
        lo <= value && value <= hi
    }
}

impl fmt::Display for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a declared field, decided from its type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// `String`
    String,
    /// One of the primitive integer types
    Integer(IntType),
    /// Anything else; rejected when the field is tagged
    Unsupported(String),
}

impl FieldKind {
    /// Classify a type as written in the source (`String`, `std::string::String`, `i64`, ...)
    pub fn classify(type_name: &str) -> Self {
        let compact: String = type_name.chars().filter(|c| !c.is_whitespace()).collect();
        match compact.as_str() {
            "String" | "std::string::String" | "::std::string::String"
            | "alloc::string::String" | "::alloc::string::String" => FieldKind::String,
            other => match IntType::from_ident(other) {
                Some(int) => FieldKind::Integer(int),
                None => FieldKind::Unsupported(type_name.to_string()),
            },
        }
    }
}

/// Plan for binding one tagged field from the request parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    /// Target field on the parameter struct
    pub field_name: String,
    /// Key the value is looked up under
    pub source_param_name: String,
    /// String or integer
    pub kind: FieldKind,
    /// Checks applied after reading the value
    pub rule: ValidationRule,
}

/// Combine a declared field with its rule into a [`FieldBinding`]
///
/// # Errors
///
/// - [`GenError::UnsupportedFieldType`] when the type is neither a string nor an integer
/// - [`GenError::InvalidBinding`] when the rule does not fit the field kind, or when
///   `required` and a non-empty `default` are combined under
///   [`RequiredDefaultPolicy::Reject`]
pub fn plan_field(
    struct_name: &str,
    field_name: &str,
    type_name: &str,
    rule: ValidationRule,
    config: &GeneratorConfig,
) -> Result<FieldBinding, GenError> {
    let invalid = |reason: String| GenError::InvalidBinding {
        struct_name: struct_name.to_string(),
        field: field_name.to_string(),
        reason,
    };

    let kind = FieldKind::classify(type_name);
    match &kind {
        FieldKind::Unsupported(type_name) => {
            return Err(GenError::UnsupportedFieldType {
                struct_name: struct_name.to_string(),
                field: field_name.to_string(),
                type_name: type_name.clone(),
            })
        }
        FieldKind::String => {
            for bound in [rule.min, rule.max].into_iter().flatten() {
                if bound < 0 {
                    return Err(invalid(format!("length bound {} is negative", bound)));
                }
            }
        }
        FieldKind::Integer(int) => {
            if !rule.enum_values.is_empty() {
                return Err(invalid("enum is only supported on String fields".to_string()));
            }
            for bound in [rule.min, rule.max].into_iter().flatten() {
                if !int.contains(i128::from(bound)) {
                    return Err(invalid(format!("bound {} does not fit in {}", bound, int)));
                }
            }
            if let Some(default) = rule.default_value.as_deref().filter(|d| !d.is_empty()) {
                let fits = default.parse::<i128>().is_ok_and(|v| int.contains(v));
                if !fits {
                    return Err(invalid(format!("default '{}' is not a valid {}", default, int)));
                }
            }
        }
    }

    if let (Some(min), Some(max)) = (rule.min, rule.max) {
        if min > max {
            return Err(invalid(format!("min {} is greater than max {}", min, max)));
        }
    }

    let defaults_nonempty = rule.default_value.as_deref().is_some_and(|d| !d.is_empty());
    if rule.required && defaults_nonempty {
        match config.required_with_default {
            RequiredDefaultPolicy::Reject => {
                return Err(invalid(
                    "required fields cannot have a default; remove one of them or set \
                     required_with_default = \"required-first\""
                        .to_string(),
                ))
            }
            RequiredDefaultPolicy::RequiredFirst => warn!(
                struct_name,
                field = field_name,
                "required field has a default; the required check runs first"
            ),
        }
    }

    let source_param_name = rule
        .rename
        .clone()
        .unwrap_or_else(|| field_name.trim_start_matches("r#").to_lowercase());

    Ok(FieldBinding {
        field_name: field_name.to_string(),
        source_param_name,
        kind,
        rule,
    })
}
