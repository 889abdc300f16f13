use crate::domain::model::Pattern;
use crate::utils::error::{PatternError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PatternError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_pattern_name(field_name: &str, name: &str) -> Result<Pattern> {
    validate_non_empty_string(field_name, name)?;

    name.parse::<Pattern>()
        .map_err(|_| PatternError::InvalidConfigValue {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: format!(
                "Unknown pattern. Known patterns: {}",
                Pattern::ALL
                    .iter()
                    .map(|p| p.slug())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        })
}

/// Checks every name and warns about names that resolve to the same pattern.
pub fn validate_pattern_names(field_name: &str, names: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        let pattern = validate_pattern_name(field_name, name)?;
        if !seen.insert(pattern) {
            tracing::warn!("{} lists {} more than once", field_name, pattern);
        }
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    let normalized = value.trim().to_lowercase();
    if !allowed.contains(&normalized.as_str()) {
        return Err(PatternError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
