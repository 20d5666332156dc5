use crate::utils::error::{DetectError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DetectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(DetectError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_extensions(field_name: &str, extensions: &[String], allowed: &[&str]) -> Result<()> {
    if extensions.is_empty() {
        return Err(DetectError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let allowed_set: HashSet<&str> = allowed.iter().copied().collect();
    for extension in extensions {
        if !allowed_set.contains(extension.as_str()) {
            return Err(DetectError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: extension.clone(),
                reason: format!(
                    "Unsupported file extension. Allowed extensions: {}",
                    allowed.join(", ")
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("keywords.name", "pandas").is_ok());
        assert!(validate_non_empty_string("keywords.name", "").is_err());
        assert!(validate_non_empty_string("keywords.name", "   ").is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("keywords.name", ["pandas", "numpy"]).is_ok());
        let err = validate_unique("keywords.name", ["pandas", "numpy", "pandas"]).unwrap_err();
        assert!(err.to_string().contains("Duplicate entry"));
    }

    #[test]
    fn test_validate_extensions() {
        let ok = vec!["py".to_string(), "ipynb".to_string()];
        assert!(validate_extensions("extensions", &ok, &["py", "ipynb"]).is_ok());

        let bad = vec!["txt".to_string()];
        assert!(validate_extensions("extensions", &bad, &["py", "ipynb"]).is_err());

        assert!(matches!(
            validate_extensions("extensions", &[], &["py", "ipynb"]),
            Err(DetectError::MissingConfigError { .. })
        ));
    }
}
