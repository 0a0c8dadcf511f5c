use crate::utils::error::{Result, StoreError, ValidationError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty(value: &str) -> std::result::Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyOrInsecure);
    }
    Ok(())
}

/// Length is counted in characters, not bytes.
pub fn validate_max_length(value: &str, max: usize) -> std::result::Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { max, actual });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StoreError::config(format!("{} cannot be empty", field_name)));
    }

    if path.contains('\0') {
        return Err(StoreError::config(format!(
            "{} contains null bytes",
            field_name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("a").is_ok());
        assert_eq!(validate_non_empty(""), Err(ValidationError::EmptyOrInsecure));
    }

    #[test]
    fn test_validate_max_length_counts_chars() {
        assert!(validate_max_length(&"a".repeat(100), 100).is_ok());
        assert!(validate_max_length(&"é".repeat(100), 100).is_ok());
        assert_eq!(
            validate_max_length(&"a".repeat(101), 100),
            Err(ValidationError::TooLong { max: 100, actual: 101 })
        );
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "store.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "a\0b").is_err());
    }
}
