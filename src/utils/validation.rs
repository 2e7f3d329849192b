use crate::utils::error::{Result, ScoutError};
use scraper::Selector;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ScoutError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ScoutError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ScoutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScoutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 確認 CSS selector 可被解析
pub fn validate_selector(field_name: &str, selector: &str) -> Result<()> {
    validate_non_empty_string(field_name, selector)?;
    Selector::parse(selector).map_err(|e| ScoutError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: selector.to_string(),
        reason: format!("Invalid CSS selector: {}", e),
    })?;
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ScoutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("SITE1_URL", "https://example.com").is_ok());
        assert!(validate_url("SITE1_URL", "http://example.com/shop").is_ok());
        assert!(matches!(
            validate_url("SITE1_URL", ""),
            Err(ScoutError::MissingConfigError { .. })
        ));
        assert!(validate_url("SITE1_URL", "invalid-url").is_err());
        assert!(validate_url("SITE1_URL", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_selector() {
        assert!(validate_selector("name_selector", ".product h2").is_ok());
        assert!(validate_selector("name_selector", "   ").is_err());
        assert!(validate_selector("name_selector", "h2[").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeout", 30, 1, 600).is_ok());
        assert!(validate_range("timeout", 0, 1, 600).is_err());
        assert!(validate_range("timeout", 601, 1, 600).is_err());
    }
}
