use crate::utils::error::{HubError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(HubError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(HubError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(HubError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(HubError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(HubError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HubError::ValidationError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

/// A price must be a finite, non-negative number. Anything else is rejected
/// before it can reach price comparison.
pub fn validate_price(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(HubError::ValidationError {
            message: format!("{} must be a finite, non-negative number, got {}", field_name, value),
        });
    }
    Ok(())
}

pub fn validate_price_range(min_price: f64, max_price: f64) -> Result<()> {
    validate_price("minPrice", min_price)?;
    validate_price("maxPrice", max_price)?;
    if min_price > max_price {
        return Err(HubError::ValidationError {
            message: format!(
                "minPrice {} must not exceed maxPrice {}",
                min_price, max_price
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("merchant_url", "https://example.com").is_ok());
        assert!(validate_url("merchant_url", "http://example.com").is_ok());
        assert!(validate_url("merchant_url", "").is_err());
        assert!(validate_url("merchant_url", "invalid-url").is_err());
        assert!(validate_url("merchant_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("max_in_flight", 5, 1).is_ok());
        assert!(validate_positive_number("max_in_flight", 0, 1).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", 0.0).is_ok());
        assert!(validate_price("price", 9.99).is_ok());
        assert!(validate_price("price", -0.01).is_err());
        assert!(validate_price("price", f64::NAN).is_err());
        assert!(validate_price("price", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_price_range() {
        assert!(validate_price_range(1.0, 10.0).is_ok());
        assert!(validate_price_range(10.0, 10.0).is_ok());
        assert!(validate_price_range(10.0, 1.0).is_err());
        assert!(validate_price_range(-1.0, 10.0).is_err());
    }
}
