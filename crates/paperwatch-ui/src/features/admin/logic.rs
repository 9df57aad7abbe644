//! Configuration form parsing helpers.
//!
//! # Design
//! - Treat empty inputs as unset values.
//! - Validate numeric ranges client-side so a broken field never reaches
//!   the network.

pub(crate) fn parse_optional_u32(field: &str, value: &str) -> Result<Option<u32>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let parsed = trimmed
        .parse::<u32>()
        .map_err(|_| format!("{field} must be a positive integer"))?;
    if parsed == 0 {
        return Err(format!("{field} must be a positive integer"));
    }
    Ok(Some(parsed))
}

pub(crate) fn parse_optional_u16(field: &str, value: &str) -> Result<Option<u16>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let parsed = trimmed
        .parse::<u16>()
        .map_err(|_| format!("{field} must be an integer between 1 and 65535"))?;
    if parsed == 0 {
        return Err(format!("{field} must be an integer between 1 and 65535"));
    }
    Ok(Some(parsed))
}

pub(crate) fn parse_optional_f64(field: &str, value: &str) -> Result<Option<f64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let parsed = trimmed
        .parse::<f64>()
        .map_err(|_| format!("{field} must be a number"))?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(format!("{field} must be a non-negative number"));
    }
    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::{parse_optional_f64, parse_optional_u16, parse_optional_u32};

    #[test]
    fn empty_inputs_are_unset() {
        assert_eq!(parse_optional_u32("interval", "  "), Ok(None));
        assert_eq!(parse_optional_u16("port", ""), Ok(None));
        assert_eq!(parse_optional_f64("gap", ""), Ok(None));
    }

    #[test]
    fn invalid_numbers_name_the_field() {
        let err = parse_optional_u32("check interval", "abc").unwrap_err();
        assert!(err.contains("check interval"));
        assert!(parse_optional_u32("check interval", "0").is_err());
        assert!(parse_optional_u16("SMTP port", "70000").is_err());
        assert!(parse_optional_f64("request gap", "-1").is_err());
    }

    #[test]
    fn valid_numbers_parse() {
        assert_eq!(parse_optional_u32("interval", "30"), Ok(Some(30)));
        assert_eq!(parse_optional_u16("port", "587"), Ok(Some(587)));
        assert_eq!(parse_optional_f64("gap", "1.5"), Ok(Some(1.5)));
    }
}
