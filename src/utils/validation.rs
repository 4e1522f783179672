use validator::Validate;

use crate::error::{Error, Result};

/// Runs the derived validators, reporting failures as unprocessable input.
pub fn validate_payload<T: Validate>(val: &T) -> Result<()> {
    val.validate()
        .map_err(|e| Error::from(e).into_unprocessable())
}

/// Trims surrounding whitespace and rejects text that is left empty.
pub fn non_blank(field: &str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Unprocessable(format!("{} must not be blank", field)));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank("answer", "  Agra ".into()).unwrap(), "Agra");
    }

    #[test]
    fn non_blank_rejects_whitespace() {
        let err = non_blank("question", " \t".into()).unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    }
}
