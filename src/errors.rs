use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("user {operator} is not an admin")]
    PermissionDenied { operator: i64 },

    #[error("not a valid Telegram user id: {0:?}")]
    MalformedId(String),

    #[error("store access failed: {0}")]
    Store(#[from] anyhow::Error),
}

/// Parses the free-text reply to the "add admin" prompt.
pub fn parse_admin_id(text: &str) -> Result<i64, AdminError> {
    let trimmed = text.trim();
    match trimmed.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AdminError::MalformedId(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_admin_id() {
        assert_eq!(parse_admin_id("123456").unwrap(), 123456);
        assert_eq!(parse_admin_id("  7727813191 \n").unwrap(), 7727813191);
    }

    #[test]
    fn test_parse_admin_id_rejects_garbage() {
        for input in ["", "abc", "12a", "-5", "0", "1.5"] {
            assert!(
                matches!(parse_admin_id(input), Err(AdminError::MalformedId(_))),
                "accepted {:?}",
                input
            );
        }
    }
}
