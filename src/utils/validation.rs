use crate::utils::error::{NumlinesError, Result};
use std::path::Path;

/// Unwraps an optional path argument, rejecting an absent value.
pub fn require_path(path: Option<&str>) -> Result<&str> {
    path.ok_or(NumlinesError::MissingPath)
}

/// Checks that `path` names an existing regular file. An empty string, a
/// missing path, and a directory are all rejected the same way.
pub fn validate_input_file(path: &str) -> Result<()> {
    if path.is_empty() || !Path::new(path).is_file() {
        return Err(NumlinesError::FileNotFound {
            path: path.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_path() {
        assert_eq!(require_path(Some("data.txt")).unwrap(), "data.txt");
        assert!(matches!(
            require_path(None),
            Err(NumlinesError::MissingPath)
        ));
    }

    #[test]
    fn test_validate_input_file() {
        assert!(validate_input_file("").is_err());
        assert!(validate_input_file("/this/path/definitely/does/not/exist.txt").is_err());
        // A directory is not a readable input file.
        assert!(validate_input_file("/tmp").is_err());
    }
}
