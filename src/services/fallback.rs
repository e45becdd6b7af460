//! Degrading accessors for best-effort fetches.
//!
//! Secondary data never fails a search. Each call site turns its `Result`
//! into an `Option` here, logging what was lost, and then applies its own
//! fallback value.

use crate::error::AppError;

/// Converts a failed fetch into `None`, logging a warning tagged with `slice`.
pub fn settle<T>(slice: &str, result: Result<T, AppError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(slice, error = %e, "Secondary fetch failed; degrading");
            None
        }
    }
}

/// Like [`settle`], but falls back to `T::default()`.
pub fn settle_or_default<T: Default>(slice: &str, result: Result<T, AppError>) -> T {
    settle(slice, result).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_keeps_success() {
        assert_eq!(settle("species", Ok::<_, AppError>(3)), Some(3));
    }

    #[test]
    fn test_settle_degrades_failure() {
        let failed: Result<Vec<u32>, AppError> = Err(AppError::Status {
            url: "https://pokeapi.co/api/v2/pokemon/1/encounters".to_string(),
            status: 503,
        });
        assert_eq!(settle_or_default("encounters", failed), Vec::<u32>::new());
    }
}
