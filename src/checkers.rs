//! Assertions on HTTP outcomes for negative-path scenarios.

use crate::error::AppError;
use reqwest::StatusCode;

/// Checks that `result` ended with `expected_status` and `expected_message`
///
/// - `Err(AppError::Http)`: status and error `title` must both match.
/// - `Ok(value)`: only acceptable when `200 OK` with an empty message was
///   expected; the value is handed back.
/// - any other error is returned unchanged.
///
/// Mismatches become [`AppError::Assertion`].
///
/// # Examples
/// ```no_run
/// # use dm_account_client::prelude::*;
/// # async fn run(helper: &AccountHelper) -> Result<(), AppError> {
/// let result = helper.register_new_user("1", "pw123456", "user@mail.test").await;
/// check_status_code_http(result, StatusCode::BAD_REQUEST, "Validation failed")?;
/// # Ok(())
/// # }
/// ```
pub fn check_status_code_http<T>(
    result: Result<T, AppError>,
    expected_status: StatusCode,
    expected_message: &str,
) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => {
            if expected_status != StatusCode::OK {
                return Err(AppError::Assertion(format!(
                    "expected status {expected_status}, but the request succeeded"
                )));
            }
            if !expected_message.is_empty() {
                return Err(AppError::Assertion(format!(
                    "expected message {expected_message:?}, but the request succeeded"
                )));
            }
            Ok(Some(value))
        }
        Err(AppError::Http(e)) => {
            if e.status != expected_status {
                return Err(AppError::Assertion(format!(
                    "expected status {expected_status}, got {}: {}",
                    e.status, e.body
                )));
            }
            if e.message() != expected_message {
                return Err(AppError::Assertion(format!(
                    "expected message {expected_message:?}, got {:?}",
                    e.message()
                )));
            }
            Ok(None)
        }
        Err(other) => Err(other),
    }
}
