use crate::constants::TEST_EMAIL_DOMAIN;
use chrono::Local;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Generates a unique identifier as an optional `String`.
///
/// This function creates a 30-character long unique identifier composed of
/// uppercase English letters (`A-Z`) and numbers (`0-9`) using the `nanoid`
/// library. It tags every logged request/response pair so the two events
/// can be matched in the log stream.
///
/// # Examples
/// ```
/// use dm_account_client::utils::id::get_id;
/// let unique_id = get_id();
/// if let Some(id) = unique_id {
///     println!("Generated ID: {}", id);
/// }
/// ```
pub fn get_id() -> Option<String> {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    Some(nanoid::nanoid!(30, &alphabet))
}

/// Builds a login that is unique per microsecond: `{prefix}_{dd_mm_YYYY_HH_MM_SS_ffffff}`
///
/// Activation mails are matched by login, so every scenario needs its own.
///
/// # Examples
/// ```
/// use dm_account_client::utils::id::unique_login;
/// let login = unique_login("golovan");
/// assert!(login.starts_with("golovan_"));
/// ```
pub fn unique_login(prefix: &str) -> String {
    format!("{prefix}_{}", Local::now().format("%d_%m_%Y_%H_%M_%S_%6f"))
}

/// Mailbox for a generated login
pub fn unique_email(login: &str) -> String {
    format!("{login}@{TEST_EMAIL_DOMAIN}")
}

/// Random alphanumeric password of `length` characters
pub fn random_password(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
