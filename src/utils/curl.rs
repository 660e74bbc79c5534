//! Renders a built request as a shell command for manual replay.

use reqwest::Request;

/// Renders `request` as a `curl` command line
///
/// Headers appear in the order the request carries them, followed by the body
/// (if it is an in-memory buffer) and the final URL including the query string.
///
/// # Examples
/// ```
/// use dm_account_client::utils::curl::to_curl;
///
/// let request = reqwest::Client::new()
///     .get("http://localhost/api/v2/messages?limit=5")
///     .build()
///     .unwrap();
/// assert_eq!(
///     to_curl(&request),
///     "curl -X GET 'http://localhost/api/v2/messages?limit=5'"
/// );
/// ```
pub fn to_curl(request: &Request) -> String {
    let mut parts = vec![format!("curl -X {}", request.method())];

    for (name, value) in request.headers() {
        let value = String::from_utf8_lossy(value.as_bytes());
        parts.push(format!("-H {}", shell_quote(&format!("{name}: {value}"))));
    }

    if let Some(body) = request.body().and_then(|b| b.as_bytes()) {
        parts.push(format!("-d {}", shell_quote(&String::from_utf8_lossy(body))));
    }

    parts.push(shell_quote(request.url().as_str()));
    parts.join(" ")
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
