/// Header carrying the session token returned by a successful login
pub const AUTH_TOKEN_HEADER: &str = "x-dm-auth-token";
/// Default base URL of the DM account service
pub const DEFAULT_DM_API_HOST: &str = "http://5.63.153.31:5051";
/// Default base URL of the MailHog capture service
pub const DEFAULT_MAILHOG_HOST: &str = "http://5.63.153.31:5025";
/// Default number of captured messages fetched per poll attempt
pub const DEFAULT_MAIL_LIMIT: u32 = 50;
/// Default number of fetch-and-scan attempts when polling for an activation token
pub const DEFAULT_POLL_ATTEMPTS: u32 = 5;
/// Default fixed delay in milliseconds between poll attempts
pub const DEFAULT_POLL_DELAY_MS: u64 = 1000;
/// Upper bound in milliseconds for the activation token to show up after registration
pub const DEFAULT_ACTIVATION_DEADLINE_MS: u64 = 3000;
/// User agent string sent with every request
pub const USER_AGENT: &str = "dm-account-client/0.1.0";
/// Title returned by the account service when payload validation fails
pub const VALIDATION_FAILED_TITLE: &str = "Validation failed";
/// Title returned by the account service when an inactive user tries to log in
pub const INACTIVE_USER_TITLE: &str =
    "User is inactive. Address the technical support for more details";
/// Domain used for generated test mailboxes
pub const TEST_EMAIL_DOMAIN: &str = "mail.ru";
