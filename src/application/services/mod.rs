/// Account resource client
pub mod account_api;
/// Login resource client
pub mod login_api;
/// MailHog client
pub mod mailhog_api;

pub use account_api::AccountApi;
pub use login_api::LoginApi;
pub use mailhog_api::MailhogApi;
