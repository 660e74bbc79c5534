/// Service facades over the account and MailHog backends
pub mod client;
/// Application configuration module
pub mod config;
/// Multi-step user-lifecycle flows
pub mod helper;
/// Resource clients, one per endpoint group
pub mod services;
