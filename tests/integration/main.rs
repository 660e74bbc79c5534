// Live scenarios against a running account service and MailHog.
// Run with `cargo test --test integration_tests -- --ignored`.

mod common;
