// Common utilities for integration tests

use dm_account_client::prelude::*;

/// Test user with a login that is unique per run
pub struct TestUser {
    pub login: String,
    pub password: String,
    pub email: String,
}

/// Generates a fresh `golovan_...` user
pub fn prepare_user() -> TestUser {
    let login = unique_login("golovan");
    TestUser {
        email: unique_email(&login),
        password: "112233".to_string(),
        login,
    }
}

/// Builds the helper from `.env` and the process environment
pub fn create_account_helper() -> AccountHelper {
    setup_logger();
    let config = Config::new();
    let account = DmApiAccount::new(config.account.clone()).expect("Failed to build account facade");
    let mailhog = MailHogApi::new(config.mailhog.clone()).expect("Failed to build mailhog facade");
    AccountHelper::new(account, mailhog).with_poll_config(config.poll)
}

/// Registers and activates `user`
pub async fn register(helper: &AccountHelper, user: &TestUser) {
    helper
        .register_new_user(&user.login, &user.password, &user.email)
        .await
        .expect("Failed to register user");
}
