//! Registration, login and logout sequences.

use super::helpers::{Harness, harness};
use gotdone::auth::services::{LoginRequest, RegisterRequest};
use gotdone::error::{AppError, ErrorKind};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_signup_with_same_email_is_told_to_log_in(
    harness: Harness,
) -> Result<(), eyre::Report> {
    harness.signed_in("ada@example.com").await?;

    let Err(err) = harness
        .auth
        .register(RegisterRequest::new("ada@example.com", "other", "Imposter"))
        .await
    else {
        return Err(eyre::eyre!("duplicate signup accepted"));
    };
    let app_err = AppError::from(err);

    eyre::ensure!(app_err.kind() == ErrorKind::DuplicateEntity, "kind");
    eyre::ensure!(
        app_err.user_message() == "You've already signed up with that email, log in instead!",
        "message {}",
        app_err.user_message()
    );
    Ok(())
}

#[rstest]
#[case("nobody@example.com", "correct horse", "That email does not exist, please try again.")]
#[case("ada@example.com", "wrong horse", "Password incorrect, please try again.")]
#[tokio::test(flavor = "multi_thread")]
async fn failed_logins_flash_the_reason(
    harness: Harness,
    #[case] email: &str,
    #[case] password: &str,
    #[case] expected: &str,
) -> Result<(), eyre::Report> {
    harness.signed_in("ada@example.com").await?;

    let Err(err) = harness.auth.login(LoginRequest::new(email, password)).await else {
        return Err(eyre::eyre!("login should fail"));
    };

    eyre::ensure!(
        AppError::from(err).user_message() == expected,
        "unexpected message"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sessions_are_independent_per_login(harness: Harness) -> Result<(), eyre::Report> {
    let first = harness.signed_in("ada@example.com").await?;
    let second = harness
        .auth
        .login(LoginRequest::new("ada@example.com", "correct horse"))
        .await?;

    harness.auth.logout(Some(&first)).await?;

    eyre::ensure!(
        harness.auth.require_session(Some(&first)).await.is_err(),
        "logged-out session still valid"
    );
    let still_live = harness
        .auth
        .require_session(Some(second.token().as_str()))
        .await?;
    let account = harness.auth.current_account(&still_live).await?;
    eyre::ensure!(account.email().as_str() == "ada@example.com", "account");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_without_a_session_is_harmless(harness: Harness) -> Result<(), eyre::Report> {
    harness.auth.logout(None).await?;
    harness.auth.logout(Some("not-a-token")).await?;
    Ok(())
}
