use super::*;

use std::collections::VecDeque;

use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use wiremock::{
    matchers::{any, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        account::{PendingAccount, RegisterRequestParam},
        role::{ROLE_BASIC, ROLE_OPERATOR},
    },
    service::{password, registration::RegistrationService},
};

fn register_param(login: &str, email: &str, operator: bool) -> RegisterRequestParam {
    RegisterRequestParam {
        login: login.to_string(),
        email: email.to_string(),
        password: Secret::new("pearl earring".to_string()),
        want_to_be_operator: operator,
    }
}

/// Pulls the activation token out of the dispatched email body.
async fn activation_token(mock_server: &MockServer) -> String {
    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let text_body = body["TextBody"].as_str().unwrap();

    text_body
        .split("token=")
        .nth(1)
        .unwrap()
        .split_whitespace()
        .next()
        .unwrap()
        .to_string()
}

/// Tests the full two-phase workflow: request, then activate with the mailed token.
///
/// Verifies that exactly one account exists afterwards, with the requested
/// login, email, and default role, and that its stored hash verifies against
/// the original plaintext password.
///
/// Expected: one account, matching identity, verifiable hash
#[tokio::test]
async fn request_then_activate_creates_matching_account() {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await.unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = token_service();
    let mail = email_client(&mock_server);
    let app_url = app_url();
    let service = RegistrationService::new(db, &tokens, &mail, &app_url);

    service
        .request_registration(register_param("vermeer", "vermeer@example.com", false))
        .await
        .unwrap();

    // Phase 1 writes no account row
    assert_eq!(entity::prelude::Account::find().count(db).await.unwrap(), 0);

    let token = activation_token(&mock_server).await;
    let account = service.activate(&token).await.unwrap();

    assert_eq!(account.login, "vermeer");
    assert_eq!(account.email, "vermeer@example.com");
    assert_eq!(account.role_id, ROLE_BASIC);
    assert_eq!(account.api_key.len(), 32);
    assert!(account.created_at <= chrono::Utc::now());
    assert!(account.updated_at <= chrono::Utc::now());
    assert_eq!(entity::prelude::Account::find().count(db).await.unwrap(), 1);

    password::verify_password(
        account.hash.clone(),
        Secret::new("pearl earring".to_string()),
    )
    .await
    .unwrap();
}

/// Tests that the operator flag resolves to the elevated role.
///
/// Expected: activated account carries the operator role id
#[tokio::test]
async fn operator_flag_grants_operator_role() {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await.unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = token_service();
    let mail = email_client(&mock_server);
    let app_url = app_url();
    let service = RegistrationService::new(db, &tokens, &mail, &app_url);

    service
        .request_registration(register_param("rubens", "rubens@example.com", true))
        .await
        .unwrap();

    let token = activation_token(&mock_server).await;
    let account = service.activate(&token).await.unwrap();

    assert_eq!(account.role_id, ROLE_OPERATOR);
}

/// Tests that a taken login or email conflicts before any side effect.
///
/// The mail mock expects zero requests; wiremock verifies that on drop.
///
/// Expected: Err(IdentityTaken) for both collisions, no mail dispatched
#[tokio::test]
async fn duplicate_identity_conflicts_and_sends_no_mail() {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await.unwrap();

    factory::account::AccountFactory::new(db)
        .login("taken")
        .email("taken@example.com")
        .build()
        .await
        .unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let tokens = token_service();
    let mail = email_client(&mock_server);
    let app_url = app_url();
    let service = RegistrationService::new(db, &tokens, &mail, &app_url);

    let err = service
        .request_registration(register_param("taken", "fresh@example.com", false))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AuthErr(AuthError::IdentityTaken)));

    let err = service
        .request_registration(register_param("fresh", "taken@example.com", false))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AuthErr(AuthError::IdentityTaken)));
}

/// Tests that a failing mail API surfaces as a dispatch failure.
///
/// Expected: Err(MailDispatch), no account row
#[tokio::test]
async fn mail_failure_is_terminal_for_the_request() {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await.unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = token_service();
    let mail = email_client(&mock_server);
    let app_url = app_url();
    let service = RegistrationService::new(db, &tokens, &mail, &app_url);

    let err = service
        .request_registration(register_param("vermeer", "vermeer@example.com", false))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::AuthErr(AuthError::MailDispatch(_))));
    assert_eq!(entity::prelude::Account::find().count(db).await.unwrap(), 0);
}

/// Tests that a structurally invalid token is rejected without a create.
///
/// Expected: Err(UnauthorizedActivation), no account row
#[tokio::test]
async fn invalid_token_is_forbidden() {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await.unwrap();

    let mock_server = MockServer::start().await;
    let tokens = token_service();
    let mail = email_client(&mock_server);
    let app_url = app_url();
    let service = RegistrationService::new(db, &tokens, &mail, &app_url);

    let err = service.activate("definitely-not-a-token").await.unwrap_err();

    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::UnauthorizedActivation(_))
    ));
    assert_eq!(entity::prelude::Account::find().count(db).await.unwrap(), 0);
}

/// Tests activation losing the race against an account created in between.
///
/// A valid token is minted, then the identity is claimed by another create
/// before the token is consumed. The unique constraint rejects the second
/// create.
///
/// Expected: Err(AccountValidation), exactly one account
#[tokio::test]
async fn activation_racing_existing_identity_fails_validation() {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await.unwrap();

    let mock_server = MockServer::start().await;
    let tokens = token_service();
    let mail = email_client(&mock_server);
    let app_url = app_url();
    let service = RegistrationService::new(db, &tokens, &mail, &app_url);

    let token = tokens
        .sign_activation(
            &PendingAccount {
                login: "raced".to_string(),
                email: "raced@example.com".to_string(),
                api_key: "raced-key".to_string(),
                hash: factory::account::DUMMY_HASH.to_string(),
                role_id: ROLE_BASIC,
            },
            chrono::Utc::now(),
        )
        .unwrap();

    // The identity gets claimed while the token sits in the user's inbox
    factory::account::AccountFactory::new(db)
        .login("raced")
        .email("raced@example.com")
        .build()
        .await
        .unwrap();

    let err = service.activate(&token).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::AccountValidation(_))
    ));
    assert_eq!(entity::prelude::Account::find().count(db).await.unwrap(), 1);
}

/// Tests that replaying a consumed token is not idempotent.
///
/// The second activation attempts a second create and fails on the unique
/// constraint, indistinguishable from the race case.
///
/// Expected: first Ok, second Err(AccountValidation), exactly one account
#[tokio::test]
async fn replayed_token_fails_validation() {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await.unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = token_service();
    let mail = email_client(&mock_server);
    let app_url = app_url();
    let service = RegistrationService::new(db, &tokens, &mail, &app_url);

    service
        .request_registration(register_param("vermeer", "vermeer@example.com", false))
        .await
        .unwrap();

    let token = activation_token(&mock_server).await;
    service.activate(&token).await.unwrap();

    let err = service.activate(&token).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::AccountValidation(_))
    ));
    assert_eq!(entity::prelude::Account::find().count(db).await.unwrap(), 1);
}

/// Tests the retry-until-unique API key loop against injected collisions.
///
/// 1000 scripted candidates are drawn, three quarters of them colliding with
/// keys pre-inserted in the store. Every key the loop returns must be one the
/// store reported as free.
///
/// Expected: 250 returned keys, none of them in the occupied set
#[tokio::test]
async fn unique_api_key_never_returns_an_occupied_key() {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await.unwrap();

    let occupied: Vec<String> = (0..25).map(|i| format!("occupied_{}", i)).collect();
    for key in &occupied {
        factory::account::AccountFactory::new(db)
            .api_key(key)
            .build()
            .await
            .unwrap();
    }

    // Three collisions, then one free key, repeated over 1000 candidates
    let mut candidates: VecDeque<String> = VecDeque::new();
    for i in 0..1000 {
        if i % 4 == 3 {
            candidates.push_back(format!("free_{}", i));
        } else {
            candidates.push_back(occupied[i % occupied.len()].clone());
        }
    }

    let mock_server = MockServer::start().await;
    let tokens = token_service();
    let mail = email_client(&mock_server);
    let app_url = app_url();
    let service = RegistrationService::new(db, &tokens, &mail, &app_url);

    let mut returned = Vec::new();
    while !candidates.is_empty() {
        let key = service
            .unique_api_key(|| candidates.pop_front().expect("ran out of candidates"))
            .await
            .unwrap();
        returned.push(key);
    }

    assert_eq!(returned.len(), 250);
    for key in &returned {
        assert!(key.starts_with("free_"));
        assert!(!occupied.contains(key));
    }
}
