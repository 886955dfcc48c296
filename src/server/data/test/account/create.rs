use super::*;

fn new_account_param(login: &str, email: &str, api_key: &str) -> NewAccountParam {
    NewAccountParam {
        login: login.to_string(),
        email: email.to_string(),
        api_key: api_key.to_string(),
        hash: test_utils::factory::account::DUMMY_HASH.to_string(),
        role_id: 3,
    }
}

/// Tests creating an account from a verified pending registration.
///
/// Expected: Ok(Account) with generated id and matching fields
#[tokio::test]
async fn creates_account_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await?;

    let repo = AccountRepository::new(db);
    let account = repo
        .create(new_account_param("vermeer", "vermeer@example.com", "key-1"))
        .await?;

    assert!(account.id > 0);
    assert_eq!(account.login, "vermeer");
    assert_eq!(account.email, "vermeer@example.com");
    assert_eq!(account.api_key, "key-1");
    assert_eq!(account.role_id, 3);

    Ok(())
}

/// Tests that a duplicate login is rejected by the unique constraint.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await?;

    let repo = AccountRepository::new(db);
    repo.create(new_account_param("vermeer", "vermeer@example.com", "key-1"))
        .await?;

    let err = repo
        .create(new_account_param("vermeer", "other@example.com", "key-2"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a duplicate email is rejected by the unique constraint.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await?;

    let repo = AccountRepository::new(db);
    repo.create(new_account_param("vermeer", "vermeer@example.com", "key-1"))
        .await?;

    let err = repo
        .create(new_account_param("other", "vermeer@example.com", "key-2"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a duplicate API key is rejected by the unique constraint.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_api_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await?;

    let repo = AccountRepository::new(db);
    repo.create(new_account_param("vermeer", "vermeer@example.com", "key-1"))
        .await?;

    let err = repo
        .create(new_account_param("other", "other@example.com", "key-1"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
