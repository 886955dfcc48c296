use super::*;

/// Tests that a login hit alone is enough to report the identity as taken.
///
/// Expected: Ok(Some(Account)) when only the login matches
#[tokio::test]
async fn matches_on_login_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await?;

    factory::account::AccountFactory::new(db)
        .login("vermeer")
        .email("vermeer@example.com")
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let found = repo
        .find_by_login_or_email("vermeer", "other@example.com")
        .await?;

    assert!(found.is_some());

    Ok(())
}

/// Tests that an email hit alone is enough to report the identity as taken.
///
/// Expected: Ok(Some(Account)) when only the email matches
#[tokio::test]
async fn matches_on_email_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await?;

    factory::account::AccountFactory::new(db)
        .login("vermeer")
        .email("vermeer@example.com")
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let found = repo
        .find_by_login_or_email("other", "vermeer@example.com")
        .await?;

    assert!(found.is_some());

    Ok(())
}

/// Tests that a free login/email pair reports the identity as available.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_both_are_free() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await?;

    factory::account::AccountFactory::new(db)
        .login("vermeer")
        .email("vermeer@example.com")
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let found = repo
        .find_by_login_or_email("other", "other@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}
