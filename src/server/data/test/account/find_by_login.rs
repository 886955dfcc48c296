use super::*;

/// Tests finding an existing account by login.
///
/// Verifies that the repository successfully retrieves an account record
/// when queried with a login that exists in the database.
///
/// Expected: Ok(Some(Account)) with matching account data
#[tokio::test]
async fn finds_existing_account() -> Result<(), DbErr> {
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
    let found = repo.find_by_login("vermeer").await?;

    assert!(found.is_some());
    let account = found.unwrap();
    assert_eq!(account.login, "vermeer");
    assert_eq!(account.email, "vermeer@example.com");
    assert_eq!(account.role_id, 3);

    Ok(())
}

/// Tests querying for a nonexistent login.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await?;

    let repo = AccountRepository::new(db);
    let found = repo.find_by_login("nobody").await?;

    assert!(found.is_none());

    Ok(())
}
