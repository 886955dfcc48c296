use super::*;

/// Tests that an assigned API key is reported as in use.
///
/// Expected: Ok(true)
#[tokio::test]
async fn reports_assigned_key_as_used() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await?;

    factory::account::AccountFactory::new(db)
        .api_key("occupied-key")
        .build()
        .await?;

    let repo = AccountRepository::new(db);

    assert!(repo.api_key_in_use("occupied-key").await?);

    Ok(())
}

/// Tests that an unassigned API key is reported as free.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_unassigned_key_as_free() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await?;

    let repo = AccountRepository::new(db);

    assert!(!repo.api_key_in_use("free-key").await?);

    Ok(())
}
