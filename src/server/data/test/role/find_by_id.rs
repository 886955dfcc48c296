use super::*;

/// Tests finding each role of the seeded closed set by id.
///
/// Expected: Ok(Some(Role)) with the seeded name for ids 1-3
#[tokio::test]
async fn finds_seeded_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await?;

    let repo = RoleRepository::new(db);

    for (id, name) in [
        (ROLE_ADMIN, "admin"),
        (ROLE_OPERATOR, "operator"),
        (ROLE_BASIC, "basic"),
    ] {
        let role = repo.find_by_id(id).await?.unwrap();
        assert_eq!(role.id, id);
        assert_eq!(role.name, name);
    }

    Ok(())
}

/// Tests querying for a role outside the closed set.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await?;

    let repo = RoleRepository::new(db);

    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}
