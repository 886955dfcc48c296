use super::*;

use chrono::{Duration, Utc};
use test_utils::factory::commission::CommissionFactory;
use test_utils::factory::helpers::create_account_with_relations;

/// Tests querying the detail composition for a missing account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await?;

    let repo = AccountRepository::new(db);

    assert!(repo.find_detail(999).await?.is_none());

    Ok(())
}

/// Tests composing the full relation graph of an account.
///
/// Verifies that role, operator profile, client profile, avatar image, and
/// statistics are all loaded and that the statistics projection carries the
/// account id and request count.
///
/// Expected: Ok(Some(AccountDetail)) with every relation populated
#[tokio::test]
async fn composes_full_relation_graph() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, operator, client) = create_account_with_relations(db).await?;
    factory::create_commission(db, client.id, operator.id).await?;

    let repo = AccountRepository::new(db);
    let detail = repo.find_detail(account.id).await?.unwrap();

    assert_eq!(detail.id, account.id);
    assert_eq!(detail.login, account.login);
    assert_eq!(detail.email, account.email);
    assert_eq!(detail.role.name, "basic");

    let operator_profile = detail.operator.unwrap();
    assert_eq!(operator_profile.id, operator.id);
    assert_eq!(operator_profile.commission_ids.len(), 1);

    let client_profile = detail.client.unwrap();
    assert_eq!(client_profile.id, client.id);
    assert_eq!(client_profile.commission_ids.len(), 1);

    assert!(detail.image.is_some());

    let statistics = detail.statistics.unwrap();
    assert_eq!(statistics.account_id, account.id);
    assert_eq!(statistics.number_of_requests, 0);

    Ok(())
}

/// Tests that related commissions come back newest-first on both sides.
///
/// Three commissions are created with ascending pinned timestamps; the
/// composed lists must hold their ids in reverse creation order.
///
/// Expected: commission ids ordered by created_at descending
#[tokio::test]
async fn orders_commissions_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, operator, client) = create_account_with_relations(db).await?;

    let base = Utc::now();
    let oldest = CommissionFactory::new(db, client.id, operator.id)
        .created_at(base - Duration::hours(2))
        .build()
        .await?;
    let middle = CommissionFactory::new(db, client.id, operator.id)
        .created_at(base - Duration::hours(1))
        .build()
        .await?;
    let newest = CommissionFactory::new(db, client.id, operator.id)
        .created_at(base)
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let detail = repo.find_detail(account.id).await?.unwrap();

    let expected = vec![newest.id, middle.id, oldest.id];
    assert_eq!(detail.operator.unwrap().commission_ids, expected);
    assert_eq!(detail.client.unwrap().commission_ids, expected);

    Ok(())
}

/// Tests composing an account that has no profiles, avatar, or statistics.
///
/// Expected: Ok(Some(AccountDetail)) with all optional relations absent
#[tokio::test]
async fn account_without_relations_composes_bare_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::seed_roles(db).await?;

    let account = factory::create_account(db).await?;

    let repo = AccountRepository::new(db);
    let detail = repo.find_detail(account.id).await?.unwrap();

    assert!(detail.operator.is_none());
    assert!(detail.client.is_none());
    assert!(detail.image.is_none());
    assert!(detail.statistics.is_none());

    Ok(())
}
