use super::*;

/// Tests removing one of several copies.
///
/// Expected: Ok(Some(1)) with the row kept
#[tokio::test]
async fn decrements_copies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let objekt = factory::create_objekt(db).await?;
    factory::create_collection_entry(db, 10, objekt.id, 2).await?;

    let repo = CollectionRepository::new(db);
    let left = repo.revoke(10, objekt.id).await?;

    assert_eq!(left, Some(1));
    assert_eq!(repo.get_copies(10, objekt.id).await?, 1);

    Ok(())
}

/// Tests removing the last copy.
///
/// Verifies that the row is deleted so the objekt counts as unowned again.
///
/// Expected: Ok(Some(0)) and no owned ids
#[tokio::test]
async fn deletes_row_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let objekt = factory::create_objekt(db).await?;
    factory::create_collection_entry(db, 10, objekt.id, 1).await?;

    let repo = CollectionRepository::new(db);
    let left = repo.revoke(10, objekt.id).await?;

    assert_eq!(left, Some(0));
    assert!(repo.owned_objekt_ids(10).await?.is_empty());

    Ok(())
}

/// Tests revoking an objekt the user does not own.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_not_owned() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let objekt = factory::create_objekt(db).await?;

    let repo = CollectionRepository::new(db);

    assert_eq!(repo.revoke(10, objekt.id).await?, None);

    Ok(())
}
