use super::*;

/// Tests granting an objekt the user does not own yet.
///
/// Expected: Ok(1) with a new collection row
#[tokio::test]
async fn creates_row_on_first_copy() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let objekt = factory::create_objekt(db).await?;

    let repo = CollectionRepository::new(db);
    let copies = repo.grant(10, objekt.id).await?;

    assert_eq!(copies, 1);
    assert_eq!(repo.get_copies(10, objekt.id).await?, 1);

    Ok(())
}

/// Tests granting a duplicate.
///
/// Verifies that the existing row is incremented rather than a second row inserted.
///
/// Expected: Ok(3) and a single owned id
#[tokio::test]
async fn increments_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let objekt = factory::create_objekt(db).await?;
    factory::create_collection_entry(db, 10, objekt.id, 2).await?;

    let repo = CollectionRepository::new(db);
    let copies = repo.grant(10, objekt.id).await?;

    assert_eq!(copies, 3);
    assert_eq!(repo.owned_objekt_ids(10).await?, vec![objekt.id]);

    Ok(())
}

/// Tests reading copies of an objekt the user never received.
///
/// Expected: Ok(0)
#[tokio::test]
async fn get_copies_defaults_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let objekt = factory::create_objekt(db).await?;

    let repo = CollectionRepository::new(db);

    assert_eq!(repo.get_copies(10, objekt.id).await?, 0);

    Ok(())
}
