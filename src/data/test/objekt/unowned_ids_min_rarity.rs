use super::*;

/// Tests listing high-tier objekts a user does not own.
///
/// Verifies that owned objekts and objekts below the minimum rarity are excluded.
///
/// Expected: Ok with the unowned tier 4 and tier 6 ids
#[tokio::test]
async fn excludes_owned_and_low_tier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let catalog = factory::helpers::create_season_catalog(db, "Atom01").await?;
    // catalog[n] has rarity n + 1
    factory::create_collection_entry(db, 7, catalog[4].id, 1).await?;

    let repo = ObjektRepository::new(db);
    let ids = repo.unowned_ids_min_rarity(7, 4, None).await?;

    assert_eq!(ids, vec![catalog[3].id, catalog[5].id]);

    Ok(())
}

/// Tests that another user's collection does not affect the result.
///
/// Expected: Ok with every objekt at or above the minimum rarity
#[tokio::test]
async fn ignores_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let catalog = factory::helpers::create_season_catalog(db, "Atom01").await?;
    factory::create_collection_entry(db, 8, catalog[5].id, 3).await?;

    let repo = ObjektRepository::new(db);
    let ids = repo.unowned_ids_min_rarity(7, 6, None).await?;

    assert_eq!(ids, vec![catalog[5].id]);

    Ok(())
}

/// Tests restricting the guarantee pool to a season.
///
/// Expected: Ok with only the unowned objekts from that season
#[tokio::test]
async fn filters_by_season() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let atom = factory::create_objekt_in_season(db, "Atom01", 5).await?;
    factory::create_objekt_in_season(db, "Binary01", 5).await?;

    let repo = ObjektRepository::new(db);
    let ids = repo.unowned_ids_min_rarity(7, 4, Some("Atom01")).await?;

    assert_eq!(ids, vec![atom.id]);

    Ok(())
}

/// Tests a user who owns every qualifying objekt.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_when_everything_owned() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let objekt = factory::create_objekt_with_rarity(db, 6).await?;
    factory::create_collection_entry(db, 7, objekt.id, 1).await?;

    let repo = ObjektRepository::new(db);

    assert!(repo.unowned_ids_min_rarity(7, 4, None).await?.is_empty());

    Ok(())
}

/// Tests a user whose collection covers most of a large high-tier catalog.
///
/// Verifies that ownership is resolved by the database rather than a bound id
/// list, so the only unowned objekt is found among hundreds of owned ones.
///
/// Expected: Ok with the single unowned id
#[tokio::test]
async fn finds_unowned_in_large_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut remaining = None;
    for i in 0..300 {
        let objekt = factory::create_objekt_with_rarity(db, 4 + i % 3).await?;
        if i == 150 {
            remaining = Some(objekt.id);
        } else {
            factory::create_collection_entry(db, 7, objekt.id, 1).await?;
        }
    }

    let repo = ObjektRepository::new(db);
    let ids = repo.unowned_ids_min_rarity(7, 4, None).await?;

    assert_eq!(ids, remaining.into_iter().collect::<Vec<_>>());

    Ok(())
}
