use super::*;

/// Tests fetching ids at one rarity across seasons.
///
/// Verifies that objekts of other rarities are excluded and every season is included.
///
/// Expected: Ok with ids of the two tier 2 objekts in ascending order
#[tokio::test]
async fn returns_ids_across_seasons() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Objekt)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_objekt_in_season(db, "Atom01", 2).await?;
    factory::create_objekt_in_season(db, "Atom01", 3).await?;
    let b = factory::create_objekt_in_season(db, "Binary01", 2).await?;

    let repo = ObjektRepository::new(db);
    let ids = repo.ids_by_rarity(2).await?;

    assert_eq!(ids, vec![a.id, b.id]);

    Ok(())
}

/// Tests fetching ids at a rarity nothing is seeded for.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_missing_rarity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Objekt)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_objekt(db).await?;

    let repo = ObjektRepository::new(db);

    assert!(repo.ids_by_rarity(6).await?.is_empty());

    Ok(())
}
