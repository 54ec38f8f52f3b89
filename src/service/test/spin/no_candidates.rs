use super::*;

/// Tests an empty pool for a banner season.
///
/// Verifies that the spin fails with the tier and season and that no pity row,
/// collection row or balance is written.
///
/// Expected: Err(NoCandidates { rarity: 6, season: Some("Atom01") })
#[tokio::test]
async fn empty_pool_fails_without_writes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_objekt_in_season(db, "Atom01", 1).await?;
    factory::create_objekt_in_season(db, "Binary01", 6).await?;
    let gacha = gacha_always(6);
    let banner = Banner::Season("Atom01".to_string());
    let mut rng = StdRng::seed_from_u64(7);

    let result = SpinService::new(db, &gacha)
        .draw_with_rng(100, Some(&banner), &mut rng)
        .await;

    assert!(matches!(
        result,
        Err(AppError::GachaErr(GachaError::NoCandidates {
            rarity: 6,
            season: Some(ref season),
        })) if season == "Atom01"
    ));
    assert!(PityRepository::new(db).find_by_user(100).await?.is_none());
    assert!(entity::prelude::Collection::find().all(db).await?.is_empty());
    assert!(entity::prelude::Economy::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests an empty pool for a user with existing counters.
///
/// Expected: Err(NoCandidates) with the stored pity state unchanged
#[tokio::test]
async fn empty_pool_keeps_existing_pity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::pity::PityFactory::new(db, 100)
        .pity_count(79)
        .chase("atom01-nien-301", 120)
        .build()
        .await?;
    let gacha = gacha_always(1);
    let mut rng = StdRng::seed_from_u64(8);

    let result = SpinService::new(db, &gacha)
        .draw_with_rng(100, None, &mut rng)
        .await;

    assert!(matches!(
        result,
        Err(AppError::GachaErr(GachaError::NoCandidates { rarity: 1, season: None }))
    ));
    assert_eq!(
        PityRepository::new(db).find_by_user(100).await?,
        Some(PityState {
            user_id: 100,
            pity_count: 79,
            chase_objekt_slug: Some("atom01-nien-301".to_string()),
            chase_pity_count: 120,
        })
    );

    Ok(())
}
