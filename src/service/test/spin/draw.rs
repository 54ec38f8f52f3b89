use super::*;

/// Tests a first spin for a new user.
///
/// Verifies that the objekt is granted, pity is created and incremented for a low
/// tier, and the como reward is added to the starting balance.
///
/// Expected: Ok with one copy, pity_count 1 and balance 110
#[tokio::test]
async fn grants_objekt_and_updates_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let objekt = factory::create_objekt_with_rarity(db, 1).await?;
    let gacha = gacha_always(1);
    let mut rng = StdRng::seed_from_u64(1);

    let service = SpinService::new(db, &gacha);
    let result = service.draw_with_rng(100, None, &mut rng).await?;

    assert_eq!(result.objekt.id, objekt.id);
    assert_eq!(result.copies, 1);
    assert_eq!(result.source, GrantSource::Natural);
    assert_eq!(result.pity_taken, None);
    assert_eq!(result.como_reward, 10);
    assert_eq!(result.balance, 110);
    assert_eq!(result.pity.pity_count, 1);

    let stored = PityRepository::new(db).find_by_user(100).await?;
    assert_eq!(stored, Some(result.pity));

    Ok(())
}

/// Tests drawing a duplicate.
///
/// Expected: Ok with copies incremented and rewards accumulated
#[tokio::test]
async fn duplicate_increments_copies() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let objekt = factory::create_objekt_with_rarity(db, 2).await?;
    let gacha = gacha_always(2);
    let mut rng = StdRng::seed_from_u64(2);

    let service = SpinService::new(db, &gacha);
    service.draw_with_rng(100, None, &mut rng).await?;
    let second = service.draw_with_rng(100, None, &mut rng).await?;

    assert_eq!(second.copies, 2);
    assert_eq!(second.balance, 200);
    assert_eq!(
        CollectionRepository::new(db).get_copies(100, objekt.id).await?,
        2
    );

    Ok(())
}

/// Tests that a high-tier draw resets general pity.
///
/// Expected: Ok with pity_count reset from 50 to 0
#[tokio::test]
async fn high_tier_resets_pity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_objekt_with_rarity(db, 5).await?;
    factory::pity::PityFactory::new(db, 100)
        .pity_count(50)
        .build()
        .await?;
    let gacha = gacha_always(5);
    let mut rng = StdRng::seed_from_u64(3);

    let result = SpinService::new(db, &gacha)
        .draw_with_rng(100, None, &mut rng)
        .await?;

    assert_eq!(result.objekt.rarity, 5);
    assert_eq!(result.como_reward, 750);
    assert_eq!(result.pity.pity_count, 0);

    Ok(())
}

/// Tests a seasonal banner.
///
/// Verifies that the pool is restricted to the banner's season.
///
/// Expected: Ok with only the Binary01 objekt ever granted
#[tokio::test]
async fn season_banner_restricts_pool() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_objekt_in_season(db, "Atom01", 3).await?;
    let binary = factory::create_objekt_in_season(db, "Binary01", 3).await?;
    let gacha = gacha_always(3);
    let banner = Banner::Season("Binary01".to_string());
    let mut rng = StdRng::seed_from_u64(4);

    let service = SpinService::new(db, &gacha);
    for _ in 0..10 {
        let result = service.draw_with_rng(100, Some(&banner), &mut rng).await?;
        assert_eq!(result.objekt.id, binary.id);
    }

    Ok(())
}

/// Tests tier 1 on a seasonal banner when the customs season takes every common.
///
/// Expected: Ok with the customs season objekt granted
#[tokio::test]
async fn banner_commons_can_come_from_customs_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_objekt_in_season(db, "Binary01", 1).await?;
    let customs = factory::create_objekt_in_season(db, "GNDSG01", 1).await?;
    let gacha = gacha_with(GachaConfig {
        rarity_weights: RarityWeights {
            tiers: vec![TierWeight { tier: 1, weight: 1.0 }],
        },
        banner: BannerWeights {
            banner_season_weight: 0.0,
            customs_season_weight: 1.0,
            ..BannerWeights::default()
        },
        ..GachaConfig::default()
    });
    let banner = Banner::Season("Binary01".to_string());
    let mut rng = StdRng::seed_from_u64(5);

    let result = SpinService::new(db, &gacha)
        .draw_with_rng(100, Some(&banner), &mut rng)
        .await?;

    assert_eq!(result.objekt.id, customs.id);

    Ok(())
}

/// Tests the rate-up banner.
///
/// Verifies that the rate-up tier is drawn from the rate-up season and that tiers
/// without a reward entry credit nothing.
///
/// Expected: Ok with the tier 7 objekt and balance unchanged at 100
#[tokio::test]
async fn rate_up_banner_grants_rate_up_tier() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_objekt_in_season(db, "Atom01", 7).await?;
    let rate_up = factory::create_objekt_in_season(db, "Atom02", 7).await?;
    let gacha = gacha_with(GachaConfig {
        banner: BannerWeights {
            rate_up_weight: 1.0,
            rate_up_common_weight: 0.0,
            ..BannerWeights::default()
        },
        ..GachaConfig::default()
    });
    let mut rng = StdRng::seed_from_u64(6);

    let result = SpinService::new(db, &gacha)
        .draw_with_rng(100, Some(&Banner::RateUp), &mut rng)
        .await?;

    assert_eq!(result.objekt.id, rate_up.id);
    assert_eq!(result.como_reward, 0);
    assert_eq!(result.balance, 100);
    // tier 7 is not a low tier
    assert_eq!(result.pity.pity_count, 0);

    Ok(())
}

/// Tests the production entry point with the default tables.
///
/// Expected: Ok with an objekt from the full catalog
#[tokio::test]
async fn draw_uses_default_tables() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gacha_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let catalog = factory::helpers::create_season_catalog(db, "Atom01").await?;
    let gacha = gacha_with(GachaConfig::default());

    let result = SpinService::new(db, &gacha).draw(100, None).await?;

    assert!(catalog.iter().any(|o| o.id == result.objekt.id));
    assert_eq!(result.copies, 1);

    Ok(())
}
