use super::*;

/// Tests persisting updated counters.
///
/// Expected: Ok with every field written
#[tokio::test]
async fn writes_all_counters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_pity(db, 9).await?;

    let state = PityState {
        user_id: 9,
        pity_count: 33,
        chase_objekt_slug: Some("binary01-kaede-101".to_string()),
        chase_pity_count: 120,
    };

    let repo = PityRepository::new(db);
    repo.save(&state).await?;

    assert_eq!(repo.find_by_user(9).await?, Some(state));

    Ok(())
}

/// Tests clearing a chase.
///
/// Verifies that a `None` slug is written as NULL.
///
/// Expected: Ok with no chase slug stored
#[tokio::test]
async fn clears_chase_slug() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::pity::PityFactory::new(db, 9)
        .chase("atom01-nien-301", 200)
        .build()
        .await?;

    let repo = PityRepository::new(db);
    repo.save(&PityState::new(9)).await?;

    let stored = repo.find_by_user(9).await?.unwrap();
    assert!(!stored.is_chasing());
    assert_eq!(stored.chase_pity_count, 0);

    Ok(())
}

/// Tests saving state for a user without a pity row.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_without_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PityRepository::new(db);
    let result = repo.save(&PityState::new(9)).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
