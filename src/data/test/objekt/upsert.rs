use super::*;

fn param(season: &str, member: &str, series: &str, rarity: i32) -> CreateObjektParam {
    CreateObjektParam {
        season: season.to_string(),
        member: member.to_string(),
        series: series.to_string(),
        class: "First".to_string(),
        rarity,
        image_url: None,
        background_color: None,
    }
}

/// Tests inserting a new catalog entry.
///
/// Verifies that the slug is derived from season, member and series in lower case.
///
/// Expected: Ok with objekt stored under the derived slug
#[tokio::test]
async fn inserts_new_objekt() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Objekt)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ObjektRepository::new(db);
    let objekt = repo.upsert(param("Atom01", "Nien", "301", 3)).await?;

    assert_eq!(objekt.slug, "atom01-nien-301");
    assert_eq!(objekt.rarity, 3);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests upserting an entry whose slug already exists.
///
/// Verifies that the existing row keeps its id and takes the new field values.
///
/// Expected: Ok with one row and updated rarity
#[tokio::test]
async fn updates_existing_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Objekt)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ObjektRepository::new(db);
    let first = repo.upsert(param("Atom01", "Nien", "301", 3)).await?;
    let second = repo.upsert(param("Atom01", "Nien", "301", 5)).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.rarity, 5);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
