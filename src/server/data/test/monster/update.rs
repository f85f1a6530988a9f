use super::*;

/// Tests replacing a monster's fields with a new picture link.
///
/// Expected: Ok(Some) with every field replaced
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let monster = factory::monster::MonsterFactory::new(db)
        .picture_link("old.png")
        .build()
        .await?;

    let updated = MonsterRepository::new(db)
        .update(monster.id, update_param(Some("new.png")))
        .await?
        .unwrap();

    assert_eq!(updated.name, "Goblin King");
    assert_eq!(updated.health, 40);
    assert_eq!(updated.x, 3.5);
    assert_eq!(updated.y, 1.0);
    assert_eq!(updated.picture_link, "new.png");

    Ok(())
}

/// Tests that a missing or empty picture link keeps the stored one.
///
/// Expected: Ok(Some) with the original picture link both times
#[tokio::test]
async fn keeps_picture_link_when_absent_or_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let monster = factory::monster::MonsterFactory::new(db)
        .picture_link("old.png")
        .build()
        .await?;
    let repo = MonsterRepository::new(db);

    let updated = repo.update(monster.id, update_param(None)).await?.unwrap();
    assert_eq!(updated.picture_link, "old.png");
    assert_eq!(updated.name, "Goblin King");

    let updated = repo
        .update(monster.id, update_param(Some("")))
        .await?
        .unwrap();
    assert_eq!(updated.picture_link, "old.png");

    Ok(())
}

/// Tests that updating keeps the monster's dice list.
///
/// Expected: Ok(Some) with the attached dice identifiers
#[tokio::test]
async fn keeps_attached_dices() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let monster = factory::create_monster(db).await?;
    let dice = factory::create_dice(db).await?;
    factory::reference::attach(db, entity::reference::MONSTER_DICES, monster.id, dice.id).await?;

    let updated = MonsterRepository::new(db)
        .update(monster.id, update_param(None))
        .await?
        .unwrap();

    assert_eq!(updated.dices, vec![dice.id]);

    Ok(())
}

/// Tests updating a monster that does not exist.
///
/// Expected: Ok(None) and nothing inserted
#[tokio::test]
async fn returns_none_for_missing_monster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MonsterRepository::new(db);
    let updated = repo.update(42, update_param(None)).await?;

    assert!(updated.is_none());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
