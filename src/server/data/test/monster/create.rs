use super::*;

/// Tests creating a monster.
///
/// Expected: Ok with the given fields and no dice attached
#[tokio::test]
async fn creates_monster_without_dices() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let monster = MonsterRepository::new(db)
        .create(CreateMonsterParam {
            name: "Goblin".to_string(),
            health: 7,
            x: 0.0,
            y: 2.5,
            picture_link: "goblin.png".to_string(),
        })
        .await?;

    assert_eq!(monster.name, "Goblin");
    assert_eq!(monster.health, 7);
    assert_eq!(monster.y, 2.5);
    assert_eq!(monster.picture_link, "goblin.png");
    assert!(monster.dices.is_empty());

    Ok(())
}

/// Tests that listing monsters includes their dice identifiers.
///
/// Expected: Ok with every monster and its attached dice in order
#[tokio::test]
async fn gets_all_monsters_with_dice_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let goblin = factory::create_monster(db).await?;
    let orc = factory::create_monster(db).await?;
    let d6 = factory::dice::DiceFactory::new(db).dice_type(6).build().await?;
    let d8 = factory::dice::DiceFactory::new(db).dice_type(8).build().await?;
    factory::reference::attach(db, entity::reference::MONSTER_DICES, orc.id, d8.id).await?;
    factory::reference::attach(db, entity::reference::MONSTER_DICES, orc.id, d6.id).await?;

    let monsters = MonsterRepository::new(db).get_all().await?;

    assert_eq!(monsters.len(), 2);
    assert_eq!(monsters[0].id, goblin.id);
    assert!(monsters[0].dices.is_empty());
    assert_eq!(monsters[1].dices, vec![d8.id, d6.id]);

    Ok(())
}
