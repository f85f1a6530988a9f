use super::*;

/// Tests bulk lookup with an unknown identifier in the input.
///
/// Expected: Ok with only the existing monsters
#[tokio::test]
async fn skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let goblin = factory::create_monster(db).await?;
    let orc = factory::create_monster(db).await?;

    let monsters = MonsterRepository::new(db)
        .find_by_ids(&[orc.id, 999, goblin.id])
        .await?;

    let ids: Vec<i32> = monsters.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![goblin.id, orc.id]);

    Ok(())
}

/// Tests bulk lookup with no identifiers.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_monster(db).await?;

    let monsters = MonsterRepository::new(db).find_by_ids(&[]).await?;

    assert!(monsters.is_empty());

    Ok(())
}
