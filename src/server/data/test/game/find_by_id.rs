use super::*;

/// Tests finding a game that references a deleted monster.
///
/// The dangling identifier is still part of the stored list.
///
/// Expected: Ok(Some) with the identifier present
#[tokio::test]
async fn keeps_dangling_ids_in_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    factory::reference::attach(db, entity::reference::GAME_MONSTERS, game.id, 404).await?;

    let found = GameRepository::new(db).find_by_id(game.id).await?.unwrap();

    assert_eq!(found.monsters, vec![404]);

    Ok(())
}

/// Tests finding a game that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = GameRepository::new(db).find_by_id(1).await?;

    assert!(found.is_none());

    Ok(())
}
