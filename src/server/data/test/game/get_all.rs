use super::*;

/// Tests listing games with both reference lists.
///
/// Expected: Ok with each game's monster and dice identifiers
#[tokio::test]
async fn gets_all_games_with_reference_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (raid, monster, dice) = factory::helpers::create_game_with_children(db).await?;
    let empty = factory::create_game(db).await?;

    let games = GameRepository::new(db).get_all().await?;

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].id, raid.id);
    assert_eq!(games[0].monsters, vec![monster.id]);
    assert_eq!(games[0].dices, vec![dice.id]);
    assert_eq!(games[1].id, empty.id);
    assert!(games[1].monsters.is_empty());
    assert!(games[1].dices.is_empty());

    Ok(())
}
