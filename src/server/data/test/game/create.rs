use super::*;

/// Tests creating a game.
///
/// Expected: Ok with empty monster and dice lists
#[tokio::test]
async fn creates_game_with_empty_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = GameRepository::new(db)
        .create(CreateGameParam {
            name: "Raid".to_string(),
        })
        .await?;

    assert_eq!(game.name, "Raid");
    assert!(game.monsters.is_empty());
    assert!(game.dices.is_empty());

    Ok(())
}
