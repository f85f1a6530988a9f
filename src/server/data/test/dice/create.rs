use super::*;

/// Tests creating a dice with an objective.
///
/// Expected: Ok with the dice type stored as its face count
#[tokio::test]
async fn creates_dice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dice = DiceRepository::new(db)
        .create(CreateDiceParam {
            name: "Initiative".to_string(),
            number: 1,
            dice_type: DiceType::D20,
            bonus: 2,
            objective: Some(12),
        })
        .await?;

    assert_eq!(dice.name, "Initiative");
    assert_eq!(dice.dice_type, DiceType::D20);
    assert_eq!(dice.objective, Some(12));

    let stored = entity::prelude::Dice::find_by_id(dice.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.dice_type, 20);

    Ok(())
}

/// Tests creating a dice without an objective.
///
/// Expected: Ok with objective None
#[tokio::test]
async fn creates_dice_without_objective() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dice = DiceRepository::new(db)
        .create(CreateDiceParam {
            name: "Damage".to_string(),
            number: 3,
            dice_type: DiceType::D8,
            bonus: 0,
            objective: None,
        })
        .await?;

    assert_eq!(dice.number, 3);
    assert_eq!(dice.objective, None);

    Ok(())
}
