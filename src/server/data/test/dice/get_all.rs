use super::*;

/// Tests listing dice in ID order.
///
/// Expected: Ok with every dice
#[tokio::test]
async fn gets_all_dices() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let d4 = factory::dice::DiceFactory::new(db).dice_type(4).build().await?;
    let d100 = factory::dice::DiceFactory::new(db)
        .dice_type(100)
        .build()
        .await?;

    let dices = DiceRepository::new(db).get_all().await?;

    assert_eq!(dices.len(), 2);
    assert_eq!(dices[0].id, d4.id);
    assert_eq!(dices[0].dice_type, DiceType::D4);
    assert_eq!(dices[1].id, d100.id);
    assert_eq!(dices[1].dice_type, DiceType::D100);

    Ok(())
}

/// Tests reading a stored dice whose face count is not a supported type.
///
/// Expected: Err(InternalErr(InvalidDiceType))
#[tokio::test]
async fn fails_on_unsupported_stored_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dice = factory::dice::DiceFactory::new(db).dice_type(7).build().await?;

    let result = DiceRepository::new(db).get_all().await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::InvalidDiceType { id, value: 7 })) if id == dice.id
    ));

    Ok(())
}
