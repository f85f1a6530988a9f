use super::*;

/// Tests replacing a dice's fields with a new objective.
///
/// Expected: Ok(Some) with every field replaced
#[tokio::test]
async fn updates_all_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dice = factory::dice::DiceFactory::new(db)
        .objective(Some(10))
        .build()
        .await?;

    let updated = DiceRepository::new(db)
        .update(dice.id, update_param(Some(15)))
        .await?
        .unwrap();

    assert_eq!(updated.name, "Attack");
    assert_eq!(updated.number, 2);
    assert_eq!(updated.dice_type, DiceType::D6);
    assert_eq!(updated.bonus, 4);
    assert_eq!(updated.objective, Some(15));

    Ok(())
}

/// Tests that a missing or zero objective keeps the stored one.
///
/// Expected: Ok(Some) with the original objective both times
#[tokio::test]
async fn keeps_objective_when_absent_or_zero() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dice = factory::dice::DiceFactory::new(db)
        .objective(Some(10))
        .build()
        .await?;
    let repo = DiceRepository::new(db);

    let updated = repo.update(dice.id, update_param(None)).await?.unwrap();
    assert_eq!(updated.objective, Some(10));
    assert_eq!(updated.dice_type, DiceType::D6);

    let updated = repo.update(dice.id, update_param(Some(0))).await?.unwrap();
    assert_eq!(updated.objective, Some(10));

    Ok(())
}

/// Tests updating a dice that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_dice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = DiceRepository::new(db).update(7, update_param(None)).await?;

    assert!(updated.is_none());

    Ok(())
}
