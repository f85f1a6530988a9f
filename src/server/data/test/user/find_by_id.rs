use super::*;

/// Tests finding an existing user.
///
/// Expected: Ok(Some) with the user's monster identifiers
#[tokio::test]
async fn finds_user_with_monster_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("carol")
        .build()
        .await?;
    let monster = factory::create_monster(db).await?;
    factory::reference::attach(db, entity::reference::USER_MONSTERS, user.id, monster.id).await?;

    let found = UserRepository::new(db).find_by_id(user.id).await?;

    let found = found.unwrap();
    assert_eq!(found.name, "carol");
    assert_eq!(found.monsters, vec![monster.id]);

    Ok(())
}

/// Tests finding a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db).find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
