use super::*;

/// Tests deleting a user that owns monsters.
///
/// Verifies that the user and its monster list are removed while the monsters
/// themselves remain.
///
/// Expected: Ok(1), monster still present
#[tokio::test]
async fn deletes_user_and_keeps_monsters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let monster = factory::create_monster(db).await?;
    factory::reference::attach(db, entity::reference::USER_MONSTERS, user.id, monster.id).await?;

    let removed = UserRepository::new(db).delete_matching(user.id).await?;

    assert_eq!(removed, 1);
    assert!(entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Monster::find_by_id(monster.id)
        .one(db)
        .await?
        .is_some());

    let remaining = crate::server::data::reference::ReferenceRepository::new(db)
        .get_children(ReferenceList::UserMonsters, user.id)
        .await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(0) and other users untouched
#[tokio::test]
async fn deleting_missing_user_removes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let removed = UserRepository::new(db).delete_matching(user.id + 100).await?;

    assert_eq!(removed, 0);
    assert!(entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
