use super::*;

/// Tests listing users with their monster lists.
///
/// Expected: Ok with users ordered by ID, each with its own monster identifiers
#[tokio::test]
async fn gets_all_users_with_monster_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let goblin = factory::create_monster(db).await?;
    let orc = factory::create_monster(db).await?;
    factory::reference::attach(db, entity::reference::USER_MONSTERS, alice.id, orc.id).await?;
    factory::reference::attach(db, entity::reference::USER_MONSTERS, alice.id, goblin.id).await?;

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, alice.id);
    assert_eq!(users[0].monsters, vec![orc.id, goblin.id]);
    assert_eq!(users[1].id, bob.id);
    assert!(users[1].monsters.is_empty());

    Ok(())
}

/// Tests listing users when none exist.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all().await?;

    assert!(users.is_empty());

    Ok(())
}
