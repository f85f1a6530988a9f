use super::*;

/// Tests creating a new user.
///
/// Verifies that the user is stored with the given name and password and owns
/// no monsters.
///
/// Expected: Ok with user created and empty monster list
#[tokio::test]
async fn creates_user_without_monsters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParam {
            name: "alice".to_string(),
            password: "secret".to_string(),
        })
        .await?;

    assert_eq!(user.name, "alice");
    assert_eq!(user.password, "secret");
    assert!(user.monsters.is_empty());

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}
