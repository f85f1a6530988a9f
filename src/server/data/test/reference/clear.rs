use super::*;

/// Tests emptying one parent's list.
///
/// Expected: Ok with the parent's list empty and other parents untouched
#[tokio::test]
async fn clears_only_the_given_parent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reference)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReferenceRepository::new(db);
    repo.push(ReferenceList::UserMonsters, 1, 10).await?;
    repo.push(ReferenceList::UserMonsters, 1, 11).await?;
    repo.push(ReferenceList::UserMonsters, 2, 12).await?;

    let removed = repo.clear(ReferenceList::UserMonsters, 1).await?;

    assert_eq!(removed, 2);
    assert!(repo
        .get_children(ReferenceList::UserMonsters, 1)
        .await?
        .is_empty());
    assert_eq!(repo.get_children(ReferenceList::UserMonsters, 2).await?, vec![12]);

    Ok(())
}
