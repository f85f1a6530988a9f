use super::*;

/// Tests appending children to a list.
///
/// Verifies that children come back in insertion order and that the same
/// child can be referenced more than once.
///
/// Expected: Ok with [3, 1, 3]
#[tokio::test]
async fn appends_in_insertion_order_with_duplicates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reference)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReferenceRepository::new(db);
    repo.push(ReferenceList::GameMonsters, 1, 3).await?;
    repo.push(ReferenceList::GameMonsters, 1, 1).await?;
    repo.push(ReferenceList::GameMonsters, 1, 3).await?;

    let children = repo.get_children(ReferenceList::GameMonsters, 1).await?;
    assert_eq!(children, vec![3, 1, 3]);

    Ok(())
}

/// Tests that lists with the same parent ID stay separate.
///
/// A game's monster list and dice list share the parent ID, as does a user
/// whose ID happens to match the game's.
///
/// Expected: Ok with each list holding only its own child
#[tokio::test]
async fn keeps_lists_separate_for_same_parent_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reference)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReferenceRepository::new(db);
    repo.push(ReferenceList::GameMonsters, 1, 10).await?;
    repo.push(ReferenceList::GameDices, 1, 20).await?;
    repo.push(ReferenceList::UserMonsters, 1, 30).await?;

    assert_eq!(repo.get_children(ReferenceList::GameMonsters, 1).await?, vec![10]);
    assert_eq!(repo.get_children(ReferenceList::GameDices, 1).await?, vec![20]);
    assert_eq!(repo.get_children(ReferenceList::UserMonsters, 1).await?, vec![30]);
    assert!(repo
        .get_children(ReferenceList::MonsterDices, 1)
        .await?
        .is_empty());

    Ok(())
}
