use super::*;

/// Tests detaching a child referenced more than once.
///
/// Expected: Ok with every occurrence removed and other children kept in order
#[tokio::test]
async fn removes_every_occurrence_of_child() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reference)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReferenceRepository::new(db);
    for child in [5, 6, 5, 7] {
        repo.push(ReferenceList::GameDices, 2, child).await?;
    }

    let removed = repo.pull(ReferenceList::GameDices, 2, 5).await?;

    assert_eq!(removed, 2);
    assert_eq!(repo.get_children(ReferenceList::GameDices, 2).await?, vec![6, 7]);

    Ok(())
}

/// Tests detaching a child that is not in the list.
///
/// Expected: Ok(0) and the list unchanged
#[tokio::test]
async fn pulling_absent_child_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reference)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReferenceRepository::new(db);
    repo.push(ReferenceList::GameDices, 2, 6).await?;

    let removed = repo.pull(ReferenceList::GameDices, 2, 99).await?;

    assert_eq!(removed, 0);
    assert_eq!(repo.get_children(ReferenceList::GameDices, 2).await?, vec![6]);

    Ok(())
}
