use super::*;

/// Tests loading the lists of several parents in one query.
///
/// Expected: Ok with each parent's children in order and parents without
/// references absent from the map
#[tokio::test]
async fn groups_children_by_parent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reference)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReferenceRepository::new(db);
    repo.push(ReferenceList::MonsterDices, 1, 4).await?;
    repo.push(ReferenceList::MonsterDices, 2, 5).await?;
    repo.push(ReferenceList::MonsterDices, 1, 6).await?;
    repo.push(ReferenceList::MonsterDices, 9, 7).await?;

    let children = repo
        .get_children_for_parents(ReferenceList::MonsterDices, &[1, 2, 3])
        .await?;

    assert_eq!(children.len(), 2);
    assert_eq!(children.get(&1), Some(&vec![4, 6]));
    assert_eq!(children.get(&2), Some(&vec![5]));
    assert!(!children.contains_key(&3));
    assert!(!children.contains_key(&9));

    Ok(())
}

/// Tests that an empty parent slice yields an empty map.
///
/// Expected: Ok with empty map
#[tokio::test]
async fn returns_empty_map_for_no_parents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reference)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let children = ReferenceRepository::new(db)
        .get_children_for_parents(ReferenceList::MonsterDices, &[])
        .await?;

    assert!(children.is_empty());

    Ok(())
}
