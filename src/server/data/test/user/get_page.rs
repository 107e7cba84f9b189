use super::*;
use std::collections::HashSet;

/// Tests pagination over several pages.
///
/// Verifies that walking the pages in order yields every user exactly once and that
/// `has_more` is false only on the last page.
///
/// Expected: concatenated pages equal all users in id order
#[tokio::test]
async fn pages_cover_every_user_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_users(db, 7).await?;
    let repo = UserRepository::new(db);

    let mut seen = Vec::new();
    let mut offset = 0;
    loop {
        let (users, has_more) = repo.get_page(offset, 3).await?;
        assert!(users.len() <= 3);
        offset += users.len() as u64;
        seen.extend(users.into_iter().map(|u| u.id));
        if !has_more {
            break;
        }
    }

    let expected: Vec<i32> = created.iter().map(|u| u.id).collect();
    assert_eq!(seen, expected);
    assert_eq!(seen.iter().collect::<HashSet<_>>().len(), 7);

    Ok(())
}

/// Tests `has_more` when the last page is exactly full.
///
/// Expected: has_more false on a page ending at the final user
#[tokio::test]
async fn exact_final_page_has_no_more() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_users(db, 4).await?;
    let repo = UserRepository::new(db);

    let (users, has_more) = repo.get_page(0, 2).await?;
    assert_eq!(users.len(), 2);
    assert!(has_more);

    let (users, has_more) = repo.get_page(2, 2).await?;
    assert_eq!(users.len(), 2);
    assert!(!has_more);

    Ok(())
}

/// Tests pagination with an empty table and with an offset past the end.
///
/// Expected: Ok with empty vector and has_more false
#[tokio::test]
async fn returns_empty_page_past_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let (users, has_more) = repo.get_page(0, 10).await?;
    assert!(users.is_empty());
    assert!(!has_more);

    factory::create_users(db, 2).await?;
    let (users, has_more) = repo.get_page(5, 10).await?;
    assert!(users.is_empty());
    assert!(!has_more);

    Ok(())
}
