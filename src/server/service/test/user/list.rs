use super::*;

/// Tests that walking all pages yields every user once, in order.
///
/// Expected: N users across pages of size P with no duplicates or omissions
#[tokio::test]
async fn pages_concatenate_to_full_collection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_users(db, 10).await?;
    let service = UserService::new(db);

    for page_size in [1, 3, 4, 10, 11] {
        let mut ids = Vec::new();
        let mut offset = 0;
        loop {
            let page = service
                .list(ListUsersParams {
                    offset,
                    limit: page_size,
                })
                .await?;
            assert_eq!(page.total, 10);
            assert!(page.users.len() as u64 <= page_size);
            offset += page.users.len() as u64;
            ids.extend(page.users.iter().map(|u| u.id));
            if !page.has_more {
                break;
            }
        }

        let expected: Vec<i32> = created.iter().map(|u| u.id).collect();
        assert_eq!(ids, expected, "page size {page_size}");
    }

    Ok(())
}

/// Tests the page metadata echoes the request window.
///
/// Expected: offset and limit echoed, has_more set while users remain
#[tokio::test]
async fn reports_window_and_has_more() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_users(db, 5).await?;
    let service = UserService::new(db);

    let page = service
        .list(ListUsersParams {
            offset: 1,
            limit: 2,
        })
        .await?;

    assert_eq!(page.offset, 1);
    assert_eq!(page.limit, 2);
    assert_eq!(page.users.len(), 2);
    assert_eq!(page.total, 5);
    assert!(page.has_more);

    Ok(())
}
