//! Behaviour tests for the fallback store.

use postboard_core::{NewPost, NewUser, Post, PostPatch, ResourceKind, User, UserPatch};
use postboard_store::{sample_posts, sample_users, FallbackStore, StoreError};

fn single_user_store() -> FallbackStore {
    FallbackStore::with_data(vec![sample_users()[0].clone()], Vec::new())
        .expect("valid seed data")
}

// =============================================================================
// Create
// =============================================================================

mod create {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_next_id_and_appends() {
        let store = single_user_store();

        let created: User = store.create(NewUser::new("A", "a", "a@x.com")).await.unwrap();
        assert_eq!(
            created,
            User {
                id: 2,
                name: "A".to_string(),
                username: "a".to_string(),
                email: "a@x.com".to_string(),
            }
        );

        let ids: Vec<i64> = store.list::<User>().await.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_create_in_empty_collection_starts_at_one() {
        let store = FallbackStore::empty();
        let post: Post = store.create(NewPost::new(5, "t", "b")).await.unwrap();
        assert_eq!(post.id, 1);
    }

    #[tokio::test]
    async fn test_create_tolerates_dangling_user_reference() {
        let store = FallbackStore::new();
        let post: Post = store
            .create(NewPost::new(404, "orphan", "no author"))
            .await
            .unwrap();

        assert_eq!(post.user_id, 404);
        assert_eq!(store.get::<Post>(post.id).await.unwrap(), post);
    }

    #[tokio::test]
    async fn test_collections_have_independent_counters() {
        let store = FallbackStore::new();
        let user: User = store.create(NewUser::new("A", "a", "a@x.com")).await.unwrap();
        let post: Post = store.create(NewPost::new(user.id, "t", "b")).await.unwrap();

        assert_eq!(user.id, 4);
        assert_eq!(post.id, 7);
    }

    #[tokio::test]
    async fn test_create_after_max_id_fails_instead_of_overflowing() {
        let mut last = sample_users()[0].clone();
        last.id = i64::MAX;
        let store = FallbackStore::with_data(vec![last], Vec::new()).unwrap();

        let err = store
            .create::<User>(NewUser::new("A", "a", "a@x.com"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::IdsExhausted {
                resource: ResourceKind::Users,
                last: i64::MAX
            }
        );

        // Nothing was inserted
        assert_eq!(store.list::<User>().await.len(), 1);
    }
}

// =============================================================================
// Read
// =============================================================================

mod read {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = FallbackStore::new();
        let err = store.get::<User>(999).await.unwrap_err();
        assert_eq!(err, StoreError::not_found(ResourceKind::Users, 999));
    }

    #[tokio::test]
    async fn test_list_returns_a_copy() {
        let store = FallbackStore::new();

        let mut users = store.list::<User>().await;
        users[0].name = "Mallory".to_string();
        users.clear();

        assert_eq!(store.list::<User>().await, sample_users());
    }

    #[tokio::test]
    async fn test_filter_by_user_id_preserves_order() {
        let store = FallbackStore::new();
        let extra: Post = store
            .create(NewPost::new(1, "third", "by user one"))
            .await
            .unwrap();

        let posts = store.filter_by_user_id::<Post>(1).await;
        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, extra.id]);
        assert!(posts.iter().all(|p| p.user_id == 1));
    }

    #[tokio::test]
    async fn test_filter_by_user_id_without_matches_is_empty() {
        let store = FallbackStore::new();
        assert!(store.filter_by_user_id::<Post>(42).await.is_empty());
    }

    #[tokio::test]
    async fn test_filter_users_by_user_id_is_empty() {
        let store = FallbackStore::new();
        assert!(store.filter_by_user_id::<User>(1).await.is_empty());
    }
}

// =============================================================================
// Update
// =============================================================================

mod update {
    use super::*;

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let store = FallbackStore::new();
        let before = store.get::<User>(1).await.unwrap();

        let updated: User = store
            .update(
                1,
                UserPatch {
                    email: Some("new@x.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.email, "new@x.com");
        assert_eq!(updated.name, before.name);
        assert_eq!(updated.username, before.username);
        assert_eq!(store.get::<User>(1).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_post_title_only() {
        let store = FallbackStore::new();
        let updated: Post = store
            .update(
                3,
                PostPatch {
                    title: Some("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let original = &sample_posts()[2];
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.body, original.body);
        assert_eq!(updated.user_id, original.user_id);
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let store = FallbackStore::new();
        let err = store
            .update::<Post>(77, PostPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::not_found(ResourceKind::Posts, 77));
    }
}

// =============================================================================
// Delete
// =============================================================================

mod delete {
    use super::*;

    #[tokio::test]
    async fn test_delete_removes_entity() {
        let store = FallbackStore::new();
        store.delete::<Post>(1).await;

        assert!(store.get::<Post>(1).await.is_err());
        assert_eq!(store.list::<Post>().await.len(), sample_posts().len() - 1);
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let store = FallbackStore::new();
        store.delete::<User>(999).await;
        store.delete::<User>(999).await;

        assert_eq!(store.list::<User>().await, sample_users());
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = FallbackStore::empty();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let user: User = store
                        .create(NewUser::new(format!("U{i}"), format!("u{i}"), "u@x.com"))
                        .await
                        .unwrap();
                    user.id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=16).collect::<Vec<i64>>());
    }
}
