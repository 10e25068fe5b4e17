//! Property-based tests for the fallback store
//!
//! Uses proptest to check the id, merge, and filter invariants across many
//! random inputs.

use postboard_core::{NewPost, NewUser, Post, User, UserPatch};
use postboard_store::FallbackStore;
use proptest::prelude::*;

// ===== Helpers =====

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

fn arbitrary_new_user() -> impl Strategy<Value = NewUser> {
    ("[A-Za-z ]{1,20}", "[a-z0-9]{1,10}", "[a-z]{1,8}@[a-z]{1,8}\\.com")
        .prop_map(|(name, username, email)| NewUser::new(name, username, email))
}

fn arbitrary_patch() -> impl Strategy<Value = UserPatch> {
    (
        proptest::option::of("[A-Za-z ]{1,20}"),
        proptest::option::of("[a-z0-9]{1,10}"),
        proptest::option::of("[a-z]{1,8}@x\\.com"),
    )
        .prop_map(|(name, username, email)| UserPatch {
            name,
            username,
            email,
        })
}

fn arbitrary_users() -> impl Strategy<Value = Vec<User>> {
    prop::collection::btree_set(1i64..500, 0..20).prop_map(|ids| {
        ids.into_iter()
            .map(|id| User {
                id,
                name: format!("User {id}"),
                username: format!("user{id}"),
                email: format!("user{id}@x.com"),
            })
            .collect()
    })
}

// ===== Property Tests =====

proptest! {
    /// Property: a created id is max(existing ids, 0) + 1 and larger than every earlier id
    #[test]
    fn create_assigns_max_plus_one(
        seed in arbitrary_users(),
        new_users in prop::collection::vec(arbitrary_new_user(), 1..10)
    ) {
        let rt = runtime();
        let store = FallbackStore::with_data(seed, Vec::new()).unwrap();

        rt.block_on(async {
            for data in new_users {
                let existing: Vec<i64> = store.list::<User>().await.iter().map(|u| u.id).collect();
                let expected = existing.iter().copied().max().unwrap_or(0) + 1;

                let created: User = store.create(data).await.unwrap();

                prop_assert_eq!(created.id, expected);
                prop_assert!(existing.iter().all(|id| *id < created.id));
            }
            Ok::<(), TestCaseError>(())
        })?;
    }

    /// Property: fields omitted from a patch keep their prior value
    #[test]
    fn update_merges_instead_of_replacing(
        data in arbitrary_new_user(),
        patch in arbitrary_patch()
    ) {
        let rt = runtime();
        let store = FallbackStore::empty();

        rt.block_on(async {
            let before: User = store.create(data).await.unwrap();
            let after: User = store.update(before.id, patch.clone()).await.unwrap();

            prop_assert_eq!(after.id, before.id);
            prop_assert_eq!(&after.name, patch.name.as_ref().unwrap_or(&before.name));
            prop_assert_eq!(&after.username, patch.username.as_ref().unwrap_or(&before.username));
            prop_assert_eq!(&after.email, patch.email.as_ref().unwrap_or(&before.email));
            Ok::<(), TestCaseError>(())
        })?;
    }

    /// Property: filtering returns exactly the matching posts in their original order
    #[test]
    fn filter_by_user_id_is_an_ordered_subset(
        authors in prop::collection::vec(0i64..5, 0..30),
        wanted in 0i64..6
    ) {
        let rt = runtime();
        let store = FallbackStore::empty();

        rt.block_on(async {
            for (i, author) in authors.iter().enumerate() {
                let _: Post = store
                    .create(NewPost::new(*author, format!("t{i}"), "b"))
                    .await
                    .unwrap();
            }

            let all = store.list::<Post>().await;
            let expected: Vec<Post> = all.iter().filter(|p| p.user_id == wanted).cloned().collect();

            prop_assert_eq!(store.filter_by_user_id::<Post>(wanted).await, expected);
            Ok::<(), TestCaseError>(())
        })?;
    }

    /// Property: deleting an unknown id never changes the collection
    #[test]
    fn delete_unknown_id_is_noop(
        seed in arbitrary_users(),
        id in 500i64..1000
    ) {
        let rt = runtime();
        let store = FallbackStore::with_data(seed.clone(), Vec::new()).unwrap();

        rt.block_on(async {
            store.delete::<User>(id).await;
            prop_assert_eq!(store.list::<User>().await, seed);
            Ok::<(), TestCaseError>(())
        })?;
    }
}
