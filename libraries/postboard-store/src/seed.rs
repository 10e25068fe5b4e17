//! Sample dataset the fallback store starts from.

use postboard_core::{Post, User};

fn user(id: i64, name: &str, username: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: username.to_string(),
        email: email.to_string(),
    }
}

fn post(id: i64, user_id: i64, title: &str, body: &str) -> Post {
    Post {
        id,
        user_id,
        title: title.to_string(),
        body: body.to_string(),
    }
}

/// Users seeded into a fresh store.
pub fn sample_users() -> Vec<User> {
    vec![
        user(1, "Leanne Graham", "Bret", "Sincere@april.biz"),
        user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv"),
        user(3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net"),
    ]
}

/// Posts seeded into a fresh store. Every author is one of [`sample_users`].
pub fn sample_posts() -> Vec<Post> {
    vec![
        post(
            1,
            1,
            "Getting started with offline mode",
            "The remote API is unreachable, so this list comes from the local sample dataset.",
        ),
        post(
            2,
            1,
            "Notes on probing",
            "Every request checks whether the API answers before deciding where to go.",
        ),
        post(
            3,
            2,
            "Editing posts",
            "Changes made while offline stay in memory and are gone after a restart.",
        ),
        post(
            4,
            2,
            "Partial updates",
            "Fields left out of an update keep their previous value.",
        ),
        post(
            5,
            3,
            "Identifiers",
            "New entries get the next id after the highest one in the collection.",
        ),
        post(
            6,
            3,
            "Deleting",
            "Deleting something that is already gone is not an error.",
        ),
    ]
}
