//! Integration tests for the repository layer against a real database:
//! - Create / find / list / update / delete per entity
//! - Nested-child append (author gains a post, owner gains a pet)
//! - Orphaning on parent delete (no cascade)

use sqlx::PgPool;

use scribble_db::models::author::{CreateAuthor, UpdateAuthor};
use scribble_db::models::owner::CreateOwner;
use scribble_db::models::pet::CreatePet;
use scribble_db::models::post::{CreatePost, UpdatePost};
use scribble_db::repositories::{AuthorRepo, OwnerRepo, PetRepo, PostRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_author(name: &str) -> CreateAuthor {
    CreateAuthor {
        name: name.to_string(),
    }
}

fn new_post(title: &str, body: &str, author_id: Option<i64>) -> CreatePost {
    CreatePost {
        title: title.to_string(),
        body: body.to_string(),
        author_id,
    }
}

fn new_owner(name: &str) -> CreateOwner {
    CreateOwner {
        name: name.to_string(),
    }
}

fn new_pet(name: &str, owner_id: Option<i64>) -> CreatePet {
    CreatePet {
        name: name.to_string(),
        owner_id,
    }
}

// ---------------------------------------------------------------------------
// Test: create and find round-trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find_author(pool: PgPool) {
    let author = AuthorRepo::create(&pool, &new_author("Ada")).await.unwrap();
    assert_eq!(author.name, "Ada");

    let found = AuthorRepo::find_by_id(&pool, author.id)
        .await
        .unwrap()
        .expect("author should exist");
    assert_eq!(found.id, author.id);
    assert_eq!(found.name, "Ada");

    // find is idempotent: a second call returns equivalent data.
    let again = AuthorRepo::find_by_id(&pool, author.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(again.id, found.id);
    assert_eq!(again.name, found.name);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    assert!(PostRepo::find_by_id(&pool, 999).await.unwrap().is_none());
    assert!(AuthorRepo::find_by_id(&pool, 999).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Test: list is ordered by insertion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_all_in_insertion_order(pool: PgPool) {
    for name in ["first", "second", "third"] {
        OwnerRepo::create(&pool, &new_owner(name)).await.unwrap();
    }

    let owners = OwnerRepo::list_all(&pool).await.unwrap();
    let names: Vec<&str> = owners.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

// ---------------------------------------------------------------------------
// Test: nested-child append sets the foreign key and keeps siblings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_append_post_to_author(pool: PgPool) {
    let author = AuthorRepo::create(&pool, &new_author("Bob")).await.unwrap();

    let first = PostRepo::create(&pool, &new_post("One", "body", Some(author.id)))
        .await
        .unwrap();
    assert_eq!(first.author_id, Some(author.id));

    // Appending a second post keeps the first.
    PostRepo::create(&pool, &new_post("Two", "body", Some(author.id)))
        .await
        .unwrap();

    let posts = PostRepo::list_for_author(&pool, author.id).await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "One");
    assert_eq!(posts[1].title, "Two");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_post_may_exist_without_author(pool: PgPool) {
    let post = PostRepo::create(&pool, &new_post("Loose", "no parent", None))
        .await
        .unwrap();
    assert_eq!(post.author_id, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_set_author_attaches_existing_post(pool: PgPool) {
    let post = PostRepo::create(&pool, &new_post("Hi", "Body", None))
        .await
        .unwrap();
    let author = AuthorRepo::create(&pool, &new_author("Bob")).await.unwrap();

    assert!(PostRepo::set_author(&pool, post.id, author.id).await.unwrap());

    let found = PostRepo::find_by_id(&pool, post.id).await.unwrap().unwrap();
    assert_eq!(found.author_id, Some(author.id));
}

// ---------------------------------------------------------------------------
// Test: partial update leaves unspecified fields unchanged
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_partial_update(pool: PgPool) {
    let post = PostRepo::create(&pool, &new_post("Old title", "Old body", None))
        .await
        .unwrap();

    let updated = PostRepo::update(
        &pool,
        post.id,
        &UpdatePost {
            title: Some("New title".to_string()),
            body: None,
        },
    )
    .await
    .unwrap()
    .expect("post should exist");

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.body, "Old body");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_returns_none(pool: PgPool) {
    let result = AuthorRepo::update(
        &pool,
        12345,
        &UpdateAuthor {
            name: Some("Nobody".to_string()),
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_never_removes_children(pool: PgPool) {
    let author = AuthorRepo::create(&pool, &new_author("Ada")).await.unwrap();
    PostRepo::create(&pool, &new_post("Kept", "body", Some(author.id)))
        .await
        .unwrap();

    AuthorRepo::update(
        &pool,
        author.id,
        &UpdateAuthor {
            name: Some("Ada L.".to_string()),
        },
    )
    .await
    .unwrap();

    let posts = PostRepo::list_for_author(&pool, author.id).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Kept");
}

// ---------------------------------------------------------------------------
// Test: delete removes exactly one row and does not cascade
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_leaves_other_rows(pool: PgPool) {
    let keep = AuthorRepo::create(&pool, &new_author("Keep")).await.unwrap();
    let gone = AuthorRepo::create(&pool, &new_author("Gone")).await.unwrap();

    assert!(AuthorRepo::delete(&pool, gone.id).await.unwrap());
    assert!(AuthorRepo::find_by_id(&pool, gone.id).await.unwrap().is_none());
    assert!(AuthorRepo::find_by_id(&pool, keep.id).await.unwrap().is_some());

    // Deleting again is a no-op.
    assert!(!AuthorRepo::delete(&pool, gone.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_owner_delete_orphans_pets(pool: PgPool) {
    let owner = OwnerRepo::create(&pool, &new_owner("Max")).await.unwrap();
    let pet = PetRepo::create(&pool, &new_pet("Rex", Some(owner.id)))
        .await
        .unwrap();

    assert!(OwnerRepo::delete(&pool, owner.id).await.unwrap());

    // The pet survives with a dangling owner_id.
    let orphan = PetRepo::find_by_id(&pool, pet.id).await.unwrap().unwrap();
    assert_eq!(orphan.owner_id, Some(owner.id));
    assert!(OwnerRepo::find_by_id(&pool, owner.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_author_delete_orphans_posts(pool: PgPool) {
    let author = AuthorRepo::create(&pool, &new_author("Ada")).await.unwrap();
    let post = PostRepo::create(&pool, &new_post("Hi", "Body", Some(author.id)))
        .await
        .unwrap();

    assert!(AuthorRepo::delete(&pool, author.id).await.unwrap());

    let orphan = PostRepo::find_by_id(&pool, post.id).await.unwrap().unwrap();
    assert_eq!(orphan.author_id, Some(author.id));
}
