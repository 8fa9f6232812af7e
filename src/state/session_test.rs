use super::*;
use crate::net::types::Role;
use crate::util::storage::MemoryStorage;

fn user(id: i64, username: &str, role: Role) -> User {
    User {
        id,
        username: username.to_owned(),
        email: format!("{username}@x.com"),
        role,
        phone_number: None,
    }
}

// =============================================================
// Restoration
// =============================================================

#[test]
fn restore_without_token_is_ready_and_anonymous() {
    let mut store = SessionStore::new(MemoryStorage::default());
    assert!(!store.is_ready());

    // No token handed back means the caller makes zero network calls.
    assert!(store.begin_restore().is_none());
    assert!(store.is_ready());
    assert!(!store.is_authenticated());
    assert!(store.token().is_none());
    assert_eq!(*store.session(), Session::Anonymous);
}

#[test]
fn restore_enters_resolving_before_validation_completes() {
    let storage = MemoryStorage::with_entries(&[("token", "abc"), ("userId", "1")]);
    let mut store = SessionStore::new(storage);

    assert_eq!(store.begin_restore().as_deref(), Some("abc"));

    // Token present but unvalidated: not ready, not authenticated.
    assert!(!store.is_ready());
    assert!(!store.is_authenticated());
    assert_eq!(store.token(), Some("abc"));
    assert!(store.user().is_none());
}

#[test]
fn restore_with_accepted_token_authenticates() {
    let storage = MemoryStorage::with_entries(&[("token", "abc"), ("userId", "1")]);
    let mut store = SessionStore::new(storage);

    let pending = store.begin_restore();
    assert_eq!(pending.as_deref(), Some("abc"));
    store.finish_restore(Some(user(1, "alice", Role::Volunteer)));

    assert!(store.is_ready());
    assert!(store.is_authenticated());
    assert_eq!(store.token(), Some("abc"));
    let user = store.user().expect("user");
    assert_eq!(user.id, 1);
    assert_eq!(user.role, Role::Volunteer);
}

#[test]
fn restore_with_rejected_token_purges_everything() {
    let storage = MemoryStorage::with_entries(&[("token", "expired"), ("userId", "1")]);
    let mut store = SessionStore::new(storage.clone());

    store.begin_restore();
    store.finish_restore(None);

    // All-or-nothing: token and user absent in memory and in storage.
    assert!(store.is_ready());
    assert!(!store.is_authenticated());
    assert!(store.token().is_none());
    assert!(store.user().is_none());
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_ID_KEY).is_none());
}

#[test]
fn login_during_restore_wins_over_late_outcome() {
    // The user signs in through the modal while the stale token's
    // profile fetch is still in flight.
    let storage = MemoryStorage::with_entries(&[("token", "stale"), ("userId", "1")]);
    let mut store = SessionStore::new(storage.clone());

    store.begin_restore();
    store.login("fresh".to_owned(), user(5, "erin", Role::Volunteer));

    // The late failure must not wipe the fresh session or storage.
    store.finish_restore(None);
    assert!(store.is_authenticated());
    assert_eq!(store.token(), Some("fresh"));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("fresh"));
    assert_eq!(storage.get(USER_ID_KEY).as_deref(), Some("5"));

    // A late success is ignored just the same.
    store.finish_restore(Some(user(1, "alice", Role::Requester)));
    assert_eq!(store.user().map(|u| u.id), Some(5));
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_persists_token_and_user_id() {
    let storage = MemoryStorage::default();
    let mut store = SessionStore::new(storage.clone());

    store.login("tok123".to_owned(), user(7, "bob", Role::Requester));

    assert!(store.is_authenticated());
    assert_eq!(store.token(), Some("tok123"));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok123"));
    assert_eq!(storage.get(USER_ID_KEY).as_deref(), Some("7"));
}

#[test]
fn login_overwrites_prior_session() {
    let storage = MemoryStorage::default();
    let mut store = SessionStore::new(storage.clone());

    store.login("old".to_owned(), user(1, "alice", Role::Volunteer));
    store.login("new".to_owned(), user(2, "carol", Role::Requester));

    assert_eq!(store.token(), Some("new"));
    assert_eq!(store.user().map(|u| u.id), Some(2));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("new"));
    assert_eq!(storage.get(USER_ID_KEY).as_deref(), Some("2"));
}

#[test]
fn login_then_logout_leaves_storage_empty() {
    let storage = MemoryStorage::default();
    let mut store = SessionStore::new(storage.clone());

    store.login("tok".to_owned(), user(3, "dan", Role::Requester));
    store.logout();

    assert!(!store.is_authenticated());
    assert!(store.token().is_none());
    assert_eq!(storage.len(), 0);
}

#[test]
fn logout_twice_is_idempotent() {
    let mut store = SessionStore::new(MemoryStorage::default());

    store.login("tok".to_owned(), user(3, "dan", Role::Volunteer));
    store.logout();
    store.logout();

    assert!(!store.is_authenticated());
    assert_eq!(*store.session(), Session::Anonymous);
}

#[test]
fn logout_clears_storage_written_by_an_earlier_tab() {
    // Entries persisted by a previous session are removed even though
    // this store never logged in.
    let storage = MemoryStorage::with_entries(&[("token", "stale"), ("userId", "9")]);
    let mut store = SessionStore::new(storage.clone());

    store.logout();

    assert_eq!(storage.len(), 0);
    assert!(store.token().is_none());
}
