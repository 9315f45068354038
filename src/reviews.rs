/// The review store: a flat JSON collection of reviews keyed by id, each
/// owned by the user that created it.
use chrono::Utc;
use leptos::logging::log;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::Accounts;
use crate::models::review::Review;
use crate::storage::{read_collection, write_collection, StorageBackend, StorageError, REVIEWS_KEY};
use crate::wizard::{ReviewDraft, ValidationError};

#[derive(Error, Debug)]
pub enum SaveError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("you must be logged in to save reviews")]
    NotLoggedIn,
    #[error("the active session references an account that no longer exists")]
    UnknownUser,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub struct ReviewStore<S> {
    backend: S,
}

impl<S: StorageBackend> ReviewStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Every stored review, across all users. Absent key reads as empty.
    pub fn all(&self) -> Result<Vec<Review>, StorageError> {
        read_collection(&self.backend, REVIEWS_KEY)
    }

    /// Reviews owned by one user, in insertion order.
    pub fn for_user(&self, user_id: &str) -> Result<Vec<Review>, StorageError> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|review| review.user_id == user_id)
            .collect())
    }

    /// Validates the draft and appends it as a new review owned by the
    /// session user. Nothing is persisted unless every check passes.
    /// The owner must still exist in the accounts collection; ownership is
    /// only ever checked here, at write time.
    pub fn save(&self, draft: &ReviewDraft, accounts: &Accounts<S>) -> Result<Review, SaveError> {
        draft.validate()?;

        let user = accounts.current_user()?.ok_or(SaveError::NotLoggedIn)?;
        if !accounts.user_exists(&user.id)? {
            return Err(SaveError::UnknownUser);
        }

        let review =
            draft
                .clone()
                .into_review(Uuid::new_v4().to_string(), user.id.clone(), Utc::now());

        let mut reviews = self.all()?;
        reviews.push(review.clone());
        write_collection(&self.backend, REVIEWS_KEY, &reviews)?;

        log!(
            "[REVIEWS] Saved review {} ({}) for user {}",
            review.id,
            review.product_name,
            review.user_id
        );
        Ok(review)
    }

    /// Deletes by id. Unknown ids are a no-op.
    pub fn delete(&self, id: &str) -> Result<(), StorageError> {
        let reviews: Vec<Review> = self
            .all()?
            .into_iter()
            .filter(|review| review.id != id)
            .collect();
        write_collection(&self.backend, REVIEWS_KEY, &reviews)?;
        log!("[REVIEWS] Deleted review {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn draft(product_name: &str) -> ReviewDraft {
        ReviewDraft {
            product_name: product_name.to_string(),
            brand: "GlowLab".to_string(),
            category: "serum".to_string(),
            rating: 4.0,
            price: 18.5,
            ..ReviewDraft::default()
        }
    }

    fn logged_in_store() -> (ReviewStore<MemoryStorage>, Accounts<MemoryStorage>) {
        let storage = MemoryStorage::new();
        let accounts = Accounts::new(storage.clone());
        accounts.signup("ada@example.com", "pw", "ada").unwrap();
        (ReviewStore::new(storage), accounts)
    }

    #[test]
    fn save_assigns_id_owner_and_timestamp() {
        let (store, accounts) = logged_in_store();
        let user = accounts.current_user().unwrap().unwrap();

        let review = store.save(&draft("Hydra Serum"), &accounts).unwrap();
        assert_eq!(review.user_id, user.id);
        assert!(!review.id.is_empty());

        let stored = store.all().unwrap();
        assert_eq!(stored, vec![review]);
    }

    #[test]
    fn save_without_session_persists_nothing() {
        let storage = MemoryStorage::new();
        let accounts = Accounts::new(storage.clone());
        let store = ReviewStore::new(storage);

        let err = store.save(&draft("Hydra Serum"), &accounts);
        assert!(matches!(err, Err(SaveError::NotLoggedIn)));
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn invalid_draft_persists_nothing() {
        let (store, accounts) = logged_in_store();

        let err = store.save(&draft(""), &accounts);
        assert!(matches!(
            err,
            Err(SaveError::Invalid(ValidationError::MissingProductName))
        ));
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn stale_session_user_is_rejected() {
        let storage = MemoryStorage::new();
        let accounts = Accounts::new(storage.clone());
        accounts.signup("ada@example.com", "pw", "ada").unwrap();
        // Wipe the accounts collection while the session pointer survives.
        storage.write(crate::storage::USERS_KEY, "[]").unwrap();

        let store = ReviewStore::new(storage);
        let err = store.save(&draft("Hydra Serum"), &accounts);
        assert!(matches!(err, Err(SaveError::UnknownUser)));
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn reviews_are_filtered_by_owner() {
        let storage = MemoryStorage::new();
        let accounts = Accounts::new(storage.clone());
        let store = ReviewStore::new(storage);

        let ada = accounts.signup("ada@example.com", "pw", "ada").unwrap();
        store.save(&draft("Ada's Serum"), &accounts).unwrap();

        let grace = accounts.signup("grace@example.com", "pw", "grace").unwrap();
        store.save(&draft("Grace's Toner"), &accounts).unwrap();

        let ada_reviews = store.for_user(&ada.id).unwrap();
        assert_eq!(ada_reviews.len(), 1);
        assert_eq!(ada_reviews[0].product_name, "Ada's Serum");

        let grace_reviews = store.for_user(&grace.id).unwrap();
        assert_eq!(grace_reviews.len(), 1);
        assert_eq!(grace_reviews[0].product_name, "Grace's Toner");
    }

    #[test]
    fn delete_removes_only_the_matching_id() {
        let (store, accounts) = logged_in_store();
        let first = store.save(&draft("First"), &accounts).unwrap();
        let second = store.save(&draft("Second"), &accounts).unwrap();

        store.delete(&first.id).unwrap();
        let remaining = store.all().unwrap();
        assert_eq!(remaining, vec![second]);

        // Unknown id is a no-op.
        store.delete("no-such-id").unwrap();
        assert_eq!(store.all().unwrap().len(), 1);
    }
}
