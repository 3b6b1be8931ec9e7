//! Stock categories for a fresh database

use super::{DbError, TriviaStore};

/// Categories a new trivia database starts with, in id order.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Insert the stock categories when the category table is empty.
///
/// Returns how many categories were inserted (0 if any already existed).
pub async fn seed_default_categories(store: &dyn TriviaStore) -> Result<usize, DbError> {
    let existing = store.count_categories().await?;
    if existing > 0 {
        tracing::debug!(existing, "categories present, skipping seed");
        return Ok(0);
    }

    for kind in DEFAULT_CATEGORIES {
        store.insert_category(kind).await?;
    }
    tracing::info!(count = DEFAULT_CATEGORIES.len(), "seeded default categories");
    Ok(DEFAULT_CATEGORIES.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[tokio::test]
    async fn seeds_empty_store_once() {
        let store = MemoryStore::new();
        assert_eq!(seed_default_categories(&store).await.unwrap(), 6);
        assert_eq!(seed_default_categories(&store).await.unwrap(), 0);

        let categories = store.categories().await.unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].kind, "Science");
        assert_eq!(categories[5].kind, "Sports");
    }
}
