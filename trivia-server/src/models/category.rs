//! Categories and the id -> display name lookup

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::{DbError, TriviaStore};

/// "No category selected". Reported as `current_category` by endpoints
/// that are not category-scoped, and selects every question in a quiz.
pub const NO_CATEGORY: i32 = 0;

/// Category record. Categories are seeded, never edited through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Category id -> display name, ordered by id.
///
/// Serializes as a JSON object keyed by the stringified id.
pub type CategoryMap = BTreeMap<i32, String>;

/// Build the lookup from every stored category.
///
/// An empty map means no categories exist; callers decide whether that
/// is a not-found condition.
pub async fn category_map(store: &dyn TriviaStore) -> Result<CategoryMap, DbError> {
    let categories = store.categories().await?;
    Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
}

/// Parse a category id taken from a URL path segment.
pub fn parse_category_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// Category selector sent by quiz clients
///
/// Clients send the id either as a number or as the string key they
/// read from the `categories` object, so both forms are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "RawCategoryId")]
pub enum CategoryRef {
    /// Sentinel 0: every category
    All,
    /// One specific category
    Id(i32),
    /// An id that cannot name any category (non-numeric, out of range)
    Unmatched,
}

impl CategoryRef {
    pub fn from_id(id: i64) -> Self {
        if id == i64::from(NO_CATEGORY) {
            return Self::All;
        }
        i32::try_from(id).map(Self::Id).unwrap_or(Self::Unmatched)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategoryId {
    Number(i64),
    Text(String),
}

impl From<RawCategoryId> for CategoryRef {
    fn from(raw: RawCategoryId) -> Self {
        match raw {
            RawCategoryId::Number(id) => Self::from_id(id),
            RawCategoryId::Text(s) => s
                .trim()
                .parse::<i64>()
                .map(Self::from_id)
                .unwrap_or(Self::Unmatched),
        }
    }
}
