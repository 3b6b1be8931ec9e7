//! Domain models and the pure rules the handlers compose
//!
//! Nothing in here touches the store except `category_map`, which
//! only reads through the `TriviaStore` trait.

pub mod question;
pub mod category;
pub mod pagination;
pub mod quiz;

pub use question::{NewQuestion, Question};
pub use category::{category_map, Category, CategoryMap, CategoryRef, NO_CATEGORY};
pub use pagination::{Page, QUESTIONS_PER_PAGE};
pub use quiz::next_question;
