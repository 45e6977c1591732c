use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::domain::aggregates::{Product, Review};
use crate::domain::value_objects::ProductId;
use crate::services::lock;

/// A review as typed into the review form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ReviewDraft {
    #[validate(length(min = 1, max = 100))]
    pub author: String,
    #[validate(length(min = 1, max = 2000))]
    pub comment: String,
}

impl ReviewDraft {
    pub fn trimmed(self) -> Self {
        Self { author: self.author.trim().to_string(), comment: self.comment.trim().to_string() }
    }
}

/// Reviews written during this session, on top of the catalog's own.
#[derive(Clone, Debug, Default)]
pub struct ReviewBook {
    added: Arc<Mutex<HashMap<ProductId, Vec<Review>>>>,
}

impl ReviewBook {
    pub fn new() -> Self { Self::default() }

    /// Appends a review stamped with the current time. No deduplication.
    pub fn add(&self, product: &ProductId, draft: ReviewDraft) -> Result<Review, validator::ValidationErrors> {
        let draft = draft.trimmed();
        draft.validate()?;
        let review = Review::new(draft.author, draft.comment, Utc::now());
        tracing::info!(product_id = %product, author = %review.author, "review added");
        lock(&self.added).entry(product.clone()).or_default().push(review.clone());
        Ok(review)
    }

    /// The product's catalog reviews followed by the ones added here.
    pub fn reviews_for(&self, product: &Product) -> Vec<Review> {
        let added = lock(&self.added);
        let mut reviews = product.reviews().to_vec();
        if let Some(extra) = added.get(product.id()) {
            reviews.extend(extra.iter().cloned());
        }
        reviews
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn draft(author: &str, comment: &str) -> ReviewDraft {
        ReviewDraft { author: author.into(), comment: comment.into() }
    }

    #[test]
    fn test_reviews_append_after_catalog_reviews() {
        let existing = Review { author: "John".into(), comment: "Great!".into(), date: "2025-01-01".into() };
        let product = Product::create(ProductId::new("2").unwrap(), "Orange", Decimal::new(249, 2))
            .unwrap()
            .with_reviews(vec![existing.clone()]);
        let book = ReviewBook::new();

        let added = book.add(product.id(), draft(" Test User ", "This is my review")).unwrap();
        book.add(product.id(), draft("Test User", "This is my review")).unwrap();

        let reviews = book.reviews_for(&product);
        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0], existing);
        assert_eq!(added.author, "Test User");
        assert!(chrono::DateTime::parse_from_rfc3339(&added.date).is_ok());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let book = ReviewBook::new();
        let id = ProductId::new("1").unwrap();
        assert!(book.add(&id, draft("", "text")).is_err());
        assert!(book.add(&id, draft("name", "   ")).is_err());
    }
}
