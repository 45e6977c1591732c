//! Product Aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::domain::value_objects::{Money, ProductId};

/// Catalog entry, as stored in one product JSON file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(default)]
    reviews: Vec<Review>,
    in_stock: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub comment: String,
    /// ISO-8601 timestamp
    pub date: String,
}

impl Review {
    pub fn new(author: impl Into<String>, comment: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self { author: author.into(), comment: comment.into(), date: at.to_rfc3339() }
    }

    /// `M/D/YYYY` for parseable timestamps, the raw text otherwise.
    pub fn display_date(&self) -> String {
        DateTime::parse_from_rfc3339(&self.date)
            .map(|d| d.format("%-m/%-d/%Y").to_string())
            .unwrap_or_else(|_| self.date.clone())
    }
}

impl Product {
    pub fn create(id: ProductId, name: impl Into<String>, price: Decimal) -> Result<Self, ProductError> {
        if price.is_sign_negative() && !price.is_zero() { return Err(ProductError::NegativePrice); }
        Ok(Self { id, name: name.into(), price, description: None, image: None, reviews: vec![], in_stock: true })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self { self.description = Some(description.into()); self }
    pub fn with_image(mut self, image: impl Into<String>) -> Self { self.image = Some(image.into()); self }
    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self { self.reviews = reviews; self }
    pub fn out_of_stock(mut self) -> Self { self.in_stock = false; self }

    pub fn id(&self) -> &ProductId { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn price(&self) -> Money { Money::usd(self.price) }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn image(&self) -> Option<&str> { self.image.as_deref() }
    pub fn reviews(&self) -> &[Review] { &self.reviews }
    pub fn is_in_stock(&self) -> bool { self.in_stock }

    /// Checks invariants a deserialized file cannot express on its own.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() { return Err(ProductError::MissingName); }
        if self.price.is_sign_negative() && !self.price.is_zero() { return Err(ProductError::NegativePrice); }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    #[error("missing name")]
    MissingName,
    #[error("negative price")]
    NegativePrice,
}
