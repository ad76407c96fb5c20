use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque labeled part. Two parts with the same label are
/// interchangeable; a part has no identity beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    label: String,
}

impl Part {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// An ordered collection of parts. Insertion order is assembly order.
///
/// Only builders append to a product while assembling it; readers get
/// the parts in order and never mutate. Whether a product is "complete"
/// is a convention between the caller and the recipe that produced it,
/// not something this type enforces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    parts: Vec<Part>,
}

impl Product {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a part at the end of the assembly order.
    pub fn add(&mut self, part: Part) {
        self.parts.push(part);
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Part labels in assembly order.
    pub fn labels(&self) -> Vec<&str> {
        self.parts.iter().map(Part::label).collect()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// One-line listing of the parts, e.g. `airframe body, left turbine`.
    pub fn describe(&self) -> String {
        self.parts.iter().map(Part::label).join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_keep_insertion_order() {
        let mut product = Product::new();
        product.add(Part::new("first"));
        product.add(Part::new("second"));
        product.add(Part::new("third"));

        assert_eq!(product.labels(), vec!["first", "second", "third"]);
        assert_eq!(product.len(), 3);
    }

    #[test]
    fn describe_joins_labels_in_order() {
        let mut product = Product::new();
        product.add(Part::new("hull"));
        product.add(Part::new("mast"));

        assert_eq!(product.describe(), "hull, mast");
    }

    #[test]
    fn reading_does_not_mutate() {
        let mut product = Product::new();
        product.add(Part::new("only"));

        let before = product.clone();
        let _ = product.parts();
        let _ = product.describe();
        let _ = product.labels();
        assert_eq!(product, before);
    }

    #[test]
    fn duplicate_labels_are_equal_parts() {
        assert_eq!(Part::new("engine"), Part::new("engine"));
        assert_ne!(Part::new("engine"), Part::new("wing"));
    }

    #[test]
    fn empty_product_describes_as_empty() {
        let product = Product::new();
        assert!(product.is_empty());
        assert_eq!(product.describe(), "");
    }
}
