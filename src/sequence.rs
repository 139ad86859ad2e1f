//! Product Sequence
//!
//! Vocabulary for the persisted display order. The backend owns the order;
//! the client only names a pairwise move and then refetches.

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Target id meaning "move to the head of the list"
pub const HEAD_SENTINEL: u32 = 0;

/// Body of `PUT /products/sequence`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceUpdate {
    pub current_product_id: u32,
    pub target_product_id: u32,
}

impl SequenceUpdate {
    pub fn place_adjacent(dragged_id: u32, target_id: u32) -> Self {
        Self { current_product_id: dragged_id, target_product_id: target_id }
    }

    pub fn move_to_head(dragged_id: u32) -> Self {
        Self::place_adjacent(dragged_id, HEAD_SENTINEL)
    }
}

/// Where the dragged card lands relative to the hovered card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

impl Placement {
    pub fn css_class(self) -> &'static str {
        match self {
            Placement::Before => "drop-before",
            Placement::After => "drop-after",
        }
    }
}

/// Moving up lands before the target, moving down lands after it.
/// `None` when both indices are the same card.
pub fn drop_placement(origin_index: usize, target_index: usize) -> Option<Placement> {
    use std::cmp::Ordering;
    match origin_index.cmp(&target_index) {
        Ordering::Greater => Some(Placement::Before),
        Ordering::Less => Some(Placement::After),
        Ordering::Equal => None,
    }
}

/// Ids in display order, mostly for logging
pub fn order_of(products: &[Product]) -> Vec<u32> {
    products.iter().map(|p| p.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_matches_backend_contract() {
        let body = serde_json::to_value(SequenceUpdate::place_adjacent(3, 1)).unwrap();
        assert_eq!(body, serde_json::json!({"currentProductId": 3, "targetProductId": 1}));
    }

    #[test]
    fn test_move_to_head_uses_sentinel() {
        let update = SequenceUpdate::move_to_head(5);
        assert_eq!(update.target_product_id, HEAD_SENTINEL);
        assert_eq!(update.current_product_id, 5);
    }

    #[test]
    fn test_drop_placement_direction() {
        assert_eq!(drop_placement(2, 0), Some(Placement::Before));
        assert_eq!(drop_placement(0, 2), Some(Placement::After));
        assert_eq!(drop_placement(1, 1), None);
    }
}
