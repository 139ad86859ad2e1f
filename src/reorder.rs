//! Sequence Reordering Controller
//!
//! Turns one drag-release gesture into at most one `PUT /products/sequence`
//! followed by a refetch of the category. The rendered list is never
//! reordered locally; it only changes when a refetch succeeds.
//!
//! `Idle -> Dragging -> (Dropped | DroppedOutside) -> Idle`

use std::cell::Cell;
use std::str::FromStr;

use leptos_dragdrop::Release;

use crate::backend::CatalogBackend;
use crate::error::ApiError;
use crate::models::Product;
use crate::sequence::{order_of, SequenceUpdate};

/// What a release outside every card means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropOutsidePolicy {
    /// Send the head sentinel (`targetProductId = 0`)
    #[default]
    MoveToHead,
    /// Treat it like pressing escape: no request
    Cancel,
}

impl FromStr for DropOutsidePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "move-to-head" | "head" => Ok(DropOutsidePolicy::MoveToHead),
            "cancel" => Ok(DropOutsidePolicy::Cancel),
            other => Err(format!("unknown drop-outside policy: {}", other)),
        }
    }
}

/// Transient state of one pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub dragged_id: u32,
    pub origin_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnchangedReason {
    /// Release arrived with no drag in progress
    NotDragging,
    DroppedOnSelf,
    /// Released outside with `DropOutsidePolicy::Cancel`
    Cancelled,
    /// Mutation was sent but there is no category to refetch
    NoCategory,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReorderOutcome {
    /// Authoritative order after the move
    Reordered(Vec<Product>),
    Unchanged(UnchangedReason),
    /// Mutation or refetch failed; the previous order stays on screen
    Failed(ApiError),
}

impl ReorderOutcome {
    /// Replace the snapshot with the refetched list. Returns whether it changed.
    pub fn apply_to(self, products: &mut Vec<Product>) -> bool {
        match self {
            ReorderOutcome::Reordered(list) => {
                *products = list;
                true
            }
            _ => false,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ReorderOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

pub struct ReorderController<B> {
    backend: B,
    policy: DropOutsidePolicy,
    phase: Cell<DragPhase>,
}

impl<B: CatalogBackend> ReorderController<B> {
    pub fn new(backend: B, policy: DropOutsidePolicy) -> Self {
        Self { backend, policy, phase: Cell::new(DragPhase::Idle) }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn phase(&self) -> DragPhase {
        self.phase.get()
    }

    /// Record the dragged card. Local state only.
    pub fn begin_drag(&self, dragged_id: u32, origin_index: usize) {
        if let DragPhase::Dragging(prev) = self.phase.get() {
            log::warn!("[DND] drag of {} replaced by {} before release", prev.dragged_id, dragged_id);
        }
        self.phase.set(DragPhase::Dragging(DragState { dragged_id, origin_index }));
    }

    /// Release over a card. Dropping a card on itself is a cancel.
    pub async fn drop_on_target(&self, target_id: u32, category: Option<&str>) -> ReorderOutcome {
        let Some(drag) = self.take_drag() else {
            return ReorderOutcome::Unchanged(UnchangedReason::NotDragging);
        };
        if drag.dragged_id == target_id {
            log::debug!("[DND] {} dropped on itself, ignoring", target_id);
            return ReorderOutcome::Unchanged(UnchangedReason::DroppedOnSelf);
        }
        self.commit(SequenceUpdate::place_adjacent(drag.dragged_id, target_id), category).await
    }

    /// Release outside every card
    pub async fn drag_end_without_drop(&self, category: Option<&str>) -> ReorderOutcome {
        let Some(drag) = self.take_drag() else {
            return ReorderOutcome::Unchanged(UnchangedReason::NotDragging);
        };
        match self.policy {
            DropOutsidePolicy::MoveToHead => {
                self.commit(SequenceUpdate::move_to_head(drag.dragged_id), category).await
            }
            DropOutsidePolicy::Cancel => {
                log::debug!("[DND] {} released outside, cancelled", drag.dragged_id);
                ReorderOutcome::Unchanged(UnchangedReason::Cancelled)
            }
        }
    }

    /// Dispatch a finished gesture from the drag crate
    pub async fn settle(&self, release: Release, category: Option<&str>) -> ReorderOutcome {
        // the phase may lag a very quick gesture
        if self.phase() == DragPhase::Idle {
            let source = release.source();
            self.begin_drag(source.id, source.index);
        }
        match release {
            Release::Dropped { target, .. } => self.drop_on_target(target, category).await,
            Release::Outside { .. } => self.drag_end_without_drop(category).await,
        }
    }

    /// Back to idle before anything is awaited, so a release is consumed once
    fn take_drag(&self) -> Option<DragState> {
        match self.phase.replace(DragPhase::Idle) {
            DragPhase::Dragging(drag) => Some(drag),
            DragPhase::Idle => None,
        }
    }

    async fn commit(&self, update: SequenceUpdate, category: Option<&str>) -> ReorderOutcome {
        log::info!(
            "[DND] move {} next to {}",
            update.current_product_id, update.target_product_id
        );
        if let Err(err) = self.backend.update_sequence(update).await {
            log::error!("[DND] sequence update failed: {}", err);
            return ReorderOutcome::Failed(err);
        }

        let Some(category) = category else {
            log::warn!("[DND] no current category, skipping refetch");
            return ReorderOutcome::Unchanged(UnchangedReason::NoCategory);
        };

        match self.backend.list_products(category).await {
            Ok(products) => {
                log::debug!("[DND] refetched {}: {:?}", category, order_of(&products));
                ReorderOutcome::Reordered(products)
            }
            Err(err) => {
                log::error!("[DND] refetch of {} failed: {}", category, err);
                ReorderOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::{product, FakeCatalog};

    const CATEGORY: &str = "guard-rails";

    fn controller(ids: &[u32]) -> ReorderController<FakeCatalog> {
        ReorderController::new(FakeCatalog::with_category(CATEGORY, ids), DropOutsidePolicy::default())
    }

    fn rendered(ids: &[u32]) -> Vec<Product> {
        ids.iter().copied().map(product).collect()
    }

    #[tokio::test]
    async fn test_drag_last_onto_first() {
        let ctl = controller(&[1, 2, 3]);
        let mut shown = rendered(&[1, 2, 3]);

        ctl.begin_drag(3, 2);
        let outcome = ctl.drop_on_target(1, Some(CATEGORY)).await;

        assert_eq!(
            *ctl.backend().requests.borrow(),
            vec![SequenceUpdate { current_product_id: 3, target_product_id: 1 }]
        );
        assert!(outcome.apply_to(&mut shown));
        assert_eq!(order_of(&shown), vec![3, 1, 2]);
        assert_eq!(ctl.phase(), DragPhase::Idle);
    }

    #[tokio::test]
    async fn test_dropped_item_lands_next_to_target() {
        let ids = [1, 2, 3, 4];
        for (from, &dragged) in ids.iter().enumerate() {
            for (to, &target) in ids.iter().enumerate() {
                if dragged == target {
                    continue;
                }
                let ctl = controller(&ids);
                ctl.begin_drag(dragged, from);
                let mut shown = rendered(&ids);
                assert!(ctl.drop_on_target(target, Some(CATEGORY)).await.apply_to(&mut shown));

                let order = order_of(&shown);
                let a = order.iter().position(|&id| id == dragged).unwrap();
                let b = order.iter().position(|&id| id == target).unwrap();
                if from > to {
                    assert_eq!(a + 1, b, "{} moved up should sit before {}: {:?}", dragged, target, order);
                } else {
                    assert_eq!(b + 1, a, "{} moved down should sit after {}: {:?}", dragged, target, order);
                }
            }
        }
    }

    #[tokio::test]
    async fn test_drag_released_on_its_own_card_is_a_no_op() {
        use leptos_dragdrop::{classify_release, start_drag, DragSource};

        let ctl = controller(&[1, 2, 3]);
        let mut shown = rendered(&[1, 2, 3]);

        // press card 2 and wiggle past the threshold without leaving it
        let pressed = DragSource { id: 2, index: 1 };
        let (source, hovered) = start_drag(Some(pressed), None, (40, 40), (48, 43)).unwrap();
        let release = classify_release(Some(source), Some(hovered)).unwrap();

        let outcome = ctl.settle(release, Some(CATEGORY)).await;

        assert_eq!(outcome, ReorderOutcome::Unchanged(UnchangedReason::DroppedOnSelf));
        assert!(ctl.backend().requests.borrow().is_empty());
        assert!(!outcome.apply_to(&mut shown));
        assert_eq!(order_of(&shown), vec![1, 2, 3]);
        assert_eq!(ctl.backend().order(CATEGORY), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_settle_outside_without_effect_flush() {
        use leptos_dragdrop::{DragSource, Release};

        let ctl = controller(&[1, 2, 3]);
        let release = Release::Outside { source: DragSource { id: 3, index: 2 } };

        let outcome = ctl.settle(release, Some(CATEGORY)).await;

        assert_eq!(
            *ctl.backend().requests.borrow(),
            vec![SequenceUpdate { current_product_id: 3, target_product_id: 0 }]
        );
        assert!(matches!(outcome, ReorderOutcome::Reordered(_)));
        assert_eq!(ctl.phase(), DragPhase::Idle);
    }

    #[tokio::test]
    async fn test_drop_on_self_sends_nothing() {
        let ctl = controller(&[1, 2, 3]);
        let mut shown = rendered(&[1, 2, 3]);

        ctl.begin_drag(2, 1);
        let outcome = ctl.drop_on_target(2, Some(CATEGORY)).await;

        assert_eq!(outcome, ReorderOutcome::Unchanged(UnchangedReason::DroppedOnSelf));
        assert!(!outcome.apply_to(&mut shown));
        assert!(ctl.backend().requests.borrow().is_empty());
        assert!(ctl.backend().list_calls.borrow().is_empty());
        assert_eq!(order_of(&shown), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_rendered_order() {
        let mut backend = FakeCatalog::with_category(CATEGORY, &[1, 2, 3]);
        backend.fail_update = Some(ApiError::Transport("offline".into()));
        let ctl = ReorderController::new(backend, DropOutsidePolicy::MoveToHead);
        let mut shown = rendered(&[1, 2, 3]);

        ctl.begin_drag(3, 2);
        let outcome = ctl.drop_on_target(1, Some(CATEGORY)).await;

        assert_eq!(outcome.error(), Some(&ApiError::Transport("offline".into())));
        assert!(!outcome.apply_to(&mut shown));
        assert_eq!(order_of(&shown), vec![1, 2, 3]);
        // no refetch after a failed mutation
        assert!(ctl.backend().list_calls.borrow().is_empty());
        assert_eq!(ctl.phase(), DragPhase::Idle);
    }

    #[tokio::test]
    async fn test_rejected_update_is_handled_like_transport_failure() {
        let mut backend = FakeCatalog::with_category(CATEGORY, &[1, 2]);
        backend.fail_update = Some(ApiError::Status { status: 409, body: "deleted".into() });
        let ctl = ReorderController::new(backend, DropOutsidePolicy::MoveToHead);
        let mut shown = rendered(&[1, 2]);

        ctl.begin_drag(2, 1);
        let outcome = ctl.drop_on_target(1, Some(CATEGORY)).await;

        assert_eq!(outcome.error().and_then(ApiError::status), Some(409));
        assert!(!outcome.apply_to(&mut shown));
        assert_eq!(order_of(&shown), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_failed_refetch_keeps_rendered_order() {
        let mut backend = FakeCatalog::with_category(CATEGORY, &[1, 2, 3]);
        backend.fail_list = Some(ApiError::Status { status: 500, body: String::new() });
        let ctl = ReorderController::new(backend, DropOutsidePolicy::MoveToHead);
        let mut shown = rendered(&[1, 2, 3]);

        ctl.begin_drag(1, 0);
        let outcome = ctl.drop_on_target(3, Some(CATEGORY)).await;

        assert!(outcome.error().is_some());
        assert!(!outcome.apply_to(&mut shown));
        assert_eq!(order_of(&shown), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_release_outside_moves_to_head() {
        let ctl = controller(&[1, 2, 3]);

        ctl.begin_drag(2, 1);
        let outcome = ctl.drag_end_without_drop(Some(CATEGORY)).await;

        assert_eq!(
            *ctl.backend().requests.borrow(),
            vec![SequenceUpdate { current_product_id: 2, target_product_id: 0 }]
        );
        let mut shown = rendered(&[1, 2, 3]);
        assert!(outcome.apply_to(&mut shown));
        assert_eq!(order_of(&shown), vec![2, 1, 3]);
    }

    #[tokio::test]
    async fn test_release_outside_with_cancel_policy() {
        let ctl = ReorderController::new(
            FakeCatalog::with_category(CATEGORY, &[1, 2, 3]),
            DropOutsidePolicy::Cancel,
        );

        ctl.begin_drag(2, 1);
        let outcome = ctl.drag_end_without_drop(Some(CATEGORY)).await;

        assert_eq!(outcome, ReorderOutcome::Unchanged(UnchangedReason::Cancelled));
        assert!(ctl.backend().requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_release_is_consumed_once() {
        let ctl = controller(&[1, 2, 3]);

        assert_eq!(
            ctl.drop_on_target(1, Some(CATEGORY)).await,
            ReorderOutcome::Unchanged(UnchangedReason::NotDragging)
        );

        ctl.begin_drag(3, 2);
        ctl.drop_on_target(1, Some(CATEGORY)).await;
        assert_eq!(
            ctl.drag_end_without_drop(Some(CATEGORY)).await,
            ReorderOutcome::Unchanged(UnchangedReason::NotDragging)
        );
        assert_eq!(ctl.backend().requests.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_no_category_sends_update_without_refetch() {
        let ctl = controller(&[1, 2, 3]);

        ctl.begin_drag(3, 2);
        let outcome = ctl.drop_on_target(1, None).await;

        assert_eq!(outcome, ReorderOutcome::Unchanged(UnchangedReason::NoCategory));
        assert_eq!(ctl.backend().requests.borrow().len(), 1);
        assert!(ctl.backend().list_calls.borrow().is_empty());
    }

    #[test]
    fn test_second_begin_drag_replaces_first() {
        let ctl = controller(&[1, 2, 3]);
        ctl.begin_drag(1, 0);
        ctl.begin_drag(2, 1);
        assert_eq!(ctl.phase(), DragPhase::Dragging(DragState { dragged_id: 2, origin_index: 1 }));
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("move-to-head".parse(), Ok(DropOutsidePolicy::MoveToHead));
        assert_eq!(" Cancel ".parse(), Ok(DropOutsidePolicy::Cancel));
        assert!("sideways".parse::<DropOutsidePolicy>().is_err());
    }
}
