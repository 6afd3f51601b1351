use std::collections::HashMap;
use std::sync::Arc;

use concierge_domain::{BusinessUnitId, UserId};
use tokio::sync::{Mutex, OwnedMutexGuard};

type AssignmentKey = (BusinessUnitId, UserId);

/// Per-assignment mutexes serializing read-modify-write cycles.
///
/// Mutations on different business unit and user pairs never contend.
/// Idle entries are dropped on the next acquisition, so the map only holds
/// pairs with a mutation in flight.
#[derive(Debug, Default)]
pub(super) struct AssignmentLocks {
    locks: Mutex<HashMap<AssignmentKey, Arc<Mutex<()>>>>,
}

impl AssignmentLocks {
    pub(super) async fn acquire(
        &self,
        business_unit_id: &BusinessUnitId,
        user_id: &UserId,
    ) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            // Holders and waiters keep a clone; a count of one means idle.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks
                .entry((business_unit_id.clone(), user_id.clone()))
                .or_default()
                .clone()
        };

        lock.lock_owned().await
    }

    #[cfg(test)]
    async fn tracked_pairs(&self) -> usize {
        self.locks.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use concierge_domain::{BusinessUnitId, UserId};

    use super::AssignmentLocks;

    fn key(business_unit_id: &str, user_id: &str) -> (BusinessUnitId, UserId) {
        (
            BusinessUnitId::new(business_unit_id).unwrap_or_else(|_| unreachable!()),
            UserId::new(user_id).unwrap_or_else(|_| unreachable!()),
        )
    }

    #[tokio::test]
    async fn released_pairs_are_dropped_on_next_acquire() {
        let locks = AssignmentLocks::default();
        let (first_unit, first_user) = key("BU-1", "U-1");
        let (second_unit, second_user) = key("BU-2", "U-1");

        let first = locks.acquire(&first_unit, &first_user).await;
        let second = locks.acquire(&second_unit, &second_user).await;
        assert_eq!(locks.tracked_pairs().await, 2);

        drop(first);
        drop(second);
        let third = locks.acquire(&second_unit, &second_user).await;

        assert_eq!(locks.tracked_pairs().await, 1);
        drop(third);
    }

    #[tokio::test]
    async fn held_pair_survives_pruning_and_still_excludes() {
        let locks = AssignmentLocks::default();
        let (unit, user) = key("BU-1", "U-1");
        let (other_unit, other_user) = key("BU-9", "U-9");

        let held = locks.acquire(&unit, &user).await;
        let other = locks.acquire(&other_unit, &other_user).await;
        drop(other);

        let contended =
            tokio::time::timeout(Duration::from_millis(50), locks.acquire(&unit, &user)).await;
        assert!(contended.is_err());

        drop(held);
        let reacquired =
            tokio::time::timeout(Duration::from_millis(500), locks.acquire(&unit, &user)).await;
        assert!(reacquired.is_ok());
    }
}
