//! Set of chapter ids already assigned during one reconciliation run.

use std::collections::BTreeSet;

use lesson_model::ChapterId;

/// Ids handed out so far. Only ever grows; there is no way to release a claim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimedIds(BTreeSet<ChapterId>);

impl ClaimedIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ChapterId) -> bool {
        self.0.contains(&id)
    }

    /// Record `id` as taken. Returns `false` if it was already claimed.
    pub fn claim(&mut self, id: ChapterId) -> bool {
        self.0.insert(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ChapterId> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_is_one_shot() {
        let id = ChapterId::new(9).unwrap();
        let mut claimed = ClaimedIds::new();
        assert!(claimed.claim(id));
        assert!(!claimed.claim(id));
        assert!(claimed.contains(id));
        assert_eq!(claimed.len(), 1);
    }
}
