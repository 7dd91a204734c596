use crate::api::types::TargetId;
use crate::components::target::LetterTarget;

/// Live set of spawned letter targets, stored in a flat Vec.
/// Designed for the small counts this game reaches (tens, not thousands).
///
/// Removal preserves the relative order of survivors: hit resolution breaks
/// distance ties by registry order, so `despawn` must not shuffle entries.
pub struct TargetRegistry {
    targets: Vec<LetterTarget>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self {
            targets: Vec::with_capacity(32),
        }
    }

    /// Add a target to the registry.
    pub fn spawn(&mut self, target: LetterTarget) {
        self.targets.push(target);
    }

    /// Remove a target by ID. Returns the removed target if found.
    pub fn despawn(&mut self, id: TargetId) -> Option<LetterTarget> {
        self.targets
            .iter()
            .position(|t| t.id == id)
            .map(|idx| self.targets.remove(idx))
    }

    /// Get a reference to a target by ID.
    pub fn get(&self, id: TargetId) -> Option<&LetterTarget> {
        self.targets.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a target by ID.
    pub fn get_mut(&mut self, id: TargetId) -> Option<&mut LetterTarget> {
        self.targets.iter_mut().find(|t| t.id == id)
    }

    /// Iterate over all targets in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &LetterTarget> {
        self.targets.iter()
    }

    /// Iterate over all targets mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut LetterTarget> {
        self.targets.iter_mut()
    }

    /// Keep only targets matching the predicate, preserving order.
    pub fn retain(&mut self, f: impl FnMut(&LetterTarget) -> bool) {
        self.targets.retain(f);
    }

    /// Number of live targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Clear all targets.
    pub fn clear(&mut self) {
        self.targets.clear();
    }
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn spawn_and_get() {
        let mut reg = TargetRegistry::new();
        let id = TargetId(1);
        reg.spawn(LetterTarget::new(id, 'A').with_pos(Vec3::new(15.0, 2.0, -10.0)));
        let t = reg.get(id).unwrap();
        assert_eq!(t.letter, 'A');
        assert_eq!(t.pos, Vec3::new(15.0, 2.0, -10.0));
    }

    #[test]
    fn despawn_removes_target() {
        let mut reg = TargetRegistry::new();
        reg.spawn(LetterTarget::new(TargetId(1), 'A'));
        assert_eq!(reg.len(), 1);
        let removed = reg.despawn(TargetId(1)).unwrap();
        assert_eq!(removed.letter, 'A');
        assert!(reg.is_empty());
    }

    #[test]
    fn despawn_missing_id_is_none() {
        let mut reg = TargetRegistry::new();
        reg.spawn(LetterTarget::new(TargetId(1), 'A'));
        assert!(reg.despawn(TargetId(99)).is_none());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn despawn_preserves_survivor_order() {
        let mut reg = TargetRegistry::new();
        for (i, letter) in ['A', 'B', 'C', 'D'].into_iter().enumerate() {
            reg.spawn(LetterTarget::new(TargetId(i as u32 + 1), letter));
        }
        reg.despawn(TargetId(2));
        let order: Vec<char> = reg.iter().map(|t| t.letter).collect();
        assert_eq!(order, vec!['A', 'C', 'D']);
    }
}
