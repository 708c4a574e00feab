//! Id-indexed goal arena with active/inactive bookkeeping.
//!
//! Goals are never moved between lists: each slot carries an `active`
//! flag, and the "possible future goals" working subset is a separate
//! focus set over the slots.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::errors::{ActionError, LoadError};

use super::{Goal, GoalId, Vec3};

#[derive(Debug, Clone)]
struct Slot {
    goal: Goal,
    active: bool,
}

/// The canonical goal collection for one run.
///
/// Partitioned at all times into active (still reachable) and inactive
/// (already consumed) goals; the union is constant for the run.
#[derive(Debug, Clone)]
pub struct GoalArena {
    slots: Vec<Slot>,
    index: FxHashMap<GoalId, usize>,
    /// Working subset used for scoring; `None` means all active goals.
    focus: Option<FxHashSet<GoalId>>,
}

impl GoalArena {
    /// Build the arena from the goal table.
    ///
    /// The table must be non-empty and ids must be unique; ids need not
    /// be contiguous.
    pub fn from_table(rows: &[(u32, Vec3)]) -> Result<Self, LoadError> {
        if rows.is_empty() {
            return Err(LoadError::EmptyGoalTable);
        }
        let mut slots = Vec::with_capacity(rows.len());
        let mut index = FxHashMap::default();
        for &(id, position) in rows {
            let id = GoalId(id);
            if index.insert(id, slots.len()).is_some() {
                return Err(LoadError::DuplicateGoal { id: id.inner() });
            }
            slots.push(Slot {
                goal: Goal::new(id, position),
                active: true,
            });
        }
        Ok(Self {
            slots,
            index,
            focus: None,
        })
    }

    /// Total number of goals, active or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of goals still in the active set.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    /// Whether the active set is empty and the run must terminate.
    pub fn is_exhausted(&self) -> bool {
        self.active_count() == 0
    }

    pub fn contains(&self, id: GoalId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get(&self, id: GoalId) -> Option<&Goal> {
        self.index.get(&id).map(|&i| &self.slots[i].goal)
    }

    pub fn get_mut(&mut self, id: GoalId) -> Option<&mut Goal> {
        let i = *self.index.get(&id)?;
        Some(&mut self.slots[i].goal)
    }

    pub fn is_active(&self, id: GoalId) -> bool {
        self.index
            .get(&id)
            .map(|&i| self.slots[i].active)
            .unwrap_or(false)
    }

    /// Ids of all currently active goals.
    pub fn active_ids(&self) -> Vec<GoalId> {
        self.slots
            .iter()
            .filter(|s| s.active)
            .map(|s| s.goal.id)
            .collect()
    }

    fn in_focus(&self, id: GoalId) -> bool {
        match &self.focus {
            Some(set) => set.contains(&id),
            None => true,
        }
    }

    /// The scored candidate subset: active goals inside the focus set.
    pub fn candidates(&self) -> impl Iterator<Item = &Goal> {
        self.slots
            .iter()
            .filter(|s| s.active && self.in_focus(s.goal.id))
            .map(|s| &s.goal)
    }

    /// Mutable view of the scored candidate subset.
    pub fn candidates_mut(&mut self) -> impl Iterator<Item = &mut Goal> {
        let focus = self.focus.clone();
        self.slots
            .iter_mut()
            .filter(move |s| {
                s.active
                    && match &focus {
                        Some(set) => set.contains(&s.goal.id),
                        None => true,
                    }
            })
            .map(|s| &mut s.goal)
    }

    /// Permanently remove a goal from the active set.
    ///
    /// The goal stays in the arena (inactive); its probability state is
    /// cleared so a stale streak cannot leak into reports. If the focus
    /// subset becomes empty it resets to the full remaining set.
    pub fn deactivate(&mut self, id: GoalId) -> Result<(), ActionError> {
        let i = *self
            .index
            .get(&id)
            .ok_or(ActionError::UnknownGoal { id: id.inner() })?;
        let slot = &mut self.slots[i];
        slot.active = false;
        slot.goal.probability = 0.0;
        slot.goal.sample_count = 0;

        if let Some(set) = &mut self.focus {
            set.remove(&id);
            if set.is_empty() {
                debug!(%id, "focus subset emptied, resetting to remaining goals");
                self.focus = None;
            }
        }
        Ok(())
    }

    /// Return a previously consumed goal to the active set.
    ///
    /// Only look-ahead corrections may do this.
    pub fn reactivate(&mut self, id: GoalId) -> Result<(), ActionError> {
        let i = *self
            .index
            .get(&id)
            .ok_or(ActionError::UnknownGoal { id: id.inner() })?;
        self.slots[i].active = true;
        Ok(())
    }

    /// Narrow the scored subset to `ids`.
    ///
    /// Fails open: if `ids` is empty or names a goal the arena does not
    /// know, the focus resets to the full active set and `false` is
    /// returned.
    pub fn narrow_focus(&mut self, ids: &[GoalId]) -> bool {
        if ids.is_empty() || ids.iter().any(|id| !self.contains(*id)) {
            self.focus = None;
            return false;
        }
        let set: FxHashSet<GoalId> = ids
            .iter()
            .copied()
            .filter(|&id| self.is_active(id))
            .collect();
        if set.is_empty() {
            self.focus = None;
            return false;
        }
        self.focus = Some(set);
        true
    }

    /// Reset the scored subset to the full active set.
    pub fn reset_focus(&mut self) {
        self.focus = None;
    }
}
