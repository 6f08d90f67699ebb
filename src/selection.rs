//! Multi-select state for bulk actions
//!
//! Selection is tracked by record identifier, independently of the query
//! spec. The policy decides what happens to selected ids that drop out of
//! view after a filter or page change.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// What happens to hidden selected records on reconcile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Only ids on the visible page stay selected
    PageLocal,
    /// Selected ids survive filter and page changes
    #[default]
    Persistent,
}

/// Set of selected record ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<K: Ord> {
    policy: SelectionPolicy,
    selected: BTreeSet<K>,
}

impl<K: Ord> Default for Selection<K> {
    fn default() -> Self {
        Self {
            policy: SelectionPolicy::default(),
            selected: BTreeSet::new(),
        }
    }
}

impl<K: Ord + Clone> Selection<K> {
    /// Creates an empty selection with the given policy
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            selected: BTreeSet::new(),
        }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Flips one id. Returns true if it is now selected.
    pub fn toggle(&mut self, id: K) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    pub fn select(&mut self, id: K) {
        self.selected.insert(id);
    }

    pub fn deselect(&mut self, id: &K) {
        self.selected.remove(id);
    }

    /// Selects every id of a page
    pub fn select_page<I: IntoIterator<Item = K>>(&mut self, ids: I) {
        self.selected.extend(ids);
    }

    /// Deselects every id of a page, leaving other pages alone
    pub fn clear_page<'k, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        for id in ids {
            self.selected.remove(id);
        }
    }

    /// Header checkbox: clears the page when fully selected, otherwise
    /// selects all of it. Returns true if the page ends up selected.
    pub fn toggle_page(&mut self, ids: &[K]) -> bool {
        if self.is_page_fully_selected(ids) {
            self.clear_page(ids);
            false
        } else {
            self.select_page(ids.iter().cloned());
            !ids.is_empty()
        }
    }

    pub fn is_selected(&self, id: &K) -> bool {
        self.selected.contains(id)
    }

    /// True when the page is non-empty and all of it is selected
    pub fn is_page_fully_selected(&self, ids: &[K]) -> bool {
        !ids.is_empty() && ids.iter().all(|id| self.selected.contains(id))
    }

    /// Applies the policy after the visible set changed.
    ///
    /// Returns how many ids were dropped.
    pub fn reconcile<'k, I>(&mut self, visible: I) -> usize
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        match self.policy {
            SelectionPolicy::Persistent => 0,
            SelectionPolicy::PageLocal => {
                let visible: BTreeSet<&K> = visible.into_iter().collect();
                let before = self.selected.len();
                self.selected.retain(|id| visible.contains(id));
                before - self.selected.len()
            }
        }
    }

    /// Selected ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
