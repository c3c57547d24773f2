//! Row expansion keyed by row identity.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::rc::Rc;

use crate::error::TableContractError;

/// Extracts a stable identity from a row.
pub type IdGetter<T, K> = Rc<dyn Fn(&T) -> K>;

/// Renders the expandable panel for a row.
pub type ExtraContentRenderer<T, V> = Rc<dyn Fn(&T) -> V>;

/// Expandable per-row panel: identity extractor plus content renderer.
pub struct RowExtraContent<T, K, V> {
    /// Stable, unique row identity across the full unpaginated set.
    pub id_getter: IdGetter<T, K>,
    /// Panel renderer.
    pub component: ExtraContentRenderer<T, V>,
}

impl<T, K, V> Clone for RowExtraContent<T, K, V> {
    fn clone(&self) -> Self {
        Self {
            id_getter: Rc::clone(&self.id_getter),
            component: Rc::clone(&self.component),
        }
    }
}

impl<T, K, V> RowExtraContent<T, K, V> {
    /// Creates the descriptor.
    pub fn new(
        id_getter: impl Fn(&T) -> K + 'static,
        component: impl Fn(&T) -> V + 'static,
    ) -> Self {
        Self {
            id_getter: Rc::new(id_getter),
            component: Rc::new(component),
        }
    }

    /// Identity of `row`.
    pub fn key_of(&self, row: &T) -> K {
        (self.id_getter)(row)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Set of currently expanded row identities.
///
/// Every row starts collapsed and toggles indefinitely. Membership is keyed by
/// identity, not position, so it survives re-sorting and paging.
pub struct ExpansionSet<K: Eq + Hash> {
    expanded: HashSet<K>,
}

impl<K: Eq + Hash> Default for ExpansionSet<K> {
    fn default() -> Self {
        Self {
            expanded: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> ExpansionSet<K> {
    /// Empty set; every row collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the row's state. Returns `true` when it is now expanded.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.expanded.remove(&key) {
            false
        } else {
            self.expanded.insert(key);
            true
        }
    }

    /// Expands the row.
    pub fn expand(&mut self, key: K) {
        self.expanded.insert(key);
    }

    /// Collapses the row.
    pub fn collapse(&mut self, key: &K) {
        self.expanded.remove(key);
    }

    /// Whether the row is expanded.
    pub fn is_expanded(&self, key: &K) -> bool {
        self.expanded.contains(key)
    }

    /// Number of expanded rows.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Whether no row is expanded.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Collapses every row.
    pub fn clear(&mut self) {
        self.expanded.clear();
    }
}

/// Checks that `id_getter` yields a distinct key for every row.
///
/// # Errors
///
/// Returns [`TableContractError::DuplicateRowKey`] for the first repeated key.
pub fn validate_unique_keys<T, K>(
    rows: &[T],
    id_getter: impl Fn(&T) -> K,
) -> Result<(), TableContractError>
where
    K: Eq + Hash + Display,
{
    let mut seen = HashSet::with_capacity(rows.len());
    for row in rows {
        let key = id_getter(row);
        if seen.contains(&key) {
            return Err(TableContractError::DuplicateRowKey(key.to_string()));
        }
        seen.insert(key);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::pagination::{page_slice, PageSize, PaginationState};

    #[derive(Debug, Clone)]
    struct Order {
        id: String,
    }

    fn orders(count: usize) -> Vec<Order> {
        (0..count)
            .map(|n| Order {
                id: format!("ord-{n}"),
            })
            .collect()
    }

    #[test]
    fn rows_start_collapsed_and_toggle_indefinitely() {
        let mut set = ExpansionSet::new();
        assert!(!set.is_expanded(&"a"));
        assert!(set.toggle("a"));
        assert!(!set.toggle("a"));
        assert!(set.toggle("a"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn toggles_are_independent_per_row() {
        let mut set = ExpansionSet::new();
        set.toggle(1);
        set.toggle(2);
        set.collapse(&1);
        assert!(!set.is_expanded(&1));
        assert!(set.is_expanded(&2));
    }

    #[test]
    fn expansion_survives_paging_away_and_back() {
        let all = orders(23);
        let extra = RowExtraContent::new(|o: &Order| o.id.clone(), |o: &Order| o.id.len());
        let mut pagination = PaginationState::new(PageSize::Ten, all.len());
        let mut expanded = ExpansionSet::new();

        let first_page = page_slice(&all, &pagination);
        expanded.toggle(extra.key_of(&first_page[3]));

        pagination = pagination.with_page(1);
        let second_page = page_slice(&all, &pagination);
        assert!(second_page
            .iter()
            .all(|row| !expanded.is_expanded(&extra.key_of(row))));

        pagination = pagination.with_page(0);
        let first_again = page_slice(&all, &pagination);
        let open: Vec<String> = first_again
            .iter()
            .map(|row| extra.key_of(row))
            .filter(|key| expanded.is_expanded(key))
            .collect();
        assert_eq!(open, vec!["ord-3".to_string()]);
    }

    #[test]
    fn expansion_follows_identity_through_reordering() {
        let mut rows = orders(3);
        let mut expanded = ExpansionSet::new();
        expanded.toggle(rows[0].id.clone());
        rows.reverse();
        assert!(expanded.is_expanded(&rows[2].id));
        assert!(!expanded.is_expanded(&rows[0].id));
    }

    #[test]
    fn duplicate_row_keys_are_reported() {
        let mut rows = orders(3);
        assert!(validate_unique_keys(&rows, |o| o.id.clone()).is_ok());
        rows.push(Order {
            id: "ord-1".to_string(),
        });
        assert_eq!(
            validate_unique_keys(&rows, |o| o.id.clone()),
            Err(TableContractError::DuplicateRowKey("ord-1".to_string()))
        );
    }
}
