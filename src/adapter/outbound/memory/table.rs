//! Per-kind record table with its own id sequence.

use std::collections::BTreeMap;

/// Records of one entity kind keyed by surrogate id.
///
/// The `BTreeMap` keeps iteration in id order, which is insertion order
/// since ids only grow. Scans therefore return the earliest match first.
#[derive(Debug)]
pub(super) struct Table<T> {
    next_id: u64,
    rows: BTreeMap<u64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    /// Reserve the next id, build the record with it and store it.
    pub(super) fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub(super) fn get(&self, id: u64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    pub(super) fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| pred(row)).cloned()
    }

    pub(super) fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| pred(row)).cloned().collect()
    }

    pub(super) fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    /// Mutate the record with this id in place. Returns false if absent.
    pub(super) fn update(&mut self, id: u64, apply: impl FnOnce(&mut T)) -> bool {
        match self.rows.get_mut(&id) {
            Some(row) => {
                apply(row);
                true
            }
            None => false,
        }
    }

    /// Mutate the first record matching `pred`. Returns false if none does.
    pub(super) fn update_first(
        &mut self,
        mut pred: impl FnMut(&T) -> bool,
        apply: impl FnOnce(&mut T),
    ) -> bool {
        match self.rows.values_mut().find(|row| pred(row)) {
            Some(row) => {
                apply(row);
                true
            }
            None => false,
        }
    }

    pub(super) fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut table = Table::<(u64, &str)>::default();
        let a = table.insert_with(|id| (id, "a"));
        let b = table.insert_with(|id| (id, "b"));

        assert_eq!(a.0, 1);
        assert_eq!(b.0, 2);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn find_returns_earliest_match() {
        let mut table = Table::<(u64, &str)>::default();
        table.insert_with(|id| (id, "dup"));
        table.insert_with(|id| (id, "dup"));

        assert_eq!(table.find(|row| row.1 == "dup").map(|r| r.0), Some(1));
    }

    #[test]
    fn update_reports_missing_rows() {
        let mut table = Table::<(u64, &str)>::default();
        table.insert_with(|id| (id, "a"));

        assert!(table.update(1, |row| row.1 = "b"));
        assert!(!table.update(9, |row| row.1 = "c"));
        assert_eq!(table.get(1).map(|r| r.1), Some("b"));
        assert!(!table.update_first(|row| row.1 == "zzz", |row| row.1 = "c"));
    }
}
