//! Ordered item container tagged with a section key and label.
//!
//! [`IndexableList`] is the unit a section is built from: one list per
//! section, holding that section's items in insertion order. Lists compare by
//! key only, so a `Vec<IndexableList<K, E>>` can be sorted into section order
//! with a plain `sort()`.

use std::cmp::Ordering;

use crate::{Indexable, IndexableError};

/// Ordered, mutable sequence of items belonging to one section.
///
/// Index-based operations return [`IndexableError::IndexOutOfRange`] instead
/// of panicking. The key and label are fixed at construction and no mutation
/// touches them.
#[derive(Debug, Clone)]
pub struct IndexableList<K, E> {
    key: K,
    label: String,
    items: Vec<E>,
}

impl<K: Ord, E> IndexableList<K, E> {
    /// Creates an empty list with the given key and label.
    pub fn new(key: K, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            items: Vec::new(),
        }
    }

    /// Creates an empty list with room for `capacity` items.
    pub fn with_capacity(key: K, label: impl Into<String>, capacity: usize) -> Self {
        Self {
            key,
            label: label.into(),
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of items in this section.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item to the end of the list.
    pub fn push(&mut self, item: E) {
        self.items.push(item);
    }

    /// Inserts `item` at `index`, shifting later items right.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, item: E) -> Result<(), IndexableError> {
        self.check_insert(index)?;
        self.items.insert(index, item);
        Ok(())
    }

    /// Inserts every item from `items` starting at `index`, preserving their order.
    pub fn insert_all<I>(&mut self, index: usize, items: I) -> Result<(), IndexableError>
    where
        I: IntoIterator<Item = E>,
    {
        self.check_insert(index)?;
        self.items.splice(index..index, items);
        Ok(())
    }

    /// Appends every item from `items`.
    pub fn append_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = E>,
    {
        self.items.extend(items);
    }

    /// Removes and returns the item at `index`.
    pub fn remove(&mut self, index: usize) -> Result<E, IndexableError> {
        self.check_access(index)?;
        Ok(self.items.remove(index))
    }

    /// Removes all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, index: usize) -> Result<&E, IndexableError> {
        self.check_access(index)?;
        Ok(&self.items[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut E, IndexableError> {
        self.check_access(index)?;
        Ok(&mut self.items[index])
    }

    /// Replaces the item at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: E) -> Result<E, IndexableError> {
        self.check_access(index)?;
        Ok(std::mem::replace(&mut self.items[index], item))
    }

    /// Borrows the items in `start..end`.
    pub fn sub_list(&self, start: usize, end: usize) -> Result<&[E], IndexableError> {
        let len = self.items.len();
        if end > len {
            return Err(IndexableError::IndexOutOfRange { index: end, len });
        }
        if start > end {
            return Err(IndexableError::IndexOutOfRange { index: start, len });
        }
        Ok(&self.items[start..end])
    }

    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    /// Forward iterator over the items. Also iterates backwards via
    /// [`DoubleEndedIterator`].
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, E> {
        self.items.iter_mut()
    }

    /// Iterator positioned at `index`: `next()` yields `index..len`, while
    /// `next_back()` walks down from the last item.
    ///
    /// `index == len()` yields an exhausted iterator.
    pub fn iter_from(&self, index: usize) -> Result<std::slice::Iter<'_, E>, IndexableError> {
        self.check_insert(index)?;
        Ok(self.items[index..].iter())
    }

    fn check_access(&self, index: usize) -> Result<(), IndexableError> {
        if index >= self.items.len() {
            return Err(IndexableError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }

    fn check_insert(&self, index: usize) -> Result<(), IndexableError> {
        if index > self.items.len() {
            return Err(IndexableError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}

impl<K: Ord, E: PartialEq> IndexableList<K, E> {
    /// Position of the first item equal to `item`.
    pub fn index_of(&self, item: &E) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }

    /// Position of the last item equal to `item`.
    pub fn last_index_of(&self, item: &E) -> Option<usize> {
        self.items.iter().rposition(|candidate| candidate == item)
    }

    pub fn contains(&self, item: &E) -> bool {
        self.items.contains(item)
    }

    /// Returns true if every item of `items` is present.
    pub fn contains_all(&self, items: &[E]) -> bool {
        items.iter().all(|item| self.items.contains(item))
    }

    /// Removes the first item equal to `item`. Returns whether anything was removed.
    pub fn remove_item(&mut self, item: &E) -> bool {
        match self.index_of(item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every item that appears in `items`. Returns whether the list changed.
    pub fn remove_all(&mut self, items: &[E]) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !items.contains(item));
        self.items.len() != before
    }

    /// Keeps only items that appear in `items`. Returns whether the list changed.
    pub fn retain_all(&mut self, items: &[E]) -> bool {
        let before = self.items.len();
        self.items.retain(|item| items.contains(item));
        self.items.len() != before
    }
}

impl<K: Ord, E: Clone> IndexableList<K, E> {
    /// Copies the items out into a new vector.
    pub fn to_vec(&self) -> Vec<E> {
        self.items.clone()
    }
}

impl<K: Ord, E> Indexable for IndexableList<K, E> {
    type Key = K;

    fn index_key(&self) -> &K {
        &self.key
    }

    fn index_label(&self) -> &str {
        &self.label
    }
}

impl<K: Ord, E> PartialEq for IndexableList<K, E> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Ord, E> Eq for IndexableList<K, E> {}

impl<K: Ord, E> PartialOrd for IndexableList<K, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, E> Ord for IndexableList<K, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_by_key(other)
    }
}

impl<K: Ord, E> Extend<E> for IndexableList<K, E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<K, E> IntoIterator for IndexableList<K, E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, K, E> IntoIterator for &'a IndexableList<K, E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, K, E> IntoIterator for &'a mut IndexableList<K, E> {
    type Item = &'a mut E;
    type IntoIter = std::slice::IterMut<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(key: char, names: &[&'static str]) -> IndexableList<char, &'static str> {
        let mut list = IndexableList::new(key, key.to_string());
        list.append_all(names.iter().copied());
        list
    }

    #[test]
    fn test_key_and_label_are_kept() {
        let list: IndexableList<u32, i32> = IndexableList::with_capacity(7, "Seven", 16);
        assert_eq!(*list.index_key(), 7);
        assert_eq!(list.index_label(), "Seven");
        assert!(list.is_empty());
    }

    #[test]
    fn test_insert_at_bounds() {
        let mut list = letters('a', &["ant", "ape"]);
        list.insert(0, "aardvark").unwrap();
        list.insert(3, "axolotl").unwrap();
        assert_eq!(list.as_slice(), &["aardvark", "ant", "ape", "axolotl"]);

        let err = list.insert(5, "auk").unwrap_err();
        assert_eq!(err, IndexableError::IndexOutOfRange { index: 5, len: 4 });
    }

    #[test]
    fn test_reads_reject_index_equal_to_len() {
        let mut list = letters('b', &["bee"]);
        assert_eq!(list.get(0), Ok(&"bee"));
        assert!(list.get(1).is_err());
        assert!(list.set(1, "bat").is_err());
        assert!(list.remove(1).is_err());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_set_returns_previous_item() {
        let mut list = letters('c', &["cat", "cow"]);
        assert_eq!(list.set(1, "crow"), Ok("cow"));
        assert_eq!(list.as_slice(), &["cat", "crow"]);
    }

    #[test]
    fn test_insert_all_keeps_order() {
        let mut list = letters('d', &["dog", "duck"]);
        list.insert_all(1, ["deer", "dingo"]).unwrap();
        assert_eq!(list.as_slice(), &["dog", "deer", "dingo", "duck"]);
        assert!(list.insert_all(9, ["dodo"]).is_err());
    }

    #[test]
    fn test_search_operations() {
        let list = letters('e', &["eel", "emu", "eel"]);
        assert_eq!(list.index_of(&"eel"), Some(0));
        assert_eq!(list.last_index_of(&"eel"), Some(2));
        assert_eq!(list.index_of(&"elk"), None);
        assert!(list.contains(&"emu"));
        assert!(list.contains_all(&["emu", "eel"]));
        assert!(!list.contains_all(&["emu", "elk"]));
    }

    #[test]
    fn test_bulk_removal() {
        let mut list = letters('f', &["fox", "frog", "fly", "fox"]);
        assert!(list.remove_item(&"fox"));
        assert_eq!(list.as_slice(), &["frog", "fly", "fox"]);
        assert!(list.remove_all(&["fox"]));
        assert!(!list.remove_all(&["fox"]));
        assert!(list.retain_all(&["fly"]));
        assert_eq!(list.as_slice(), &["fly"]);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_sub_list_bounds() {
        let list = letters('g', &["gnu", "goat", "goose"]);
        assert_eq!(list.sub_list(1, 3), Ok(&["goat", "goose"][..]));
        assert_eq!(list.sub_list(3, 3), Ok(&[][..]));
        assert!(list.sub_list(2, 1).is_err());
        assert!(list.sub_list(0, 4).is_err());
    }

    #[test]
    fn test_iteration_is_bidirectional() {
        let list = letters('h', &["hare", "hawk", "hen"]);
        let backwards: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(backwards, vec!["hen", "hawk", "hare"]);

        let mut cursor = list.iter_from(1).unwrap();
        assert_eq!(cursor.next(), Some(&"hawk"));
        assert_eq!(cursor.next_back(), Some(&"hen"));
        assert_eq!(cursor.next(), None);

        assert_eq!(list.iter_from(3).unwrap().count(), 0);
        assert!(list.iter_from(4).is_err());
    }

    #[test]
    fn test_ordering_uses_key_only() {
        let a = letters('a', &["ant"]);
        let other_a = letters('a', &["ape", "asp"]);
        let b = letters('b', &[]);
        assert_eq!(a, other_a);
        assert!(a < b);

        let mut sections = vec![b.clone(), a.clone()];
        sections.sort();
        assert_eq!(sections[0].index_key(), &'a');
    }

    #[test]
    fn test_mutation_never_changes_key() {
        let mut list = letters('i', &["ibis"]);
        list.push("impala");
        list.extend(["iguana"]);
        *list.get_mut(0).unwrap() = "ibex";
        for item in &mut list {
            *item = "imp";
        }
        assert_eq!(list.index_key(), &'i');
        assert_eq!(list.index_label(), "i");
        assert_eq!(list.to_vec(), vec!["imp", "imp", "imp"]);
    }
}
