//! Item provider trait for virtualized lists.
//!
//! Defines [`ListItemProvider`], the contract a virtualized list uses to ask
//! about rows without materializing them.

/// Provides everything a virtualized list needs to know about its rows.
///
/// Implementations should be immutable snapshots: changes to the data source
/// produce a new provider (or an explicit rebuild), never silent updates.
pub trait ListItemProvider {
    /// Total number of rows (visible or not).
    fn item_count(&self) -> usize;

    /// Stable key for the row at `index`.
    ///
    /// Keys let the list keep its scroll anchor when rows are inserted or
    /// removed above it. Defaults to the index itself.
    fn get_key(&self, index: usize) -> u64 {
        index as u64
    }

    /// Content type of the row at `index`. Rows sharing a content type can
    /// reuse each other's views. `None` is compatible with anything.
    fn get_content_type(&self, index: usize) -> Option<u64> {
        let _ = index;
        None
    }

    /// Row index currently holding `key`, if any.
    fn get_index(&self, key: u64) -> Option<usize> {
        (0..self.item_count()).find(|&i| self.get_key(i) == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain(usize);

    impl ListItemProvider for Plain {
        fn item_count(&self) -> usize {
            self.0
        }
    }

    #[test]
    fn test_default_keys_are_indices() {
        let provider = Plain(4);
        assert_eq!(provider.get_key(3), 3);
        assert_eq!(provider.get_content_type(3), None);
        assert_eq!(provider.get_index(2), Some(2));
        assert_eq!(provider.get_index(4), None);
    }
}
