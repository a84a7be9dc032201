//! Visible row views.
//!
//! Paging and filtering happen outside this crate. The table only needs to
//! know which dataset indices are on screen, in display order.

/// Source of the currently visible rows.
pub trait RowView: Send {
    /// Dataset indices of the visible rows, in display order.
    ///
    /// `len` is the current dataset length; indices at or past it are
    /// ignored by the table.
    fn visible_indices(&self, len: usize) -> Vec<usize>;
}

/// Every row is visible, in dataset order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllRows;

impl RowView for AllRows {
    fn visible_indices(&self, len: usize) -> Vec<usize> {
        (0..len).collect()
    }
}

/// A fixed list of visible indices, as computed by the host's pager.
impl RowView for Vec<usize> {
    fn visible_indices(&self, len: usize) -> Vec<usize> {
        self.iter().copied().filter(|&index| index < len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rows() {
        assert_eq!(AllRows.visible_indices(3), vec![0, 1, 2]);
        assert!(AllRows.visible_indices(0).is_empty());
    }

    #[test]
    fn test_fixed_indices_drop_stale_entries() {
        let page: Vec<usize> = vec![4, 1, 9];
        assert_eq!(page.visible_indices(5), vec![4, 1]);
    }
}
