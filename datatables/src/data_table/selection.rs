/// Per-row checked flags with derived select-all status.
///
/// The length tracks the number of rows in the current data set. A size
/// change resets every flag, so stale selections never carry over to a
/// different data set.
///
/// # Example
///
/// ```
/// use datatables::SelectionState;
///
/// let mut selection = SelectionState::new(3);
/// selection.toggle_one(1);
/// assert_eq!(selection.as_slice(), &[false, true, false]);
/// assert!(!selection.is_all_checked());
///
/// selection.toggle_all();
/// assert!(selection.is_all_checked());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    checked: Vec<bool>,
}

impl SelectionState {
    /// Create a state of `len` unchecked rows.
    pub fn new(len: usize) -> Self {
        Self {
            checked: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Match the row count, clearing every flag if it changed.
    ///
    /// Returns true when a reset happened.
    pub fn resize(&mut self, len: usize) -> bool {
        if self.checked.len() == len {
            return false;
        }
        self.checked = vec![false; len];
        true
    }

    /// True iff there is at least one row and every row is checked.
    pub fn is_all_checked(&self) -> bool {
        !self.checked.is_empty() && self.checked.iter().all(|&c| c)
    }

    /// Check every row, or uncheck every row if all are already checked.
    pub fn toggle_all(&mut self) {
        let value = !self.is_all_checked();
        self.checked.fill(value);
    }

    /// Flip one row. Returns false if `index` is out of range.
    pub fn toggle_one(&mut self, index: usize) -> bool {
        match self.checked.get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => false,
        }
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.checked
    }

    /// Indices of checked rows, ascending.
    pub fn checked_indices(&self) -> Vec<usize> {
        self.checked
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| c.then_some(i))
            .collect()
    }
}
