//! Dynamic array with an explicit sorted flag
//!
//! `shell_sort` establishes the sorted flag and `binary_search` requires it.
//! Every mutation (add, insert, delete, clear) drops the flag again; the array
//! is never re-sorted behind the caller's back.

use super::Structure;
use crate::error::{DsError, Result};
use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct DynamicArray<T> {
    data: Vec<T>,
    sorted: bool,
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            sorted: false,
        }
    }

    pub fn from_list(values: Vec<T>) -> Self {
        Self {
            data: values,
            sorted: false,
        }
    }

    /// Append at the end
    pub fn add(&mut self, value: T) {
        self.data.push(value);
        self.sorted = false;
        tracing::debug!(len = self.data.len(), "array add");
    }

    /// Insert before `index`; `index == len` appends.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.data.len() {
            return Err(DsError::IndexOutOfRange {
                operation: "insert_at",
                index,
                len: self.data.len(),
            });
        }
        self.data.insert(index, value);
        self.sorted = false;
        tracing::debug!(index, len = self.data.len(), "array insert");
        Ok(())
    }

    /// Remove and return the element at `index`
    pub fn delete_at(&mut self, index: usize) -> Result<T> {
        if index >= self.data.len() {
            return Err(DsError::IndexOutOfRange {
                operation: "delete_at",
                index,
                len: self.data.len(),
            });
        }
        let removed = self.data.remove(index);
        self.sorted = false;
        tracing::debug!(index, len = self.data.len(), "array delete");
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.sorted = false;
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the last `shell_sort` is still in effect
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn to_display_list(&self) -> Vec<(usize, T)>
    where
        T: Clone,
    {
        self.data.iter().cloned().enumerate().collect()
    }
}

impl<T: Ord> DynamicArray<T> {
    /// Shell sort with the halving gap sequence `len/2, len/4, ..., 1`.
    pub fn shell_sort(&mut self) {
        let n = self.data.len();
        let mut gap = n / 2;
        while gap > 0 {
            for i in gap..n {
                let mut j = i;
                // gapped insertion sort; swapping keeps it free of Clone
                while j >= gap && self.data[j - gap] > self.data[j] {
                    self.data.swap(j - gap, j);
                    j -= gap;
                }
            }
            gap /= 2;
        }
        self.sorted = true;
        tracing::debug!(len = n, "array shell sort");
    }

    /// Iterative binary search over inclusive bounds.
    ///
    /// Returns `Ok(Some(index))` when found, `Ok(None)` when absent, and
    /// `PreconditionViolated` when the array is not flagged sorted.
    pub fn binary_search(&self, target: &T) -> Result<Option<usize>> {
        if !self.sorted {
            return Err(DsError::PreconditionViolated {
                operation: "binary_search",
                reason: "array must be sorted first",
            });
        }
        if self.data.is_empty() {
            return Ok(None);
        }

        let mut low = 0usize;
        let mut high = self.data.len() - 1;
        while low <= high {
            let mid = low + (high - low) / 2;
            match self.data[mid].cmp(target) {
                Ordering::Equal => return Ok(Some(mid)),
                Ordering::Less => low = mid + 1,
                Ordering::Greater => {
                    if mid == 0 {
                        break;
                    }
                    high = mid - 1;
                }
            }
        }
        Ok(None)
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Structure for DynamicArray<T> {
    fn type_name(&self) -> &'static str {
        "Array"
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        DynamicArray::clear(self);
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("data", &self.data)
            .field("sorted", &self.sorted)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_insert_and_delete_bounds() {
        let mut array = DynamicArray::new();
        array.add(10);
        array.add(30);
        assert!(array.insert_at(1, 20).is_ok());
        assert!(array.insert_at(3, 40).is_ok());
        assert_eq!(array.as_slice(), &[10, 20, 30, 40]);

        let err = array.insert_at(5, 50).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);

        assert_eq!(array.delete_at(0), Ok(10));
        let err = array.delete_at(3).unwrap_err();
        assert_eq!(
            err,
            DsError::IndexOutOfRange {
                operation: "delete_at",
                index: 3,
                len: 3
            }
        );
    }

    #[test]
    fn test_shell_sort() {
        let mut array = DynamicArray::from_list(vec![9, 8, 3, 7, 5, 6, 4, 1, 2, 2]);
        array.shell_sort();
        assert_eq!(array.as_slice(), &[1, 2, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(array.is_sorted());
    }

    #[test]
    fn test_binary_search_requires_sorted_flag() {
        let mut array = DynamicArray::from_list(vec![1, 2, 3]);
        let err = array.binary_search(&2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PreconditionViolated);

        array.shell_sort();
        assert_eq!(array.binary_search(&2), Ok(Some(1)));

        array.add(4);
        assert!(!array.is_sorted());
        assert!(array.binary_search(&4).is_err());
    }

    #[test]
    fn test_binary_search_edges() {
        let mut array: DynamicArray<i32> = DynamicArray::new();
        array.shell_sort();
        assert_eq!(array.binary_search(&1), Ok(None));

        let mut array = DynamicArray::from_list(vec![5, 1, 3]);
        array.shell_sort();
        assert_eq!(array.binary_search(&0), Ok(None));
        assert_eq!(array.binary_search(&1), Ok(Some(0)));
        assert_eq!(array.binary_search(&5), Ok(Some(2)));
        assert_eq!(array.binary_search(&6), Ok(None));
        assert_eq!(array.binary_search(&2), Ok(None));
    }

    #[test]
    fn test_strings_sort_lexicographically() {
        let mut array = DynamicArray::from_list(vec!["pear", "apple", "fig"]);
        array.shell_sort();
        assert_eq!(array.as_slice(), &["apple", "fig", "pear"]);
        assert_eq!(array.binary_search(&"fig"), Ok(Some(1)));
    }

    #[test]
    fn test_clear_resets_flag() {
        let mut array = DynamicArray::from_list(vec![2, 1]);
        array.shell_sort();
        array.clear();
        assert!(array.is_empty());
        assert!(!array.is_sorted());
        assert_eq!(array.get(0), None);
    }
}
