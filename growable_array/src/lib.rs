//! A generic random-access sequence whose storage doubles when full and halves
//! when only a quarter of it is in use.
//!
//! Growing at "full" but shrinking only at "quarter full" keeps alternating
//! appends and removals around a capacity boundary from reallocating on every
//! call, so both ends stay amortized O(1).

use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::{Display, Formatter};
use tracing::{debug, trace};

pub use crate::config::{ArrayConfig, ResizePolicy, DEFAULT_CAPACITY};
pub use crate::error::ArrayError;

pub mod config;
pub mod error;


/// Indices of matching elements, in ascending order.
pub type Indices = SmallVec<[usize; 4]>;

#[derive(Debug)]
pub struct GrowableArray<T> {
    /// Live elements. `data.len()` is the size, and the allocation always
    /// holds at least `capacity` slots so shifting never reallocates.
    data: Vec<T>,
    capacity: usize,
    policy: ResizePolicy,
}

impl<T> GrowableArray<T> {
    /// Creates an empty growable array with [DEFAULT_CAPACITY] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_policy(capacity, ResizePolicy::Growable)
    }

    /// Creates an empty array that never reallocates.
    ///
    /// Inserting into a full fixed array fails with
    /// [ArrayError::CapacityExceeded], and removals never shrink it.
    pub fn fixed(capacity: usize) -> Self {
        Self::with_policy(capacity, ResizePolicy::Fixed)
    }

    pub fn from_config(config: &ArrayConfig) -> Self {
        Self::with_policy(config.initial_capacity, config.policy)
    }

    /// Wraps a caller supplied buffer as fixed storage.
    ///
    /// The buffer's length becomes the capacity and its allocation is reused.
    /// Existing contents are dropped, the resulting array is empty.
    pub fn from_backing(mut backing: Vec<T>) -> Self {
        let capacity = backing.len();
        backing.clear();
        Self {
            data: backing,
            capacity,
            policy: ResizePolicy::Fixed,
        }
    }

    fn with_policy(capacity: usize, policy: ResizePolicy) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            policy,
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.data
            .get(index)
            .ok_or_else(|| ArrayError::out_of_range(index, self.size()))
    }

    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ArrayError> {
        let size = self.size();
        let slot = self
            .data
            .get_mut(index)
            .ok_or_else(|| ArrayError::out_of_range(index, size))?;
        Ok(std::mem::replace(slot, value))
    }

    /// Inserts `value` so that it ends up at `index`, shifting every element
    /// at or after `index` one position to the right.
    ///
    /// `index == size` appends. A full growable array doubles its capacity
    /// first (an empty zero-capacity array grows to 1).
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        if index > self.size() {
            return Err(ArrayError::out_of_range(index, self.size() + 1));
        }

        if self.is_full() {
            if !self.policy.is_growable() {
                debug!(capacity = self.capacity, "rejected insert into full fixed array");
                return Err(ArrayError::CapacityExceeded {
                    capacity: self.capacity,
                });
            }
            self.resize(self.capacity.saturating_mul(2).max(1));
        }

        self.data.insert(index, value);
        Ok(())
    }

    pub fn append(&mut self, value: T) -> Result<(), ArrayError> {
        self.insert(self.size(), value)
    }

    pub fn prepend(&mut self, value: T) -> Result<(), ArrayError> {
        self.insert(0, value)
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ArrayError> {
        if index >= self.size() {
            return Err(ArrayError::out_of_range(index, self.size()));
        }
        Ok(self.take(index))
    }

    pub fn remove_first(&mut self) -> Result<T, ArrayError> {
        self.remove_at(0)
    }

    pub fn remove_last(&mut self) -> Result<T, ArrayError> {
        match self.size().checked_sub(1) {
            Some(index) => self.remove_at(index),
            None => Err(ArrayError::out_of_range(usize::MAX, 0)),
        }
    }

    /// Drops every element.
    ///
    /// A growable array also gives back its storage beyond
    /// [DEFAULT_CAPACITY] slots, so that later removals can reach the
    /// quarter-full shrink point again. Fixed arrays keep their capacity.
    pub fn clear(&mut self) {
        self.data.clear();
        if self.policy.is_growable() && self.capacity > DEFAULT_CAPACITY {
            self.resize(DEFAULT_CAPACITY);
        }
    }

    /// Index must be checked by the caller.
    fn take(&mut self, index: usize) -> T {
        let value = self.data.remove(index);
        self.shrink_if_sparse();
        value
    }

    fn shrink_if_sparse(&mut self) {
        if !self.policy.is_growable() {
            return;
        }

        let half = self.capacity / 2;
        if self.size() == self.capacity / 4 && half > 0 {
            self.resize(half);
        }
    }

    /// Moves the live elements into a freshly allocated buffer of
    /// `new_capacity` slots and releases the old one.
    fn resize(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.size());
        trace!(
            old_capacity = self.capacity,
            new_capacity,
            size = self.size(),
            "resizing array storage"
        );

        let mut data = Vec::with_capacity(new_capacity);
        data.append(&mut self.data);
        self.data = data;
        self.capacity = new_capacity;
    }
}

impl<T: PartialEq> GrowableArray<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.data.iter().any(|item| item == value)
    }

    /// Index of the first element equal to `value`.
    pub fn find_index(&self, value: &T) -> Option<usize> {
        self.data.iter().position(|item| item == value)
    }

    /// Every index holding an element equal to `value`, in ascending order.
    pub fn find_all_indices(&self, value: &T) -> Indices {
        self.data
            .iter()
            .positions(|item| item == value)
            .collect()
    }

    /// Removes the first element equal to `value`, returning whether one was
    /// found.
    pub fn remove_value(&mut self, value: &T) -> bool {
        match self.find_index(value) {
            Some(index) => {
                self.take(index);
                true
            }
            None => false,
        }
    }

    /// Removes every element equal to `value` one at a time, running the
    /// shrink check after each removal, and returns how many were removed.
    pub fn remove_all(&mut self, value: &T) -> usize {
        let mut removed = 0;
        while self.remove_value(value) {
            removed += 1;
        }
        removed
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        // Vec::clone only allocates `len` slots
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
            policy: self.policy,
        }
    }
}

/// Takes over the vector's elements; capacity equals the element count.
impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(data: Vec<T>) -> Self {
        let capacity = data.len();
        Self {
            data,
            capacity,
            policy: ResizePolicy::Growable,
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Display> Display for GrowableArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "size = {}, capacity = {}\n[{}]",
            self.size(),
            self.capacity,
            self.data.iter().join(",")
        )
    }
}
