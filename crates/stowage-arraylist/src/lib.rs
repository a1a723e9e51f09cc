//! Growable array-backed list for stowage.
//!
//! `ArrayList<T>` stores its elements in an owned slot buffer and grows
//! by doubling when an append would exceed capacity, giving amortized
//! O(1) appends. Removal shifts the tail of the live prefix left by one
//! slot. Capacity never shrinks.

use std::cmp::Ordering;
use std::fmt;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use stowage_core::{Collection, CollectionError, Filterable, Sortable};

mod iter;

pub use iter::{CursorMut, IntoIter, Iter};

const DEFAULT_CAPACITY: usize = 10;

/// A growable array-backed list.
///
/// The slot buffer's length is the capacity; the live prefix
/// `[0, len)` holds `Some`, and slots at `index >= len` are `None` and
/// never read.
#[derive(Clone)]
pub struct ArrayList<T> {
    pub(crate) slots: Vec<Option<T>>,
    pub(crate) len: usize,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with the default capacity of 10.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, len: 0 }
    }

    /// Appends an element at the end, growing the buffer if full.
    pub fn add(&mut self, element: T) {
        self.grow_if_full();
        self.slots[self.len] = Some(element);
        self.len += 1;
    }

    /// Doubles the capacity once `len` has caught up with it.
    ///
    /// Growing from capacity 0 gets a floor of 1 so the buffer cannot
    /// stay empty forever.
    fn grow_if_full(&mut self) {
        if self.len < self.slots.len() {
            return;
        }
        let new_capacity = (self.slots.len() * 2).max(1);
        let mut grown = Vec::with_capacity(new_capacity);
        grown.extend(self.slots.drain(..));
        grown.resize_with(new_capacity, || None);
        self.slots = grown;
    }

    /// Returns the element at `index`, or `None` when `index >= len`.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[index].as_ref()
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        self.slots[index].as_mut()
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// Returns `None` without mutating anything when `index >= len`;
    /// the replacement element is dropped in that case.
    pub fn set(&mut self, index: usize, element: T) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.slots[index].replace(element)
    }

    /// Index of the first element equal to `element`, searching forward
    /// from index 0.
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|e| e == element)
    }

    /// Whether any element equals `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// Removes the first element equal to `element`, shifting all
    /// subsequent elements left by one.
    ///
    /// Returns `false` (and leaves the list untouched) when no equal
    /// element is present.
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(element) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Removes and returns the element at `index`, shifting all
    /// subsequent elements left by one.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        if index >= self.len {
            return Err(CollectionError::IndexOutOfBounds { index, len: self.len });
        }
        match self.slots[index].take() {
            Some(removed) => {
                for i in index + 1..self.len {
                    self.slots.swap(i - 1, i);
                }
                self.len -= 1;
                Ok(removed)
            }
            None => Err(CollectionError::IndexOutOfBounds { index, len: self.len }),
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current capacity of the slot buffer.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Drops every live element. Capacity is retained.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// A new list holding clones of the elements matching `predicate`,
    /// in their original order.
    pub fn filter<P>(&self, mut predicate: P) -> ArrayList<T>
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        let mut filtered = ArrayList::with_capacity(self.len);
        for element in self.iter() {
            if predicate(element) {
                filtered.add(element.clone());
            }
        }
        filtered
    }

    /// Stable in-place sort of the live prefix by `compare`.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len <= 1 {
            return;
        }
        let mut live: Vec<T> = self.slots[..self.len]
            .iter_mut()
            .filter_map(|slot| slot.take())
            .collect();
        live.sort_by(compare);
        for (slot, element) in self.slots.iter_mut().zip(live) {
            *slot = Some(element);
        }
    }

    /// An independent copy of the elements in `[from, to)`.
    pub fn slice(&self, from: usize, to: usize) -> Result<ArrayList<T>, CollectionError>
    where
        T: Clone,
    {
        if from > to || to > self.len {
            return Err(CollectionError::InvalidRange { from, to, len: self.len });
        }
        let mut sliced = ArrayList::with_capacity(to - from);
        for index in from..to {
            if let Some(element) = self.get(index) {
                sliced.add(element.clone());
            }
        }
        Ok(sliced)
    }

    /// Clones the live prefix into a plain `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// A fresh shared iterator over the live prefix, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// A removal-capable cursor.
    ///
    /// The cursor borrows the list exclusively, so no other access to
    /// the list is possible while it is live.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(elements: Vec<T>) -> Self {
        let len = elements.len();
        let slots: Vec<Option<T>> = elements.into_iter().map(Some).collect();
        Self { slots, len }
    }
}

impl<T> From<ArrayList<T>> for Vec<T> {
    fn from(list: ArrayList<T>) -> Self {
        list.into_iter().collect()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let slots: Vec<Option<T>> = elements.into_iter().map(Some).collect();
        let len = slots.len();
        Self { slots, len }
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        for element in elements {
            self.add(element);
        }
    }
}

impl<T> Collection<T> for ArrayList<T> {
    fn add(&mut self, element: T) {
        ArrayList::add(self, element);
    }

    fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        ArrayList::remove(self, element)
    }

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        ArrayList::contains(self, element)
    }

    fn len(&self) -> usize {
        ArrayList::len(self)
    }

    fn clear(&mut self) {
        ArrayList::clear(self);
    }
}

impl<T> Sortable<T> for ArrayList<T> {
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        ArrayList::sort_by(self, compare);
    }
}

impl<T> Filterable<T> for ArrayList<T> {
    fn filter<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        ArrayList::filter(self, predicate)
    }
}

impl<T: Serialize> Serialize for ArrayList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for element in self.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ArrayList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(ArrayList::from)
    }
}
