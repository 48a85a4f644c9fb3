//! The chainable wrapper.

use std::fmt;

use crate::mapping::KeyedMapping;

/// Array-style operations over a borrowed key-value mapping.
///
/// The wrapper records the mapping's keys once at construction. Operations walk
/// the *active* keys; [`filter`](Self::filter) and [`retain`](Self::retain) narrow
/// them and [`set_all_key`](Self::set_all_key) restores the full snapshot. Values
/// are read and written through the borrow, so the caller sees every change once
/// the wrapper is dropped.
///
/// Callbacks receive `(value, index, data)` where `index` is the position within
/// the active keys and `data` is the whole mapping. State a callback needs is
/// captured by the closure.
///
/// ```rust
/// use objency::objency;
/// use objency_json::{JObject, JToken};
///
/// let mut obj = JObject::from_json_str(r#"{"a": 1, "b": 2, "c": 3}"#).unwrap();
/// let total = objency(&mut obj)
///     .unwrap()
///     .map(|v, _, _| JToken::Number(v.as_number() * 10.0))
///     .filter(|v, _, _| v.as_number() > 10.0)
///     .reduce(|acc, v, _, _| acc + v.as_number(), 0.0_f64);
///
/// assert_eq!(total, 50.0);
/// assert_eq!(obj.get("a"), Some(&JToken::from(10)));
/// ```
pub struct Objency<'a, M: KeyedMapping> {
    data: &'a mut M,
    keys: Vec<String>,
    all_keys: Box<[String]>,
}

impl<'a, M: KeyedMapping> Objency<'a, M> {
    /// Snapshots the mapping's keys. Validation happens in
    /// [`IntoObjency`](crate::IntoObjency).
    pub(crate) fn new(data: &'a mut M) -> Self {
        let all_keys = data.enumerable_keys().into_boxed_slice();
        log::debug!("wrapping mapping with {} enumerable keys", all_keys.len());
        Self {
            keys: all_keys.to_vec(),
            all_keys,
            data,
        }
    }

    /// Keys the chain operations currently iterate over.
    pub fn active_keys(&self) -> &[String] {
        &self.keys
    }

    /// Keys captured at construction.
    pub fn all_keys(&self) -> &[String] {
        &self.all_keys
    }

    /// Number of active keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn data(&self) -> &M {
        &*self.data
    }

    /// Ends the chain and hands the borrow back.
    pub fn into_inner(self) -> &'a mut M {
        self.data
    }

    /// Calls `visit` for every active key in order.
    pub fn for_each<F>(&mut self, mut visit: F) -> &mut Self
    where
        F: FnMut(&M::Value, usize, &M),
    {
        for (index, key) in self.keys.iter().enumerate() {
            if let Some(value) = self.data.value(key) {
                visit(value, index, &*self.data);
            }
        }
        self
    }

    /// Replaces the value of every active key with `transform(value, index, data)`.
    pub fn map<F>(&mut self, mut transform: F) -> &mut Self
    where
        F: FnMut(&M::Value, usize, &M) -> M::Value,
    {
        for (index, key) in self.keys.iter().enumerate() {
            let Some(current) = self.data.value(key) else {
                continue;
            };
            let next = transform(current, index, &*self.data);
            if let Some(slot) = self.data.value_mut(key) {
                *slot = next;
            }
        }
        self
    }

    /// Drops active keys whose value fails `predicate`.
    ///
    /// The scan advances its index after every test, removal included, so the key
    /// that slides into a removed key's slot is not tested on this pass and stays
    /// active. `{a: 1, b: false, c: false, d: 4}` filtered on truthiness keeps
    /// `a`, `c` and `d`. Use [`retain`](Self::retain) to test every key.
    pub fn filter<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(&M::Value, usize, &M) -> bool,
    {
        let mut index = 0;
        while index < self.keys.len() {
            let keep = match self.data.value(&self.keys[index]) {
                Some(value) => predicate(value, index, &*self.data),
                None => true,
            };
            if !keep {
                let removed = self.keys.remove(index);
                log::trace!("filter dropped key {removed:?} at index {index}");
            }
            index += 1;
        }
        self
    }

    /// Drops active keys whose value fails `predicate`, testing every key exactly
    /// once. `index` is the key's position before this call.
    pub fn retain<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(&M::Value, usize, &M) -> bool,
    {
        let data = &*self.data;
        let mut index = 0;
        self.keys.retain(|key| {
            let keep = data
                .value(key)
                .map_or(true, |value| predicate(value, index, data));
            if !keep {
                log::trace!("retain dropped key {key:?} at index {index}");
            }
            index += 1;
            keep
        });
        self
    }

    /// True when `predicate` holds for every active key. Stops at the first failure.
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&M::Value, usize, &M) -> bool,
    {
        self.keys.iter().enumerate().all(|(index, key)| {
            self.data
                .value(key)
                .map_or(true, |value| predicate(value, index, &*self.data))
        })
    }

    /// True when `predicate` holds for any active key. Stops at the first success.
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&M::Value, usize, &M) -> bool,
    {
        self.keys.iter().enumerate().any(|(index, key)| {
            self.data
                .value(key)
                .is_some_and(|value| predicate(value, index, &*self.data))
        })
    }

    /// Sets every active key to a clone of `value`.
    pub fn fill(&mut self, value: M::Value) -> &mut Self
    where
        M::Value: Clone,
    {
        for key in &self.keys {
            if let Some(slot) = self.data.value_mut(key) {
                *slot = value.clone();
            }
        }
        self
    }

    /// Folds the active values into `initial`, starting at the first active key.
    pub fn reduce<A, F>(&self, mut combine: F, initial: A) -> A
    where
        F: FnMut(A, &M::Value, usize, &M) -> A,
    {
        let mut acc = initial;
        for (index, key) in self.keys.iter().enumerate() {
            if let Some(value) = self.data.value(key) {
                acc = combine(acc, value, index, &*self.data);
            }
        }
        acc
    }

    /// Folds the active values using the first one as the seed.
    ///
    /// Combining starts at index 1. Returns `None` when there are no active keys.
    pub fn reduce_first<F>(&self, mut combine: F) -> Option<M::Value>
    where
        M::Value: Clone,
        F: FnMut(M::Value, &M::Value, usize, &M) -> M::Value,
    {
        let first = self.keys.first()?;
        let mut acc = self.data.value(first)?.clone();
        for (index, key) in self.keys.iter().enumerate().skip(1) {
            if let Some(value) = self.data.value(key) {
                acc = combine(acc, value, index, &*self.data);
            }
        }
        Some(acc)
    }

    /// Restores the active keys to the construction-time snapshot.
    pub fn set_all_key(&mut self) -> &mut Self {
        self.keys = self.all_keys.to_vec();
        log::trace!("restored {} keys", self.keys.len());
        self
    }
}

impl<M: KeyedMapping> fmt::Debug for Objency<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Objency")
            .field("active_keys", &self.keys)
            .field("all_keys", &self.all_keys)
            .finish_non_exhaustive()
    }
}
