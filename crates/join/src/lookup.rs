// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Ordered one-to-many map from a key to the values sharing it.
//!
//! Keys keep the order in which they were first seen and every group keeps
//! its values in insertion order. Hashing uses xxHash3.

use std::{borrow::Borrow, hash::Hash};

use indexmap::IndexMap;
use xxhash_rust::xxh3::Xxh3Builder;

#[derive(Debug, Clone)]
pub struct Lookup<K, V> {
	groups: IndexMap<K, Vec<V>, Xxh3Builder>,
	value_count: usize,
}

impl<K, V> Default for Lookup<K, V> {
	fn default() -> Self {
		Self {
			groups: IndexMap::with_hasher(Xxh3Builder::default()),
			value_count: 0,
		}
	}
}

impl<K: Eq + Hash, V> Lookup<K, V> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty lookup with room for `capacity` distinct keys
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			groups: IndexMap::with_capacity_and_hasher(capacity, Xxh3Builder::default()),
			value_count: 0,
		}
	}

	/// Group `items` by the key `key` extracts from each of them
	pub fn build<I, F>(items: I, mut key: F) -> Self
	where
		I: IntoIterator<Item = V>,
		F: FnMut(&V) -> K,
	{
		let mut result = Self::new();
		for item in items {
			result.insert(key(&item), item);
		}
		result
	}

	/// Like [`Lookup::build`], stopping at the first key that fails to extract
	pub fn try_build<I, F, E>(items: I, mut key: F) -> Result<Self, E>
	where
		I: IntoIterator<Item = V>,
		F: FnMut(&V) -> Result<K, E>,
	{
		let mut result = Self::new();
		for item in items {
			result.insert(key(&item)?, item);
		}
		Ok(result)
	}

	pub fn insert(&mut self, key: K, value: V) {
		self.groups.entry(key).or_default().push(value);
		self.value_count += 1;
	}

	/// Values stored under `key`, empty when the key was never inserted
	pub fn get<Q>(&self, key: &Q) -> &[V]
	where
		K: Borrow<Q>,
		Q: ?Sized + Hash + Eq,
	{
		self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
	}

	pub fn contains_key<Q>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: ?Sized + Hash + Eq,
	{
		self.groups.contains_key(key)
	}

	/// Number of distinct keys
	pub fn len(&self) -> usize {
		self.groups.len()
	}

	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}

	/// Number of values across all groups
	pub fn value_count(&self) -> usize {
		self.value_count
	}

	pub fn keys(&self) -> impl Iterator<Item = &K> {
		self.groups.keys()
	}

	/// Groups in first-seen key order
	pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
		self.groups.iter().map(|(key, values)| (key, values.as_slice()))
	}
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Lookup<K, V> {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let mut result = Self::new();
		for (key, value) in iter {
			result.insert(key, value);
		}
		result
	}
}
