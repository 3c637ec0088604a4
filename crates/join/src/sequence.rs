// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Sequence adapters the outer joins are composed from.

use std::iter::Fuse;

/// Yields the wrapped sequence, or a single default item if it is empty.
/// See [`SequenceExt::default_if_empty`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct DefaultIfEmpty<I: Iterator> {
	iter: Fuse<I>,
	default: Option<I::Item>,
}

impl<I: Iterator> Iterator for DefaultIfEmpty<I> {
	type Item = I::Item;

	fn next(&mut self) -> Option<Self::Item> {
		match self.iter.next() {
			Some(item) => {
				// non-empty, the default can never be emitted
				self.default = None;
				Some(item)
			}
			None => self.default.take(),
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let (lower, upper) = self.iter.size_hint();
		if self.default.is_some() {
			(lower.max(1), upper.map(|upper| upper.max(1)))
		} else {
			(lower, upper)
		}
	}
}

/// Flattens each item into a sub-sequence and combines the item with every
/// element of it. See [`SequenceExt::select_many`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SelectMany<I, C, F, U>
where
	I: Iterator,
	U: IntoIterator,
{
	iter: I,
	collection: C,
	result: F,
	current: Option<(I::Item, U::IntoIter)>,
}

impl<I, C, F, U> SelectMany<I, C, F, U>
where
	I: Iterator,
	U: IntoIterator,
{
	/// The sequence being expanded
	pub fn get_mut(&mut self) -> &mut I {
		&mut self.iter
	}
}

impl<I, C, F, U, O> Iterator for SelectMany<I, C, F, U>
where
	I: Iterator,
	I::Item: Clone,
	C: FnMut(&I::Item) -> U,
	U: IntoIterator,
	F: FnMut(I::Item, U::Item) -> O,
{
	type Item = O;

	fn next(&mut self) -> Option<O> {
		loop {
			if let Some((item, inner)) = &mut self.current {
				if let Some(sub) = inner.next() {
					return Some((self.result)(item.clone(), sub));
				}
			}

			let item = self.iter.next()?;
			let inner = (self.collection)(&item).into_iter();
			self.current = Some((item, inner));
		}
	}
}

pub trait SequenceExt: Iterator + Sized {
	/// Pass the sequence through unchanged when it has at least one item,
	/// otherwise yield `default` exactly once.
	///
	/// ```
	/// use relate_join::SequenceExt;
	///
	/// let empty: Vec<Option<&str>> = Vec::new();
	/// assert_eq!(empty.into_iter().default_if_empty(None).collect::<Vec<_>>(), vec![None]);
	/// assert_eq!(vec![Some("Barley")].into_iter().default_if_empty(None).collect::<Vec<_>>(), vec![Some(
	/// 	"Barley"
	/// )]);
	/// ```
	fn default_if_empty(self, default: Self::Item) -> DefaultIfEmpty<Self> {
		DefaultIfEmpty {
			iter: self.fuse(),
			default: Some(default),
		}
	}

	/// For every item, expand `collection(&item)` and yield
	/// `result(item, element)` for each element of the expansion. Items whose
	/// expansion is empty produce nothing.
	fn select_many<C, U, F, O>(self, collection: C, result: F) -> SelectMany<Self, C, F, U>
	where
		Self::Item: Clone,
		C: FnMut(&Self::Item) -> U,
		U: IntoIterator,
		F: FnMut(Self::Item, U::Item) -> O,
	{
		SelectMany {
			iter: self,
			collection,
			result,
			current: None,
		}
	}
}

impl<I: Iterator> SequenceExt for I {}

#[cfg(test)]
mod tests {
	mod default_if_empty {
		use crate::SequenceExt;

		#[test]
		fn test_non_empty_passes_through() {
			let names: Vec<&str> = ["Barley", "Boots", "Whiskers"].into_iter().default_if_empty("none").collect();
			assert_eq!(names, vec!["Barley", "Boots", "Whiskers"]);
		}

		#[test]
		fn test_empty_yields_default_once() {
			let mut iter = Vec::<&str>::new().into_iter().default_if_empty("none");
			assert_eq!(iter.next(), Some("none"));
			assert_eq!(iter.next(), None);
			assert_eq!(iter.next(), None);
		}

		#[test]
		fn test_size_hint() {
			let empty = Vec::<u8>::new().into_iter().default_if_empty(0);
			assert_eq!(empty.size_hint(), (1, Some(1)));

			let mut three = vec![1u8, 2, 3].into_iter().default_if_empty(0);
			assert_eq!(three.size_hint(), (3, Some(3)));
			three.next();
			assert_eq!(three.size_hint(), (2, Some(2)));
		}

		#[test]
		fn test_stays_exhausted_over_unfused_source() {
			let mut polls = 0;
			let source = std::iter::from_fn(move || {
				polls += 1;
				match polls {
					1 => Some(1),
					2 => None,
					_ => Some(polls),
				}
			});

			let mut iter = source.default_if_empty(0);
			assert_eq!(iter.next(), Some(1));
			assert_eq!(iter.next(), None);
			assert_eq!(iter.next(), None);
		}

		#[test]
		fn test_empty_unfused_source_yields_default_once() {
			let mut polls = 0;
			let source = std::iter::from_fn(move || {
				polls += 1;
				if polls == 1 { None } else { Some(polls) }
			});

			let mut iter = source.default_if_empty(0);
			assert_eq!(iter.next(), Some(0));
			assert_eq!(iter.next(), None);
		}

		#[test]
		fn test_lazy() {
			let mut pulled = 0;
			let mut iter = (0..3)
				.inspect(|_| pulled += 1)
				.default_if_empty(-1);
			assert_eq!(iter.next(), Some(0));
			drop(iter);
			assert_eq!(pulled, 1);
		}
	}

	mod select_many {
		use crate::SequenceExt;

		#[test]
		fn test_flattens_with_result_selector() {
			let owners = vec![("Joe", vec!["Barley"]), ("Lisa", vec!["Boots", "Rex"])];

			let result: Vec<_> =
				owners.into_iter().select_many(|(_, pets)| pets.clone(), |(person, _), pet| (person, pet)).collect();

			assert_eq!(result, vec![("Joe", "Barley"), ("Lisa", "Boots"), ("Lisa", "Rex")]);
		}

		#[test]
		fn test_empty_expansion_drops_item() {
			let groups = vec![(1, vec![]), (2, vec!['a']), (3, vec![])];

			let result: Vec<_> = groups.into_iter().select_many(|(_, v)| v.clone(), |(k, _), c| (k, c)).collect();

			assert_eq!(result, vec![(2, 'a')]);
		}

		#[test]
		fn test_with_default_if_empty_keeps_every_item() {
			let groups = vec![(1, vec![]), (2, vec!['a', 'b'])];

			let result: Vec<_> = groups
				.into_iter()
				.select_many(
					|(_, v)| v.clone().into_iter().map(Some).default_if_empty(None),
					|(k, _), c| (k, c),
				)
				.collect();

			assert_eq!(result, vec![(1, None), (2, Some('a')), (2, Some('b'))]);
		}
	}
}
