// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! People, pets and their owners.
//!
//! Ids line up between the two sides: person `n` owns pet `n`. Sally (id 4)
//! has no pet. Joe is twice the age of his pet Barley, Lisa twice the age of
//! Boots, Mark is not twice the age of Whiskers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
	pub id: u32,
	pub name: String,
	pub age: u32,
}

impl Person {
	pub fn new(id: u32, name: impl Into<String>, age: u32) -> Self {
		Self {
			id,
			name: name.into(),
			age,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pet {
	pub id: u32,
	pub name: String,
	pub age: u32,
}

impl Pet {
	pub fn new(id: u32, name: impl Into<String>, age: u32) -> Self {
		Self {
			id,
			name: name.into(),
			age,
		}
	}
}

/// A person paired with the pet they own, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetOwner<'a> {
	pub person: &'a Person,
	pub pet: Option<&'a Pet>,
}

impl<'a> PetOwner<'a> {
	pub fn new(person: &'a Person, pet: Option<&'a Pet>) -> Self {
		Self {
			person,
			pet,
		}
	}

	pub fn pet_name(&self) -> Option<&'a str> {
		self.pet.map(|pet| pet.name.as_str())
	}
}

pub fn people() -> Vec<Person> {
	vec![Person::new(1, "Joe", 16), Person::new(2, "Lisa", 8), Person::new(3, "Mark", 15), Person::new(4, "Sally", 25)]
}

pub fn pets() -> Vec<Pet> {
	vec![Pet::new(1, "Barley", 8), Pet::new(2, "Boots", 4), Pet::new(3, "Whiskers", 1)]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixture {
	pub people: Vec<Person>,
	pub pets: Vec<Pet>,
}

impl Fixture {
	/// The standard four people and three pets
	pub fn seed() -> Self {
		Self {
			people: people(),
			pets: pets(),
		}
	}

	/// Load a fixture document, e.g. `{"people": [...], "pets": [...]}`
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}

	pub fn person(&self, name: &str) -> Option<&Person> {
		self.people.iter().find(|person| person.name == name)
	}

	/// Every person with the first pet sharing their id
	pub fn owners(&self) -> Vec<PetOwner<'_>> {
		self.people
			.iter()
			.map(|person| PetOwner::new(person, self.pets.iter().find(|pet| pet.id == person.id)))
			.collect()
	}
}
