// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Pet owner queries exercised by the test suite

use relate_join::Join;
use relate_testing::{Fixture, PetOwner};
use tracing::{debug, instrument};

/// Every person with each pet sharing their id, or no pet
#[instrument(name = "pets::owners_by_id", level = "debug", skip_all)]
pub fn owners_by_id(join: Join, fixture: &Fixture) -> Vec<PetOwner<'_>> {
	let owners: Vec<_> =
		join.left_outer_join(&fixture.people, &fixture.pets, |person| person.id, |pet| pet.id, PetOwner::new).collect();

	debug!(owners = owners.len(), without_pet = without_pet(&owners), "joined owners by id");
	owners
}

/// Every person with each pet sharing their id whose age is half of theirs,
/// or no pet
#[instrument(name = "pets::owners_by_id_and_age", level = "debug", skip_all)]
pub fn owners_by_id_and_age(join: Join, fixture: &Fixture) -> Vec<PetOwner<'_>> {
	let owners: Vec<_> = join
		.left_outer_join(
			&fixture.people,
			&fixture.pets,
			|person| (person.id, u64::from(person.age)),
			|pet| (pet.id, u64::from(pet.age) * 2),
			PetOwner::new,
		)
		.collect();

	debug!(owners = owners.len(), without_pet = without_pet(&owners), "joined owners by id and age");
	owners
}

pub fn without_pet(owners: &[PetOwner<'_>]) -> usize {
	owners.iter().filter(|owner| owner.pet.is_none()).count()
}

pub fn pet_of<'a>(owners: &[PetOwner<'a>], name: &str) -> Option<&'a str> {
	owners.iter().find(|owner| owner.person.name == name).and_then(|owner| owner.pet_name())
}
