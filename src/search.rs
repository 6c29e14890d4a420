//! The filterable movie list.

use crate::{
	logging::user_text,
	record::{required, MovieId, TaggedMovie},
	InputError,
};
use std::{collections::BTreeMap, rc::Rc};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct SearchList {
	movies: Rc<[TaggedMovie]>,
	next_id: u64,
}

/// Raw form values for a new movie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedMovieInput {
	pub title: String,
	pub extra_name: String,
	pub extra_value: String,
}

impl SearchList {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn movies(&self) -> Rc<[TaggedMovie]> {
		self.movies.clone()
	}

	/// The list element is hidden until a first movie exists.
	#[must_use]
	pub fn list_visible(&self) -> bool {
		!self.movies.is_empty()
	}

	/// # Errors
	///
	/// Iff a field is blank or the extra field would shadow the title.
	pub fn add(&self, input: &TaggedMovieInput) -> Result<Self, InputError> {
		let title = required("title", &input.title)?;
		let extra_name = required("extra name", &input.extra_name)?;
		let extra_value = required("extra value", &input.extra_value)?;
		if extra_name == TaggedMovie::TITLE_FIELD {
			return Err(InputError::ReservedField { name: extra_name.to_owned() });
		}

		let mut extras = BTreeMap::new();
		extras.insert(extra_name.to_owned(), extra_value.to_owned());
		let movie = TaggedMovie {
			id: MovieId(self.next_id),
			title: title.to_owned(),
			extras,
		};
		info!(id = %movie.id, title = user_text(&movie.title), "Added searchable movie.");

		let mut movies = self.movies.to_vec();
		movies.push(movie);
		Ok(Self {
			movies: movies.into(),
			next_id: self.next_id + 1,
		})
	}

	/// Movies whose title contains `term`, or all of them for an empty `term`. Case-sensitive.
	pub fn filtered<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a TaggedMovie> + 'a {
		self.movies.iter().filter(move |movie| term.is_empty() || movie.title.contains(term))
	}
}
