//! The movie archive: a list of rated movies with add and delete modals.

use crate::{
	logging::user_text,
	record::{required, Movie, MovieId, Rating},
	InputError,
};
use std::rc::Rc;
use tracing::{info, warn};

/// Archive state. Modal visibility is part of the state so the view only mirrors it.
#[derive(Debug, Clone)]
pub struct Catalog {
	movies: Rc<[Movie]>,
	add_modal_open: bool,
	pending_delete: Option<MovieId>,
	next_id: u64,
}
impl Default for Catalog {
	fn default() -> Self {
		Self::new()
	}
}

/// Raw form values of the add modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieInput {
	pub title: String,
	pub image_url: String,
	pub rating: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
	ShowAddModal,
	CancelAdd,
	ConfirmAdd(MovieInput),
	StartDelete(MovieId),
	CancelDelete,
	ConfirmDelete,
	BackdropClick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEffect {
	ClearInputs,
	AppendMovie(Movie),
	/// Remove the list entry of `id`, which was at position `index`.
	RemoveMovie { id: MovieId, index: usize },
}

#[derive(Debug, Clone)]
pub struct Transition {
	pub state: Catalog,
	pub effects: Vec<CatalogEffect>,
}

impl Catalog {
	#[must_use]
	pub fn new() -> Self {
		Self {
			movies: Rc::from(Vec::new()),
			add_modal_open: false,
			pending_delete: None,
			next_id: 0,
		}
	}

	#[must_use]
	pub fn movies(&self) -> Rc<[Movie]> {
		self.movies.clone()
	}

	#[must_use]
	pub fn add_modal_open(&self) -> bool {
		self.add_modal_open
	}

	#[must_use]
	pub fn pending_delete(&self) -> Option<MovieId> {
		self.pending_delete
	}

	#[must_use]
	pub fn delete_modal_open(&self) -> bool {
		self.pending_delete.is_some()
	}

	#[must_use]
	pub fn backdrop_visible(&self) -> bool {
		self.add_modal_open || self.delete_modal_open()
	}

	/// The "no movies yet" hint.
	#[must_use]
	pub fn entry_text_visible(&self) -> bool {
		self.movies.is_empty()
	}

	/// # Errors
	///
	/// Iff the action's input is invalid or doesn't match the current state.
	/// The state is left untouched in that case.
	pub fn reduce(&self, action: CatalogAction) -> Result<Transition, InputError> {
		let mut state = self.clone();
		let mut effects = Vec::new();
		match action {
			CatalogAction::ShowAddModal => state.add_modal_open = true,
			CatalogAction::CancelAdd => {
				state.add_modal_open = false;
				effects.push(CatalogEffect::ClearInputs);
			}
			CatalogAction::ConfirmAdd(input) => {
				let movie = state.validate(&input).map_err(|error| {
					warn!(%error, "Rejected movie input.");
					error
				})?;
				info!(id = %movie.id, title = user_text(&movie.title), rating = movie.rating.stars(), "Added movie.");
				state.movies = append(&state.movies, movie.clone());
				state.add_modal_open = false;
				effects.push(CatalogEffect::ClearInputs);
				effects.push(CatalogEffect::AppendMovie(movie));
			}
			CatalogAction::StartDelete(id) => {
				if !state.movies.iter().any(|movie| movie.id == id) {
					return Err(InputError::UnknownMovie(id));
				}
				state.pending_delete = Some(id);
			}
			CatalogAction::CancelDelete => state.pending_delete = None,
			CatalogAction::ConfirmDelete => {
				let id = state.pending_delete.ok_or(InputError::NothingPending)?;
				let index = state.remove(id)?;
				state.pending_delete = None;
				effects.push(CatalogEffect::RemoveMovie { id, index });
			}
			CatalogAction::BackdropClick => {
				state.add_modal_open = false;
				state.pending_delete = None;
				effects.push(CatalogEffect::ClearInputs);
			}
		}
		Ok(Transition { state, effects })
	}

	/// Removes exactly the movie with `id` and returns the position it had.
	///
	/// # Errors
	///
	/// [`InputError::UnknownMovie`] iff no such movie is listed.
	pub fn remove(&mut self, id: MovieId) -> Result<usize, InputError> {
		let index = self.movies.iter().position(|movie| movie.id == id).ok_or(InputError::UnknownMovie(id))?;
		let movies = self
			.movies
			.iter()
			.enumerate()
			.filter(|&(i, _)| i != index)
			.map(|(_, movie)| movie.clone())
			.collect::<Vec<_>>();
		self.movies = movies.into();
		info!(%id, index, "Removed movie.");
		Ok(index)
	}

	/// Validates and allocates the next id. `self` is a working copy.
	fn validate(&mut self, input: &MovieInput) -> Result<Movie, InputError> {
		let title = required("title", &input.title)?;
		let image_url = required("image URL", &input.image_url)?;
		let rating = Rating::parse(&input.rating)?;
		let id = MovieId(self.next_id);
		self.next_id += 1;
		Ok(Movie {
			id,
			title: title.to_owned(),
			image_url: image_url.to_owned(),
			rating,
		})
	}
}

fn append<T: Clone>(list: &[T], item: T) -> Rc<[T]> {
	let mut next = Vec::with_capacity(list.len() + 1);
	next.extend_from_slice(list);
	next.push(item);
	next.into()
}
