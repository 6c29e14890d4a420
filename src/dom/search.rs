//! The movie search page: a form to add movies with one extra field, and a title filter.

use super::{alert, append, by_id, element, input_by_id, listeners::Listeners, set_class};
use crate::{
	config::SearchConfig,
	search::{SearchList, TaggedMovieInput},
	InputError, MountError,
};
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, error, instrument, warn};
use web_sys::{Document, Element, HtmlInputElement};

#[derive(Debug)]
pub struct Search {
	shared: Rc<Shared>,
	_listeners: Listeners,
}

#[derive(Debug)]
struct Shared {
	list: RefCell<SearchList>,
	document: Document,
	movie_list: Element,
	title: HtmlInputElement,
	extra_name: HtmlInputElement,
	extra_value: HtmlInputElement,
	filter_title: HtmlInputElement,
}

impl Search {
	/// # Errors
	///
	/// Iff one of the [`SearchConfig`] elements is missing.
	#[instrument(skip(document))]
	pub fn mount(document: &Document, config: &SearchConfig) -> Result<Self, MountError> {
		let shared = Rc::new(Shared {
			list: RefCell::new(SearchList::new()),
			document: document.clone(),
			movie_list: by_id(document, &config.movie_list)?,
			title: input_by_id(document, &config.title)?,
			extra_name: input_by_id(document, &config.extra_name)?,
			extra_value: input_by_id(document, &config.extra_value)?,
			filter_title: input_by_id(document, &config.filter_title)?,
		});

		let add_button = by_id(document, &config.add_button)?;
		let search_button = by_id(document, &config.search_button)?;

		let mut listeners = Listeners::new();
		let add_shared = shared.clone();
		listeners.bind("add", &add_button, "click", move || {
			if let Err(error) = add_shared.add() {
				warn!(%error, "Movie rejected.");
				alert(&error.to_string());
			}
		})?;
		let search_shared = shared.clone();
		listeners.bind("search", &search_button, "click", move || {
			let term = search_shared.filter_title.value();
			if let Err(error) = search_shared.render(&term) {
				error!(%error, "Failed to render movie list.");
			}
		})?;

		shared.render("")?;
		Ok(Self { shared, _listeners: listeners })
	}

	#[must_use]
	pub fn list(&self) -> SearchList {
		self.shared.list.borrow().clone()
	}

	/// Adds a movie from the form fields and shows the unfiltered list.
	///
	/// # Errors
	///
	/// Iff the form input is rejected. Nothing is added in that case.
	pub fn add(&self) -> Result<(), InputError> {
		self.shared.add()
	}

	/// Re-renders the list with only titles containing `term`.
	///
	/// # Errors
	///
	/// Iff a DOM write fails.
	pub fn filter(&self, term: &str) -> Result<(), MountError> {
		self.shared.render(term)
	}
}

impl Shared {
	fn add(&self) -> Result<(), InputError> {
		let input = TaggedMovieInput {
			title: self.title.value(),
			extra_name: self.extra_name.value(),
			extra_value: self.extra_value.value(),
		};
		let next = self.list.borrow().add(&input)?;
		*self.list.borrow_mut() = next;
		if let Err(error) = self.render("") {
			error!(%error, "Failed to render movie list.");
		}
		Ok(())
	}

	/// Replaces the list content. The list stays hidden while there are no movies at all.
	fn render(&self, term: &str) -> Result<(), MountError> {
		let list = self.list.borrow();
		set_class(&self.movie_list, "visible", list.list_visible())?;
		if !list.list_visible() {
			return Ok(());
		}

		self.movie_list.set_inner_html("");
		let mut shown = 0_usize;
		for movie in list.filtered(term) {
			append(&self.movie_list, &element(&self.document, "li", None, Some(&movie.describe()))?)?;
			shown += 1;
		}
		debug!(shown, "Rendered movie list.");
		Ok(())
	}
}
