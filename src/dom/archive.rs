//! The movie archive page: add modal, delete modal, backdrop and the movie list.

use super::{alert, append, by_id, element, html_by_id, listeners::Listeners, select, set_class};
use crate::{
	catalog::{Catalog, CatalogAction, CatalogEffect, MovieInput, Transition},
	config::ArchiveConfig,
	record::Movie,
	InputError, MountError,
};
use std::{
	cell::RefCell,
	convert::TryFrom,
	rc::{Rc, Weak},
};
use tracing::{error, instrument, trace, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

const INVALID_INPUT_MESSAGE: &str = "Please enter valid values (rating between 1 and 5).";

/// The mounted archive. Dropping it detaches the modal and button listeners.
#[derive(Debug)]
pub struct Archive {
	shared: Rc<Shared>,
	_listeners: Listeners,
}

#[derive(Debug)]
struct Shared {
	catalog: RefCell<Catalog>,
	/// One listener per listed movie, keyed by its id.
	movie_listeners: RefCell<Listeners>,
	document: Document,
	elements: Elements,
}

#[derive(Debug)]
struct Elements {
	add_modal: Element,
	backdrop: Element,
	entry_text: HtmlElement,
	delete_modal: Element,
	movie_list: Element,
	title: HtmlInputElement,
	image_url: HtmlInputElement,
	rating: HtmlInputElement,
}
impl Elements {
	fn movie_input(&self) -> MovieInput {
		MovieInput {
			title: self.title.value(),
			image_url: self.image_url.value(),
			rating: self.rating.value(),
		}
	}

	fn clear_inputs(&self) {
		for input in &[&self.title, &self.image_url, &self.rating] {
			input.set_value("");
		}
	}
}

impl Archive {
	/// Looks up the archive's elements and binds its buttons.
	///
	/// # Errors
	///
	/// Iff one of the [`ArchiveConfig`] elements or the modal buttons and inputs are missing.
	#[instrument(skip(document))]
	pub fn mount(document: &Document, config: &ArchiveConfig) -> Result<Self, MountError> {
		let add_modal = by_id(document, &config.add_modal)?;
		let inputs = add_modal.query_selector_all("input").map_err(|error| MountError::js(&error))?;
		let input = |i: u32| {
			inputs
				.item(i)
				.and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
				.ok_or_else(|| MountError::MissingElement {
					selector: format!("#{} input:nth-of-type({})", config.add_modal, i + 1),
				})
		};
		let (title, image_url, rating) = (input(0)?, input(1)?, input(2)?);

		let cancel_add = select(&add_modal, ".btn--passive")?;
		let confirm_add = cancel_add.next_element_sibling().ok_or_else(|| MountError::MissingElement {
			selector: format!("#{} .btn--passive + *", config.add_modal),
		})?;
		let delete_modal = by_id(document, &config.delete_modal)?;
		let cancel_delete = select(&delete_modal, ".btn--passive")?;
		let confirm_delete = select(&delete_modal, ".btn--danger")?;
		let add_button = by_id(document, &config.add_button)?;

		let shared = Rc::new(Shared {
			catalog: RefCell::new(Catalog::new()),
			movie_listeners: RefCell::new(Listeners::new()),
			document: document.clone(),
			elements: Elements {
				backdrop: by_id(document, &config.backdrop)?,
				entry_text: html_by_id(document, &config.entry_text)?,
				movie_list: by_id(document, &config.movie_list)?,
				add_modal,
				delete_modal,
				title,
				image_url,
				rating,
			},
		});

		let mut listeners = Listeners::new();
		let bindings: [(&str, &Element, fn(&Shared) -> CatalogAction); 6] = [
			("show-add", &add_button, |_| CatalogAction::ShowAddModal),
			("backdrop", &shared.elements.backdrop, |_| CatalogAction::BackdropClick),
			("cancel-add", &cancel_add, |_| CatalogAction::CancelAdd),
			("confirm-add", &confirm_add, |shared| CatalogAction::ConfirmAdd(shared.elements.movie_input())),
			("cancel-delete", &cancel_delete, |_| CatalogAction::CancelDelete),
			("confirm-delete", &confirm_delete, |_| CatalogAction::ConfirmDelete),
		];
		for (key, target, action) in bindings.iter().copied() {
			let shared = Rc::downgrade(&shared);
			listeners.bind(key, target, "click", move || {
				if let Some(shared) = shared.upgrade() {
					let action = action(&shared);
					let _ = Shared::dispatch(&shared, action);
				}
			})?;
		}

		shared.sync()?;
		Ok(Self { shared, _listeners: listeners })
	}

	/// A snapshot of the current state.
	#[must_use]
	pub fn catalog(&self) -> Catalog {
		self.shared.catalog.borrow().clone()
	}

	/// Runs `action` as if triggered from the page.
	///
	/// # Errors
	///
	/// Iff the action was rejected. The user has been notified already in that case.
	pub fn dispatch(&self, action: CatalogAction) -> Result<(), InputError> {
		Shared::dispatch(&self.shared, action)
	}
}

impl Shared {
	fn dispatch(this: &Rc<Self>, action: CatalogAction) -> Result<(), InputError> {
		let notify = matches!(action, CatalogAction::ConfirmAdd(_));
		let transition = this.catalog.borrow().reduce(action);
		match transition {
			Ok(Transition { state, effects }) => {
				*this.catalog.borrow_mut() = state;
				for effect in effects {
					if let Err(error) = Self::apply(this, effect) {
						error!(%error, "Failed to apply archive effect.");
					}
				}
				if let Err(error) = this.sync() {
					error!(%error, "Failed to sync archive modals.");
				}
				Ok(())
			}
			Err(error) => {
				warn!(%error, "Archive action rejected.");
				if notify {
					alert(INVALID_INPUT_MESSAGE);
				}
				Err(error)
			}
		}
	}

	fn apply(this: &Rc<Self>, effect: CatalogEffect) -> Result<(), MountError> {
		match effect {
			CatalogEffect::ClearInputs => {
				this.elements.clear_inputs();
				Ok(())
			}
			CatalogEffect::AppendMovie(movie) => Self::render_movie(this, &movie),
			CatalogEffect::RemoveMovie { id, index } => {
				this.movie_listeners.borrow_mut().unbind(&id.to_string());
				let position = u32::try_from(index).unwrap_or(u32::MAX);
				match this.elements.movie_list.children().item(position) {
					Some(entry) => {
						entry.remove();
						Ok(())
					}
					None => Err(MountError::MissingElement {
						selector: format!("#{} > :nth-child({})", this.elements.movie_list.id(), index + 1),
					}),
				}
			}
		}
	}

	fn render_movie(this: &Rc<Self>, movie: &Movie) -> Result<(), MountError> {
		let document = &this.document;
		let entry = element(document, "li", Some("movie-element"), None)?;
		let image_box = element(document, "div", Some("movie-element__image"), None)?;
		let image = element(document, "img", None, None)?;
		image.set_attribute("src", &movie.image_url).map_err(|error| MountError::js(&error))?;
		image.set_attribute("alt", &movie.title).map_err(|error| MountError::js(&error))?;
		let info = element(document, "div", Some("movie-element__info"), None)?;
		append(&info, &element(document, "h2", None, Some(&movie.title))?)?;
		append(&info, &element(document, "p", None, Some(&movie.rating.to_string()))?)?;
		append(&image_box, &image)?;
		append(&entry, &image_box)?;
		append(&entry, &info)?;

		let id = movie.id;
		let shared: Weak<Self> = Rc::downgrade(this);
		this.movie_listeners.borrow_mut().bind(id.to_string(), &entry, "click", move || {
			if let Some(shared) = shared.upgrade() {
				let _ = Self::dispatch(&shared, CatalogAction::StartDelete(id));
			}
		})?;
		append(&this.elements.movie_list, &entry)?;
		trace!(%id, "Rendered movie.");
		Ok(())
	}

	/// Mirrors modal, backdrop and hint visibility from the state.
	fn sync(&self) -> Result<(), MountError> {
		let catalog = self.catalog.borrow();
		set_class(&self.elements.add_modal, "visible", catalog.add_modal_open())?;
		set_class(&self.elements.delete_modal, "visible", catalog.delete_modal_open())?;
		set_class(&self.elements.backdrop, "visible", catalog.backdrop_visible())?;
		self.elements
			.entry_text
			.style()
			.set_property("display", if catalog.entry_text_visible() { "block" } else { "none" })
			.map_err(|error| MountError::js(&error))
	}
}
