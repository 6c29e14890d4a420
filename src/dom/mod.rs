//! The [`web_sys`] adapter: mounts the pure states into a host document and mirrors their effects.

use crate::MountError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

pub mod archive;
pub mod calculator;
pub mod game;
pub mod listeners;
pub mod mount;
pub mod search;
pub mod shop;

/// The global document.
///
/// # Errors
///
/// Iff there is no `window` or it has no `document`, as in workers.
pub fn document() -> Result<Document, MountError> {
	web_sys::window().and_then(|window| window.document()).ok_or(MountError::NoDocument)
}

pub(crate) fn by_id(document: &Document, id: &str) -> Result<Element, MountError> {
	document.get_element_by_id(id).ok_or_else(|| MountError::MissingMountPoint { id: id.to_owned() })
}

pub(crate) fn html_by_id(document: &Document, id: &str) -> Result<HtmlElement, MountError> {
	by_id(document, id)?.dyn_into::<HtmlElement>().map_err(|_| MountError::UnexpectedElement {
		id: id.to_owned(),
		expected: "HTML element",
	})
}

pub(crate) fn input_by_id(document: &Document, id: &str) -> Result<HtmlInputElement, MountError> {
	by_id(document, id)?.dyn_into::<HtmlInputElement>().map_err(|_| MountError::UnexpectedElement {
		id: id.to_owned(),
		expected: "<input>",
	})
}

pub(crate) fn select(parent: &Element, selector: &str) -> Result<Element, MountError> {
	parent
		.query_selector(selector)
		.map_err(|error| MountError::js(&error))?
		.ok_or_else(|| MountError::MissingElement { selector: selector.to_owned() })
}

/// Creates a detached `<tag class="…">text</tag>`.
pub(crate) fn element(document: &Document, tag: &str, class: Option<&str>, text: Option<&str>) -> Result<Element, MountError> {
	let element = document.create_element(tag).map_err(|error| MountError::js(&error))?;
	if let Some(class) = class {
		element.set_class_name(class);
	}
	if text.is_some() {
		element.set_text_content(text);
	}
	Ok(element)
}

pub(crate) fn append(parent: &Element, child: &Element) -> Result<(), MountError> {
	parent.append_child(child).map(drop).map_err(|error| MountError::js(&error))
}

pub(crate) fn set_class(element: &Element, class: &str, present: bool) -> Result<(), MountError> {
	let class_list = element.class_list();
	let result = if present { class_list.add_1(class) } else { class_list.remove_1(class) };
	result.map_err(|error| MountError::js(&error))
}

pub(crate) fn alert(message: &str) {
	let result = web_sys::window().map(|window| window.alert_with_message(message));
	if let Some(Err(error)) = result {
		tracing::error!(error = ?error, "Failed to show alert.");
	}
}
