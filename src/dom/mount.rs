use crate::MountError;
use tracing::{instrument, trace};
use web_sys::{Document, Element};

/// A name/value pair to set on a created element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementAttribute<'a> {
	pub name: &'a str,
	pub value: &'a str,
}
impl<'a> ElementAttribute<'a> {
	#[must_use]
	pub fn new(name: &'a str, value: &'a str) -> Self {
		Self { name, value }
	}
}

/// Creates a `tag` element, applies `css_classes` and `attributes` and appends it as last child of the element with id `hook_id`.
///
/// The mount point is resolved first, so nothing is created if it is missing.
///
/// # Errors
///
/// [`MountError::MissingMountPoint`] iff `hook_id` doesn't resolve, [`MountError::Js`] if the DOM rejects the tag or an attribute.
#[instrument(skip(document))]
pub fn create_root_element(document: &Document, hook_id: &str, tag: &str, css_classes: Option<&str>, attributes: &[ElementAttribute<'_>]) -> Result<Element, MountError> {
	let hook = super::by_id(document, hook_id)?;
	let root = document.create_element(tag).map_err(|error| MountError::js(&error))?;
	if let Some(css_classes) = css_classes {
		root.set_class_name(css_classes);
	}
	for ElementAttribute { name, value } in attributes {
		root.set_attribute(name, value).map_err(|error| MountError::js(&error))?;
	}
	super::append(&hook, &root)?;
	trace!("Mounted <{}> into #{}.", tag, hook_id);
	Ok(root)
}

/// A piece of UI that attaches itself under a named mount point.
///
/// Constructors never touch the DOM. Use [`Component::rendered`] to render immediately or later.
pub trait Component {
	/// Id of the element this component appends its root to.
	fn hook_id(&self) -> &str;

	/// Creates the component's DOM.
	///
	/// # Errors
	///
	/// Iff the mount point is missing or the DOM rejects a write.
	fn render(&mut self, document: &Document) -> Result<(), MountError>;

	/// Returns the component, rendered first iff `render_now`.
	///
	/// # Errors
	///
	/// Iff rendering fails.
	fn rendered(mut self, document: &Document, render_now: bool) -> Result<Self, MountError>
	where
		Self: Sized,
	{
		if render_now {
			self.render(document)?;
		}
		Ok(self)
	}

	/// [`create_root_element`] under [`Component::hook_id`].
	///
	/// # Errors
	///
	/// See [`create_root_element`].
	fn create_root_element(&self, document: &Document, tag: &str, css_classes: Option<&str>, attributes: &[ElementAttribute<'_>]) -> Result<Element, MountError> {
		create_root_element(document, self.hook_id(), tag, css_classes, attributes)
	}
}
