use crate::MountError;
use hashbrown::{hash_map::Entry, HashMap};
use js_sys::Function;
use tracing::{error, trace};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::EventTarget;

/// Keeps event listener [`Closure`]s alive and detaches them again.
///
/// Each binding is addressed by a key chosen by the owning view. Binding a key again replaces the previous listener.
///
/// Dropping the registry removes all listeners it still holds from their targets.
#[derive(Debug, Default)]
pub struct Listeners {
	bindings: HashMap<String, Binding>,
}

#[derive(Debug)]
struct Binding {
	target: EventTarget,
	event: &'static str,
	closure: Closure<dyn FnMut()>,
}
impl Binding {
	fn function(&self) -> &Function {
		self.closure.as_ref().unchecked_ref()
	}

	fn detach(&self) {
		if let Err(error) = self.target.remove_event_listener_with_callback(self.event, self.function()) {
			error!(error = ?error, event = self.event, "Failed to remove event listener.");
		}
	}
}

impl Listeners {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}

	#[must_use]
	pub fn contains(&self, key: &str) -> bool {
		self.bindings.contains_key(key)
	}

	/// Attaches `handler` to `target` for `event` under `key`.
	///
	/// # Errors
	///
	/// Iff the host refuses the listener. The registry is unchanged in that case.
	pub fn bind(&mut self, key: impl Into<String>, target: &EventTarget, event: &'static str, handler: impl FnMut() + 'static) -> Result<(), MountError> {
		let binding = Binding {
			target: target.clone(),
			event,
			closure: Closure::wrap(Box::new(handler) as Box<dyn FnMut()>),
		};
		target
			.add_event_listener_with_callback(event, binding.function())
			.map_err(|error| MountError::js(&error))?;

		match self.bindings.entry(key.into()) {
			Entry::Occupied(mut occupied) => {
				trace!(key = occupied.key().as_str(), event, "Replacing listener.");
				occupied.get().detach();
				occupied.insert(binding);
			}
			Entry::Vacant(vacant) => {
				trace!(key = vacant.key().as_str(), event, "Created listener.");
				vacant.insert(binding);
			}
		}
		Ok(())
	}

	/// Detaches and frees the listener under `key`.
	///
	/// Must not be called from within that listener.
	pub fn unbind(&mut self, key: &str) -> bool {
		match self.bindings.remove(key) {
			Some(binding) => {
				binding.detach();
				trace!(key, "Destroyed listener.");
				true
			}
			None => false,
		}
	}
}

impl Drop for Listeners {
	fn drop(&mut self) {
		for binding in self.bindings.values() {
			binding.detach();
		}
		trace!("Freed {} listener(s).", self.bindings.len());
	}
}
