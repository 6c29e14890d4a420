use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the browser console as global [`tracing`] subscriber.
///
/// Only the first call has an effect. On targets other than `wasm32` this does nothing,
/// so that native tests may install their own subscriber.
pub fn init_logging() {
	INIT.call_once(|| {
		#[cfg(target_arch = "wasm32")]
		tracing_wasm::set_as_global_default();
		tracing::debug!("Logging initialised.");
	});
}

/// Replaces user-entered content in log messages unless the `dangerous-logging` feature is enabled.
pub(crate) fn user_text(text: &str) -> &str {
	if cfg!(feature = "dangerous-logging") {
		text
	} else {
		"<redacted>"
	}
}
