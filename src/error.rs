use crate::record::MovieId;
use wasm_bindgen::JsValue;

/// Failures while attaching to or writing into the host document.
///
/// These are fatal to the render call that produced them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
	#[error("No global `document` is available")]
	NoDocument,

	#[error("Missing mount point: no element with id {id:?}")]
	MissingMountPoint { id: String },

	#[error("Missing element matching {selector:?}")]
	MissingElement { selector: String },

	#[error("Element {id:?} is not a {expected}")]
	UnexpectedElement { id: String, expected: &'static str },

	#[error("DOM call failed: {message}")]
	Js { message: String },
}

impl MountError {
	pub(crate) fn js(error: &JsValue) -> Self {
		Self::Js {
			message: error.as_string().unwrap_or_else(|| format!("{:?}", error)),
		}
	}
}

impl From<MountError> for JsValue {
	fn from(error: MountError) -> Self {
		JsValue::from_str(&error.to_string())
	}
}

/// Rejected user input or actions that don't apply to the current state.
///
/// Always recovered locally: nothing is committed and the user is notified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
	#[error("The {field} field is required")]
	EmptyField { field: &'static str },

	#[error("The {field} field must be a whole number")]
	NotANumber { field: &'static str },

	#[error("Rating {value} is outside of 1..=5")]
	RatingOutOfRange { value: i64 },

	#[error("{name:?} can't be used as an extra field name")]
	ReservedField { name: String },

	#[error("No movie with id {0}")]
	UnknownMovie(MovieId),

	#[error("No deletion is pending")]
	NothingPending,

	#[error("Operand must be a non-zero number")]
	InvalidOperand,

	#[error("A round is already running")]
	RoundInProgress,
}
