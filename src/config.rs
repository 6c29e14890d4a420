//! Mount identifiers each project expects in its host document.
//!
//! These ids are the whole contract with the surrounding page markup.
//! The [`Default`] implementations match the stock pages of each exercise.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
	/// Where the cart and the product list are appended.
	pub app: String,
	/// Id given to the product list, which the product items mount into.
	pub product_list: String,
}
impl Default for ShopConfig {
	fn default() -> Self {
		Self {
			app: "app".to_owned(),
			product_list: "prod-list".to_owned(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
	pub add_modal: String,
	pub add_button: String,
	pub backdrop: String,
	pub entry_text: String,
	pub delete_modal: String,
	pub movie_list: String,
}
impl Default for ArchiveConfig {
	fn default() -> Self {
		Self {
			add_modal: "add-modal".to_owned(),
			add_button: "add-movie".to_owned(),
			backdrop: "backdrop".to_owned(),
			entry_text: "entry-text".to_owned(),
			delete_modal: "delete-modal".to_owned(),
			movie_list: "movie-list".to_owned(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
	pub add_button: String,
	pub search_button: String,
	pub movie_list: String,
	pub title: String,
	pub extra_name: String,
	pub extra_value: String,
	pub filter_title: String,
}
impl Default for SearchConfig {
	fn default() -> Self {
		Self {
			add_button: "add-movie-btn".to_owned(),
			search_button: "search-btn".to_owned(),
			movie_list: "movie-list".to_owned(),
			title: "title".to_owned(),
			extra_name: "extra-name".to_owned(),
			extra_value: "extra-value".to_owned(),
			filter_title: "filter-title".to_owned(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
	pub start_button: String,
}
impl Default for GameConfig {
	fn default() -> Self {
		Self {
			start_button: "start-game-btn".to_owned(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
	pub input: String,
	pub add_button: String,
	pub subtract_button: String,
	pub multiply_button: String,
	pub divide_button: String,
	pub current_result: String,
	pub current_calculation: String,
}
impl Default for CalculatorConfig {
	fn default() -> Self {
		Self {
			input: "input-number".to_owned(),
			add_button: "btn-add".to_owned(),
			subtract_button: "btn-subtract".to_owned(),
			multiply_button: "btn-multiply".to_owned(),
			divide_button: "btn-divide".to_owned(),
			current_result: "current-result".to_owned(),
			current_calculation: "current-calculation".to_owned(),
		}
	}
}
