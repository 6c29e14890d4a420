#![cfg(target_arch = "wasm32")]

use mount_drills::{catalog::CatalogAction, config::ArchiveConfig, dom::archive::Archive, init_logging, InputError};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, Document, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn page(prefix: &str) -> (Document, ArchiveConfig) {
	init_logging();
	let document = window().unwrap().document().unwrap();
	let host = document.create_element("div").unwrap();
	host.set_inner_html(&format!(
		r#"
		<div id="{p}-backdrop"></div>
		<div id="{p}-add-modal">
			<input type="text"><input type="text"><input type="number">
			<button class="btn--passive">Cancel</button><button class="btn--success">Add</button>
		</div>
		<div id="{p}-delete-modal">
			<button class="btn--passive">No</button><button class="btn--danger">Yes</button>
		</div>
		<button id="{p}-add-movie">Add Movie</button>
		<section id="{p}-entry-text">Your personal movie database!</section>
		<ul id="{p}-movie-list"></ul>
		"#,
		p = prefix
	));
	document.body().unwrap().append_child(&host).unwrap();

	let config = ArchiveConfig {
		add_modal: format!("{}-add-modal", prefix),
		add_button: format!("{}-add-movie", prefix),
		backdrop: format!("{}-backdrop", prefix),
		entry_text: format!("{}-entry-text", prefix),
		delete_modal: format!("{}-delete-modal", prefix),
		movie_list: format!("{}-movie-list", prefix),
	};
	(document, config)
}

fn html(document: &Document, id: &str) -> HtmlElement {
	document.get_element_by_id(id).unwrap().dyn_into().unwrap()
}

fn fill(document: &Document, config: &ArchiveConfig, values: [&str; 3]) {
	let inputs = html(document, &config.add_modal).query_selector_all("input").unwrap();
	for (i, value) in values.iter().enumerate() {
		inputs.item(i as u32).unwrap().dyn_into::<HtmlInputElement>().unwrap().set_value(value);
	}
}

fn visible(document: &Document, id: &str) -> bool {
	html(document, id).class_list().contains("visible")
}

#[wasm_bindgen_test]
fn add_movie_through_modal() {
	let (document, config) = page("archive-add");
	let archive = Archive::mount(&document, &config).unwrap();
	assert_eq!(html(&document, &config.entry_text).style().get_property_value("display").unwrap(), "block");

	html(&document, &config.add_button).click();
	assert!(visible(&document, &config.add_modal));
	assert!(visible(&document, &config.backdrop));

	fill(&document, &config, ["Alien", "alien.png", "5"]);
	html(&document, &config.add_modal).query_selector(".btn--success").unwrap().unwrap().dyn_into::<HtmlElement>().unwrap().click();

	assert!(!visible(&document, &config.add_modal));
	assert!(!visible(&document, &config.backdrop));
	assert_eq!(html(&document, &config.entry_text).style().get_property_value("display").unwrap(), "none");

	let list = html(&document, &config.movie_list);
	assert_eq!(list.child_element_count(), 1);
	assert_eq!(list.query_selector("h2").unwrap().unwrap().text_content().as_deref(), Some("Alien"));
	assert_eq!(list.query_selector("p").unwrap().unwrap().text_content().as_deref(), Some("5/5 stars"));
	assert_eq!(archive.catalog().movies().len(), 1);

	let inputs = html(&document, &config.add_modal).query_selector_all("input").unwrap();
	let title = inputs.item(0).unwrap().dyn_into::<HtmlInputElement>().unwrap();
	assert_eq!(title.value(), "");
}

#[wasm_bindgen_test]
fn out_of_range_rating_commits_nothing() {
	let (document, config) = page("archive-invalid");
	let archive = Archive::mount(&document, &config).unwrap();
	archive.dispatch(CatalogAction::ShowAddModal).unwrap();

	let input = mount_drills::catalog::MovieInput {
		title: "Alien".to_owned(),
		image_url: "alien.png".to_owned(),
		rating: "6".to_owned(),
	};
	// `window.alert` is replaced so the browser test doesn't block.
	js_sys::eval("window.alert = function() {}").unwrap();
	assert_eq!(archive.dispatch(CatalogAction::ConfirmAdd(input)), Err(InputError::RatingOutOfRange { value: 6 }));

	assert!(archive.catalog().movies().is_empty());
	assert_eq!(html(&document, &config.movie_list).child_element_count(), 0);
	assert!(visible(&document, &config.add_modal));
}

#[wasm_bindgen_test]
fn delete_removes_clicked_movie() {
	let (document, config) = page("archive-delete");
	let archive = Archive::mount(&document, &config).unwrap();
	for title in &["a", "b", "c"] {
		archive.dispatch(CatalogAction::ShowAddModal).unwrap();
		fill(&document, &config, [*title, "image.png", "3"]);
		html(&document, &config.add_modal).query_selector(".btn--success").unwrap().unwrap().dyn_into::<HtmlElement>().unwrap().click();
	}

	let list = html(&document, &config.movie_list);
	list.children().item(1).unwrap().dyn_into::<HtmlElement>().unwrap().click();
	assert!(visible(&document, &config.delete_modal));
	assert!(visible(&document, &config.backdrop));

	html(&document, &config.delete_modal).query_selector(".btn--danger").unwrap().unwrap().dyn_into::<HtmlElement>().unwrap().click();
	assert!(!visible(&document, &config.delete_modal));

	let titles = (0..list.child_element_count())
		.map(|i| list.children().item(i).unwrap().query_selector("h2").unwrap().unwrap().text_content().unwrap())
		.collect::<Vec<_>>();
	assert_eq!(titles, ["a", "c"]);
	assert_eq!(archive.catalog().movies().len(), 2);
}
