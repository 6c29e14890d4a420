#![cfg(target_arch = "wasm32")]

use mount_drills::{config::GameConfig, dom::game::GameView, init_logging, MountError};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_button_plays_a_round() {
	init_logging();
	let document = window().unwrap().document().unwrap();
	let button = document.create_element("button").unwrap().dyn_into::<HtmlElement>().unwrap();
	button.set_id("game-start");
	document.body().unwrap().append_child(&button).unwrap();

	// `prompt` and `alert` are replaced so the browser test doesn't block.
	js_sys::eval("window.prompt = function() { return 'paper'; }; window.alert = function(m) { window.lastAlert = m; }").unwrap();

	let view = GameView::mount(&document, &GameConfig { start_button: "game-start".to_owned() }).unwrap();
	button.click();

	let message = js_sys::eval("window.lastAlert").unwrap().as_string().unwrap();
	assert!(message.starts_with("You picked up PAPER, computer picked up "));
	assert!(!view.game().is_running());

	button.click();
	assert!(!view.game().is_running());
}

#[wasm_bindgen_test]
fn missing_start_button() {
	init_logging();
	let document = window().unwrap().document().unwrap();
	let error = GameView::mount(&document, &GameConfig { start_button: "game-missing".to_owned() }).unwrap_err();
	assert_eq!(error, MountError::MissingMountPoint { id: "game-missing".to_owned() });
}
