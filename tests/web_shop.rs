#![cfg(target_arch = "wasm32")]

use mount_drills::{
	cart::default_products,
	config::ShopConfig,
	dom::shop::Shop,
	init_logging,
	record::{Price, Product},
	MountError,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point(id: &str) -> (Document, Element) {
	init_logging();
	let document = window().unwrap().document().unwrap();
	let app = document.create_element("div").unwrap();
	app.set_id(id);
	document.body().unwrap().append_child(&app).unwrap();
	(document, app)
}

fn config(app: &str) -> ShopConfig {
	ShopConfig {
		app: app.to_owned(),
		product_list: format!("{}-products", app),
	}
}

fn click(element: &Element) {
	element.dyn_ref::<HtmlElement>().unwrap().click();
}

#[wasm_bindgen_test]
fn renders_cart_and_items() {
	let (document, app) = mount_point("shop-render");
	let shop = Shop::mount(&document, &config("shop-render")).unwrap();

	let cart = app.query_selector("section.cart").unwrap().unwrap();
	assert_eq!(cart.query_selector("h2").unwrap().unwrap().text_content().as_deref(), Some("Total: $0.00"));
	assert_eq!(cart.query_selector("button").unwrap().unwrap().text_content().as_deref(), Some("Order Now!"));

	let list = document.get_element_by_id("shop-render-products").unwrap();
	assert_eq!(list.class_name(), "product-list");
	assert_eq!(list.child_element_count(), 2);
	assert_eq!(shop.products().items().len(), 2);

	let first = list.first_element_child().unwrap();
	assert_eq!(first.class_name(), "product-item");
	assert_eq!(first.query_selector("h2").unwrap().unwrap().text_content().as_deref(), Some("A Pillow"));
	assert_eq!(first.query_selector("h3").unwrap().unwrap().text_content().as_deref(), Some("$19.99"));
}

#[wasm_bindgen_test]
fn add_to_cart_updates_total_only() {
	let (document, app) = mount_point("shop-add");
	let shop = Shop::mount(&document, &config("shop-add")).unwrap();
	let total = app.query_selector("section.cart h2").unwrap().unwrap();
	let buttons = app.query_selector_all(".product-item button").unwrap();
	let list_html = document.get_element_by_id("shop-add-products").unwrap().inner_html();

	click(&buttons.item(0).unwrap().dyn_into::<Element>().unwrap());
	assert_eq!(total.text_content().as_deref(), Some("Total: $19.99"));

	click(&buttons.item(1).unwrap().dyn_into::<Element>().unwrap());
	assert_eq!(total.text_content().as_deref(), Some("Total: $109.98"));

	assert_eq!(shop.context().cart().len(), 2);
	assert_eq!(shop.context().cart().total(), Price::from_cents(10998));
	assert_eq!(document.get_element_by_id("shop-add-products").unwrap().inner_html(), list_html);

	let order = shop.context().order();
	assert_eq!(order.items.len(), 2);
	assert_eq!(order.total, Price::from_cents(10998));
	assert_eq!(shop.context().cart().len(), 2);
}

#[wasm_bindgen_test]
fn order_button_keeps_cart() {
	let (document, app) = mount_point("shop-order");
	let shop = Shop::mount(&document, &config("shop-order")).unwrap();
	let total = app.query_selector("section.cart h2").unwrap().unwrap();
	click(&app.query_selector(".product-item button").unwrap().unwrap());

	click(&app.query_selector("section.cart button").unwrap().unwrap());
	assert_eq!(shop.context().cart().len(), 1);
	assert_eq!(total.text_content().as_deref(), Some("Total: $19.99"));
}

#[wasm_bindgen_test]
fn coordinator_routes_to_cart() {
	let (document, app) = mount_point("shop-context");
	let products = vec![Product::new("Lamp", "lamp.png", "Bright", Price::from_cents(500))];
	let shop = Shop::mount_with(&document, &config("shop-context"), products).unwrap();

	let total = shop.context().add_product_to_cart(default_products().remove(0));
	assert_eq!(total, Price::from_cents(1999));
	assert_eq!(
		app.query_selector("section.cart h2").unwrap().unwrap().text_content().as_deref(),
		Some("Total: $19.99")
	);
}

#[wasm_bindgen_test]
fn missing_app_mount() {
	init_logging();
	let document = window().unwrap().document().unwrap();
	let error = Shop::mount(&document, &config("shop-missing")).unwrap_err();
	assert_eq!(error, MountError::MissingMountPoint { id: "shop-missing".to_owned() });
}
