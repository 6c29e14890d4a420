//! The shop: a cart section and one item component per product.

use super::{
	append, element,
	listeners::Listeners,
	mount::{Component, ElementAttribute},
};
use crate::{
	cart::{default_products, Cart, CartAction, CartEffect, Order},
	config::ShopConfig,
	logging::user_text,
	record::{Price, Product},
	MountError,
};
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, instrument, trace};
use web_sys::{Document, Element};

/// Routes item-level actions to the cart.
///
/// Constructed once per shop and handed to each [`ProductItem`]. Clones share the same cart.
#[derive(Debug, Clone, Default)]
pub struct ShopContext {
	shared: Rc<CartHandle>,
}

#[derive(Debug, Default)]
struct CartHandle {
	cart: RefCell<Cart>,
	total_output: RefCell<Option<Element>>,
}

impl ShopContext {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// A snapshot of the current cart.
	#[must_use]
	pub fn cart(&self) -> Cart {
		self.shared.cart.borrow().clone()
	}

	/// Adds `product` and redraws the total, which is the only DOM write. Returns the new total.
	pub fn add_product_to_cart(&self, product: Product) -> Price {
		let effect = self.dispatch(CartAction::AddProduct(product));
		self.apply(&effect);
		match effect {
			CartEffect::RedrawTotal(total) => total,
			CartEffect::Submit(order) => order.total,
		}
	}

	/// Submits the current cart and returns what was ordered. The cart is unchanged.
	#[must_use]
	pub fn order(&self) -> Order {
		let effect = self.dispatch(CartAction::Order);
		self.apply(&effect);
		match effect {
			CartEffect::Submit(order) => order,
			CartEffect::RedrawTotal(total) => Order { items: self.cart().items(), total },
		}
	}

	fn dispatch(&self, action: CartAction) -> CartEffect {
		let mut cart = self.shared.cart.borrow_mut();
		let (next, effect) = cart.reduce(action);
		*cart = next;
		effect
	}

	fn apply(&self, effect: &CartEffect) {
		match effect {
			CartEffect::RedrawTotal(total) => match &*self.shared.total_output.borrow() {
				Some(total_output) => total_output.set_text_content(Some(&total_text(*total))),
				None => trace!("Cart not rendered yet; skipping redraw."),
			},
			CartEffect::Submit(order) => order.submit(),
		}
	}

	fn attach_total_output(&self, total_output: Element) {
		*self.shared.total_output.borrow_mut() = Some(total_output);
	}
}

fn total_text(total: Price) -> String {
	format!("Total: {}", total)
}

/// `section.cart` with the total and the order button.
#[derive(Debug)]
pub struct ShoppingCart {
	hook_id: String,
	context: ShopContext,
	listeners: Listeners,
}
impl ShoppingCart {
	#[must_use]
	pub fn new(hook_id: impl Into<String>, context: ShopContext) -> Self {
		Self {
			hook_id: hook_id.into(),
			context,
			listeners: Listeners::new(),
		}
	}
}
impl Component for ShoppingCart {
	fn hook_id(&self) -> &str {
		&self.hook_id
	}

	#[instrument(skip(document))]
	fn render(&mut self, document: &Document) -> Result<(), MountError> {
		let section = self.create_root_element(document, "section", Some("cart"), &[])?;
		let total_output = element(document, "h2", None, Some(&total_text(self.context.cart().total())))?;
		let order_button = element(document, "button", None, Some("Order Now!"))?;
		append(&section, &total_output)?;
		append(&section, &order_button)?;

		self.context.attach_total_output(total_output);
		let context = self.context.clone();
		self.listeners.bind("order", &order_button, "click", move || {
			let order = context.order();
			trace!(items = order.items.len(), "Order button handled.");
		})
	}
}

/// One `li.product-item`, bound to its product.
#[derive(Debug)]
pub struct ProductItem {
	product: Product,
	hook_id: String,
	context: ShopContext,
	listeners: Listeners,
}
impl ProductItem {
	#[must_use]
	pub fn new(product: Product, hook_id: impl Into<String>, context: ShopContext) -> Self {
		Self {
			product,
			hook_id: hook_id.into(),
			context,
			listeners: Listeners::new(),
		}
	}

	#[must_use]
	pub fn product(&self) -> &Product {
		&self.product
	}
}
impl Component for ProductItem {
	fn hook_id(&self) -> &str {
		&self.hook_id
	}

	#[instrument(skip(self, document), fields(title = user_text(&self.product.title)))]
	fn render(&mut self, document: &Document) -> Result<(), MountError> {
		let item = self.create_root_element(document, "li", Some("product-item"), &[])?;
		let wrapper = element(document, "div", None, None)?;
		let image = element(document, "img", None, None)?;
		image.set_attribute("src", &self.product.image_url).map_err(|error| MountError::js(&error))?;
		image.set_attribute("alt", &self.product.title).map_err(|error| MountError::js(&error))?;
		let content = element(document, "div", Some("product-item__content"), None)?;
		let add_button = element(document, "button", None, Some("Add to Cart"))?;
		for child in &[
			element(document, "h2", None, Some(&self.product.title))?,
			element(document, "h3", None, Some(&self.product.price.to_string()))?,
			element(document, "p", None, Some(&self.product.description))?,
			add_button.clone(),
		] {
			append(&content, child)?;
		}
		append(&wrapper, &image)?;
		append(&wrapper, &content)?;
		append(&item, &wrapper)?;

		let context = self.context.clone();
		let product = self.product.clone();
		self.listeners.bind("add-to-cart", &add_button, "click", move || {
			let total = context.add_product_to_cart(product.clone());
			debug!(%total, "Cart total changed.");
		})
	}
}

/// `ul.product-list` plus its items.
#[derive(Debug)]
pub struct ProductList {
	hook_id: String,
	list_id: String,
	products: Vec<Product>,
	context: ShopContext,
	items: Vec<ProductItem>,
}
impl ProductList {
	#[must_use]
	pub fn new(hook_id: impl Into<String>, list_id: impl Into<String>, products: Vec<Product>, context: ShopContext) -> Self {
		Self {
			hook_id: hook_id.into(),
			list_id: list_id.into(),
			products,
			context,
			items: Vec::new(),
		}
	}

	#[must_use]
	pub fn items(&self) -> &[ProductItem] {
		&self.items
	}
}
impl Component for ProductList {
	fn hook_id(&self) -> &str {
		&self.hook_id
	}

	#[instrument(skip(self, document), fields(products = self.products.len()))]
	fn render(&mut self, document: &Document) -> Result<(), MountError> {
		self.create_root_element(document, "ul", Some("product-list"), &[ElementAttribute::new("id", &self.list_id)])?;
		self.items.clear();
		for product in &self.products {
			let item = ProductItem::new(product.clone(), self.list_id.clone(), self.context.clone()).rendered(document, true)?;
			self.items.push(item);
		}
		Ok(())
	}
}

/// The mounted shop.
#[derive(Debug)]
pub struct Shop {
	context: ShopContext,
	_cart: ShoppingCart,
	products: ProductList,
}
impl Shop {
	/// Renders the cart and [`default_products`] under `config.app`.
	///
	/// # Errors
	///
	/// Iff the mount point is missing or a DOM write fails.
	pub fn mount(document: &Document, config: &ShopConfig) -> Result<Self, MountError> {
		Self::mount_with(document, config, default_products())
	}

	/// Renders the cart and `products` under `config.app`.
	///
	/// # Errors
	///
	/// Iff the mount point is missing or a DOM write fails.
	#[instrument(skip(document, products))]
	pub fn mount_with(document: &Document, config: &ShopConfig, products: Vec<Product>) -> Result<Self, MountError> {
		let context = ShopContext::new();
		let cart = ShoppingCart::new(config.app.clone(), context.clone()).rendered(document, true)?;
		let products = ProductList::new(config.app.clone(), config.product_list.clone(), products, context.clone()).rendered(document, true)?;
		Ok(Self { context, _cart: cart, products })
	}

	#[must_use]
	pub fn context(&self) -> &ShopContext {
		&self.context
	}

	#[must_use]
	pub fn products(&self) -> &ProductList {
		&self.products
	}
}
