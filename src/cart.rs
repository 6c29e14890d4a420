//! The shop's stateful container.

use crate::{
	logging::user_text,
	record::{Price, Product},
};
use std::rc::Rc;
use tracing::{info, trace};

/// An ordered, immutable-snapshot list of products and their derived total.
///
/// The item list is the single source of truth: the total is never stored.
#[derive(Debug, Clone)]
pub struct Cart {
	items: Rc<[Product]>,
}
impl Default for Cart {
	fn default() -> Self {
		Self::new()
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
	AddProduct(Product),
	Order,
}

/// What the view has to do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEffect {
	/// Rewrite the total display, and nothing else.
	RedrawTotal(Price),
	/// Hand the order to the order-submission boundary.
	Submit(Order),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
	pub items: Rc<[Product]>,
	pub total: Price,
}
impl Order {
	/// Logs the order. This is where an order-submission service would be called.
	pub fn submit(&self) {
		info!(items = self.items.len(), total = %self.total, "Ordering...");
		for item in self.items.iter() {
			info!(title = user_text(&item.title), price = %item.price, "Ordered item.");
		}
	}
}

impl Cart {
	#[must_use]
	pub fn new() -> Self {
		Self { items: Rc::from(Vec::new()) }
	}

	/// The current snapshot. It is never modified by later transitions.
	#[must_use]
	pub fn items(&self) -> Rc<[Product]> {
		self.items.clone()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Sums the item prices. Recomputed on every call.
	#[must_use]
	pub fn total(&self) -> Price {
		self.items.iter().map(|item| item.price).sum()
	}

	#[must_use]
	pub fn reduce(&self, action: CartAction) -> (Self, CartEffect) {
		match action {
			CartAction::AddProduct(product) => {
				trace!(title = user_text(&product.title), price = %product.price, "Adding product.");
				let mut items = Vec::with_capacity(self.items.len() + 1);
				items.extend(self.items.iter().cloned());
				items.push(product);
				let next = Self { items: items.into() };
				let total = next.total();
				(next, CartEffect::RedrawTotal(total))
			}
			CartAction::Order => {
				let order = Order {
					items: self.items(),
					total: self.total(),
				};
				(self.clone(), CartEffect::Submit(order))
			}
		}
	}

	/// Appends `product` and returns the new total.
	pub fn add_item(&mut self, product: Product) -> Price {
		let (next, effect) = self.reduce(CartAction::AddProduct(product));
		*self = next;
		match effect {
			CartEffect::RedrawTotal(total) => total,
			CartEffect::Submit(order) => order.total,
		}
	}
}

/// The products the shop offers.
#[must_use]
pub fn default_products() -> Vec<Product> {
	vec![
		Product::new(
			"A Pillow",
			"https://b3h2.scene7.com/is/image/BedBathandBeyond/15364655025932m?$690$&wid=690&hei=690",
			"A soft pillow",
			Price::from_cents(1999),
		),
		Product::new(
			"A Carpet",
			"https://www.cpersia.com/16140-thickbox_default/birjand-carpet-ref-174132.jpg",
			"A carpet which you might like - or not",
			Price::from_cents(8999),
		),
	]
}
