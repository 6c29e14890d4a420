#![doc(html_root_url = "https://docs.rs/mount-drills/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Small browser exercises built as a pure state-transition core plus a thin [`web_sys`] adapter.
//!
//! Each project keeps its state in a plain value ([`cart::Cart`], [`catalog::Catalog`], [`search::SearchList`],
//! [`game::Game`], [`calculator::Calculator`]) that is advanced by a pure function and can be tested without a browser.
//! The [`dom`] module mounts those states into a host document and applies their effects as minimal DOM writes.

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod calculator;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod dom;
pub mod error;
pub mod game;
pub mod logging;
pub mod record;
pub mod search;

pub use error::{InputError, MountError};
pub use logging::init_logging;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

/// Mounts the shop under the default mount identifiers and keeps it alive for the page session.
///
/// # Errors
///
/// Iff the host document lacks one of the [`config::ShopConfig`] mount points.
#[wasm_bindgen]
pub fn start_shop() -> Result<(), JsValue> {
	init_logging();
	let shop = dom::shop::Shop::mount(&dom::document()?, &config::ShopConfig::default())?;
	core::mem::forget(shop);
	Ok(())
}

/// Mounts the movie archive under the default mount identifiers.
///
/// # Errors
///
/// Iff the host document lacks one of the [`config::ArchiveConfig`] elements.
#[wasm_bindgen]
pub fn start_archive() -> Result<(), JsValue> {
	init_logging();
	let archive = dom::archive::Archive::mount(&dom::document()?, &config::ArchiveConfig::default())?;
	core::mem::forget(archive);
	Ok(())
}

/// Mounts the movie search list under the default mount identifiers.
///
/// # Errors
///
/// Iff the host document lacks one of the [`config::SearchConfig`] elements.
#[wasm_bindgen]
pub fn start_search() -> Result<(), JsValue> {
	init_logging();
	let search = dom::search::Search::mount(&dom::document()?, &config::SearchConfig::default())?;
	core::mem::forget(search);
	Ok(())
}

/// Binds the rock-paper-scissors start button.
///
/// # Errors
///
/// Iff the host document lacks the [`config::GameConfig`] start button.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
	init_logging();
	let game = dom::game::GameView::mount(&dom::document()?, &config::GameConfig::default())?;
	core::mem::forget(game);
	Ok(())
}

/// Binds the calculator buttons and outputs.
///
/// # Errors
///
/// Iff the host document lacks one of the [`config::CalculatorConfig`] elements.
#[wasm_bindgen]
pub fn start_calculator() -> Result<(), JsValue> {
	init_logging();
	let calculator = dom::calculator::CalculatorView::mount(&dom::document()?, &config::CalculatorConfig::default())?;
	core::mem::forget(calculator);
	Ok(())
}
