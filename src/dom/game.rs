use super::{alert, by_id, listeners::Listeners};
use crate::{
	config::GameConfig,
	game::{Choice, Game, PlayerPick, Round},
	logging::user_text,
	InputError, MountError,
};
use std::{cell::Cell, rc::Rc};
use tracing::{info, instrument, warn};
use web_sys::Document;

/// The start button of the rock-paper-scissors page.
#[derive(Debug)]
pub struct GameView {
	game: Rc<Cell<Game>>,
	_listeners: Listeners,
}
impl GameView {
	/// # Errors
	///
	/// Iff the [`GameConfig::start_button`] is missing.
	#[instrument(skip(document))]
	pub fn mount(document: &Document, config: &GameConfig) -> Result<Self, MountError> {
		let start_button = by_id(document, &config.start_button)?;
		let game = Rc::new(Cell::new(Game::new()));
		let mut listeners = Listeners::new();
		let click_game = game.clone();
		listeners.bind("start", &start_button, "click", move || {
			let input = prompt(&format!("{}, {} or {}?", Choice::Rock, Choice::Paper, Choice::Scissors));
			match play(&click_game, input.as_deref(), js_sys::Math::random()) {
				Ok(round) => alert(&round.message()),
				Err(error) => warn!(%error, "Ignored start click."),
			}
		})?;
		Ok(Self { game, _listeners: listeners })
	}

	#[must_use]
	pub fn game(&self) -> Game {
		self.game.get()
	}
}

/// Plays one round with the player's raw `input` and a computer sample `random` from `[0, 1)`.
///
/// # Errors
///
/// [`InputError::RoundInProgress`] iff another round is running.
pub fn play(game: &Cell<Game>, input: Option<&str>, random: f64) -> Result<Round, InputError> {
	let started = game.get().start()?;
	game.set(started);
	info!("Game is starting...");

	let pick = PlayerPick::resolve(input);
	if pick.defaulted {
		warn!(input = ?input.map(user_text), "Invalid choice.");
		alert(&format!("Invalid choice! We chose {} for you", Choice::DEFAULT));
	}
	let (finished, round) = started.finish(pick, random);
	game.set(finished);
	info!(player = %round.player.choice, computer = %round.computer, outcome = ?round.outcome, "Round finished.");
	Ok(round)
}

fn prompt(message: &str) -> Option<String> {
	let window = web_sys::window()?;
	match window.prompt_with_message_and_default(message, "") {
		Ok(answer) => answer,
		Err(error) => {
			warn!(error = ?error, "Prompt failed.");
			None
		}
	}
}
