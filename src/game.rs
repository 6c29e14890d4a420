//! Rock, paper, scissors against the computer.

use crate::InputError;
use core::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
	Rock,
	Paper,
	Scissors,
}
impl Choice {
	pub const DEFAULT: Self = Self::Rock;

	/// Maps a uniform sample from `[0, 1)` onto a choice.
	#[must_use]
	pub fn for_computer(random: f64) -> Self {
		if random < 0.34 {
			Self::Rock
		} else if random < 0.67 {
			Self::Paper
		} else {
			Self::Scissors
		}
	}

	/// The choice this one wins against.
	#[must_use]
	pub fn beats(self) -> Self {
		match self {
			Self::Rock => Self::Scissors,
			Self::Paper => Self::Rock,
			Self::Scissors => Self::Paper,
		}
	}
}
impl Display for Choice {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Rock => "ROCK",
			Self::Paper => "PAPER",
			Self::Scissors => "SCISSORS",
		})
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownChoice;
impl FromStr for Choice {
	type Err = UnknownChoice;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_uppercase().as_str() {
			"ROCK" => Ok(Self::Rock),
			"PAPER" => Ok(Self::Paper),
			"SCISSORS" => Ok(Self::Scissors),
			_ => Err(UnknownChoice),
		}
	}
}

/// The player's resolved choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerPick {
	pub choice: Choice,
	/// Set iff the input was missing or invalid and [`Choice::DEFAULT`] was used instead.
	pub defaulted: bool,
}
impl PlayerPick {
	#[must_use]
	pub fn resolve(input: Option<&str>) -> Self {
		match input.map(str::parse::<Choice>) {
			Some(Ok(choice)) => Self { choice, defaulted: false },
			_ => Self {
				choice: Choice::DEFAULT,
				defaulted: true,
			},
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Draw,
	PlayerWins,
	ComputerWins,
}
impl Outcome {
	#[must_use]
	pub fn decide(computer: Choice, player: Choice) -> Self {
		if computer == player {
			Self::Draw
		} else if player.beats() == computer {
			Self::PlayerWins
		} else {
			Self::ComputerWins
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
	pub player: PlayerPick,
	pub computer: Choice,
	pub outcome: Outcome,
}
impl Round {
	#[must_use]
	pub fn message(&self) -> String {
		let ending = match self.outcome {
			Outcome::Draw => "had a draw",
			Outcome::PlayerWins => "won.",
			Outcome::ComputerWins => "lost.",
		};
		format!(
			"You picked up {}, computer picked up {}, therefore you {}",
			self.player.choice, self.computer, ending
		)
	}
}

/// Guards against overlapping rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Game {
	running: bool,
}
impl Game {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn is_running(self) -> bool {
		self.running
	}

	/// # Errors
	///
	/// [`InputError::RoundInProgress`] iff a round was started but not finished.
	pub fn start(self) -> Result<Self, InputError> {
		if self.running {
			Err(InputError::RoundInProgress)
		} else {
			Ok(Self { running: true })
		}
	}

	/// Plays a started round and returns to idle.
	#[must_use]
	pub fn finish(self, player: PlayerPick, random: f64) -> (Self, Round) {
		let computer = Choice::for_computer(random);
		let round = Round {
			player,
			computer,
			outcome: Outcome::decide(computer, player.choice),
		};
		(Self { running: false }, round)
	}
}
