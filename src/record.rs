//! Records: the immutable data items the projects display.

use crate::InputError;
use core::{
	convert::TryFrom,
	fmt::{self, Display, Formatter},
	iter::Sum,
	ops::Add,
};
use std::collections::BTreeMap;

/// A non-negative amount of money in whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);
impl Price {
	pub const ZERO: Self = Self(0);

	#[must_use]
	pub const fn from_cents(cents: u64) -> Self {
		Self(cents)
	}

	#[must_use]
	pub const fn cents(self) -> u64 {
		self.0
	}
}
impl Add for Price {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		Self(self.0.saturating_add(rhs.0))
	}
}
impl Sum for Price {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, Add::add)
	}
}
impl<'a> Sum<&'a Price> for Price {
	fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.copied().sum()
	}
}
impl Display for Price {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
	}
}

/// A shop product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
	pub title: String,
	pub image_url: String,
	pub description: String,
	pub price: Price,
}
impl Product {
	#[must_use]
	pub fn new(title: impl Into<String>, image_url: impl Into<String>, description: impl Into<String>, price: Price) -> Self {
		Self {
			title: title.into(),
			image_url: image_url.into(),
			description: description.into(),
			price,
		}
	}
}

/// Identifies a movie within the list that allocated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MovieId(pub(crate) u64);
impl Display for MovieId {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "movie-{}", self.0)
	}
}

/// Whole stars in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);
impl Rating {
	pub const MIN: u8 = 1;
	pub const MAX: u8 = 5;

	/// # Errors
	///
	/// Iff `stars` is outside of `1..=5`.
	pub fn new(stars: i64) -> Result<Self, InputError> {
		match u8::try_from(stars) {
			Ok(stars) if (Self::MIN..=Self::MAX).contains(&stars) => Ok(Self(stars)),
			_ => Err(InputError::RatingOutOfRange { value: stars }),
		}
	}

	/// Parses user input such as `" 4 "`.
	///
	/// # Errors
	///
	/// [`InputError::EmptyField`] for blank input, [`InputError::NotANumber`] if it isn't an integer
	/// and [`InputError::RatingOutOfRange`] outside of `1..=5`.
	pub fn parse(text: &str) -> Result<Self, InputError> {
		let text = text.trim();
		if text.is_empty() {
			return Err(InputError::EmptyField { field: "rating" });
		}
		let stars = text.parse::<i64>().map_err(|_| InputError::NotANumber { field: "rating" })?;
		Self::new(stars)
	}

	#[must_use]
	pub const fn stars(self) -> u8 {
		self.0
	}
}
impl Display for Rating {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{} stars", self.0, Self::MAX)
	}
}

/// An archived movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
	pub id: MovieId,
	pub title: String,
	pub image_url: String,
	pub rating: Rating,
}

/// A searchable movie: a title plus free-form extra fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedMovie {
	pub id: MovieId,
	pub title: String,
	pub extras: BTreeMap<String, String>,
}
impl TaggedMovie {
	/// The name reserved for the fixed title field.
	pub const TITLE_FIELD: &'static str = "title";

	/// Formats the movie as list line, e.g. `"Alien - director: Ridley Scott"`.
	#[must_use]
	pub fn describe(&self) -> String {
		let extras = self.extras.iter().map(|(key, value)| format!("{}: {}", key, value)).collect::<Vec<_>>();
		format!("{} - {}", self.title, extras.join(", "))
	}
}

/// Checks that a required text field isn't blank and returns it trimmed.
pub(crate) fn required<'a>(field: &'static str, text: &'a str) -> Result<&'a str, InputError> {
	match text.trim() {
		"" => Err(InputError::EmptyField { field }),
		trimmed => Ok(trimmed),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn price_display() {
		assert_eq!(Price::from_cents(1999).to_string(), "$19.99");
		assert_eq!(Price::from_cents(5).to_string(), "$0.05");
		assert_eq!(Price::ZERO.to_string(), "$0.00");
	}

	#[test]
	fn rating_bounds() {
		assert_eq!(Rating::parse(" 5 ").map(Rating::stars), Ok(5));
		assert_eq!(Rating::parse("1").map(Rating::stars), Ok(1));
		assert_eq!(Rating::parse("6"), Err(InputError::RatingOutOfRange { value: 6 }));
		assert_eq!(Rating::parse("0"), Err(InputError::RatingOutOfRange { value: 0 }));
		assert_eq!(Rating::parse("four"), Err(InputError::NotANumber { field: "rating" }));
		assert_eq!(Rating::parse("  "), Err(InputError::EmptyField { field: "rating" }));
	}

	#[test]
	fn describe_joins_extras() {
		let mut extras = BTreeMap::new();
		extras.insert("year".to_owned(), "1979".to_owned());
		extras.insert("director".to_owned(), "Ridley Scott".to_owned());
		let movie = TaggedMovie { id: MovieId(0), title: "Alien".to_owned(), extras };
		assert_eq!(movie.describe(), "Alien - director: Ridley Scott, year: 1979");
	}
}
