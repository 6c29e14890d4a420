//! A running total with an operation log.

use crate::InputError;
use core::fmt::{self, Display, Formatter};
use num_traits::Num;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
	Add,
	Subtract,
	Multiply,
	Divide,
}
impl Operation {
	#[must_use]
	pub fn symbol(self) -> char {
		match self {
			Self::Add => '+',
			Self::Subtract => '-',
			Self::Multiply => '*',
			Self::Divide => '/',
		}
	}

	fn apply<N: Num>(self, lhs: N, rhs: N) -> N {
		match self {
			Self::Add => lhs + rhs,
			Self::Subtract => lhs - rhs,
			Self::Multiply => lhs * rhs,
			Self::Divide => lhs / rhs,
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Add => "ADD",
			Self::Subtract => "SUBTRACT",
			Self::Multiply => "MULTIPLY",
			Self::Divide => "DIVIDE",
		})
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogEntry<N> {
	pub operation: Operation,
	pub previous: N,
	pub operand: N,
	pub result: N,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator<N> {
	result: N,
	description: Option<String>,
	log: Vec<LogEntry<N>>,
}
impl<N: Num + Copy + Display> Default for Calculator<N> {
	fn default() -> Self {
		Self::new()
	}
}

/// Parses a base-10 operand. Zero, `NaN` and infinities are rejected like unparsable input.
///
/// # Errors
///
/// [`InputError::InvalidOperand`] iff `text` isn't a finite non-zero number.
pub fn parse_operand<N: Num + Copy>(text: &str) -> Result<N, InputError> {
	match N::from_str_radix(text.trim(), 10) {
		Ok(operand) if !operand.is_zero() && is_finite(operand) => Ok(operand),
		_ => Err(InputError::InvalidOperand),
	}
}

/// `x - x` is zero for every integer and every finite float, but `NaN` for `NaN` and infinities.
fn is_finite<N: Num + Copy>(value: N) -> bool {
	(value - value).is_zero()
}

impl<N: Num + Copy + Display> Calculator<N> {
	#[must_use]
	pub fn new() -> Self {
		Self {
			result: N::zero(),
			description: None,
			log: Vec::new(),
		}
	}

	#[must_use]
	pub fn result(&self) -> N {
		self.result
	}

	/// The last calculation, e.g. `"0 + 10"`.
	#[must_use]
	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	#[must_use]
	pub fn log(&self) -> &[LogEntry<N>] {
		&self.log
	}

	/// # Errors
	///
	/// [`InputError::InvalidOperand`] iff `operand` is zero or not finite, or the result would overflow
	/// to infinity. The calculator is unchanged in that case.
	pub fn apply(&self, operation: Operation, operand: N) -> Result<Self, InputError> {
		if operand.is_zero() || !is_finite(operand) {
			return Err(InputError::InvalidOperand);
		}
		let previous = self.result;
		let result = operation.apply(previous, operand);
		if !is_finite(result) {
			return Err(InputError::InvalidOperand);
		}
		let entry = LogEntry {
			operation,
			previous,
			operand,
			result,
		};
		debug!(%operation, %previous, %operand, %result, "Calculated.");

		let mut log = self.log.clone();
		log.push(entry);
		Ok(Self {
			result,
			description: Some(format!("{} {} {}", previous, operation.symbol(), operand)),
			log,
		})
	}
}
