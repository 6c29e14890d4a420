use super::{by_id, input_by_id, listeners::Listeners};
use crate::{
	calculator::{parse_operand, Calculator, Operation},
	config::CalculatorConfig,
	InputError, MountError,
};
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, instrument, warn};
use web_sys::{Document, Element, HtmlInputElement};

#[derive(Debug)]
pub struct CalculatorView {
	shared: Rc<Shared>,
	_listeners: Listeners,
}

#[derive(Debug)]
struct Shared {
	calculator: RefCell<Calculator<f64>>,
	input: HtmlInputElement,
	current_result: Element,
	current_calculation: Element,
}

impl CalculatorView {
	/// # Errors
	///
	/// Iff one of the [`CalculatorConfig`] elements is missing.
	#[instrument(skip(document))]
	pub fn mount(document: &Document, config: &CalculatorConfig) -> Result<Self, MountError> {
		let shared = Rc::new(Shared {
			calculator: RefCell::new(Calculator::new()),
			input: input_by_id(document, &config.input)?,
			current_result: by_id(document, &config.current_result)?,
			current_calculation: by_id(document, &config.current_calculation)?,
		});

		let mut listeners = Listeners::new();
		for &(key, button, operation) in &[
			("add", &config.add_button, Operation::Add),
			("subtract", &config.subtract_button, Operation::Subtract),
			("multiply", &config.multiply_button, Operation::Multiply),
			("divide", &config.divide_button, Operation::Divide),
		] {
			let button = by_id(document, button)?;
			let shared = shared.clone();
			listeners.bind(key, &button, "click", move || {
				if let Err(error) = shared.calculate(operation) {
					warn!(%error, %operation, "Calculation skipped.");
				}
			})?;
		}

		shared.output();
		Ok(Self { shared, _listeners: listeners })
	}

	#[must_use]
	pub fn calculator(&self) -> Calculator<f64> {
		self.shared.calculator.borrow().clone()
	}

	/// Applies `operation` with the number currently entered.
	///
	/// # Errors
	///
	/// Iff the entered number is invalid or zero.
	pub fn calculate(&self, operation: Operation) -> Result<(), InputError> {
		self.shared.calculate(operation)
	}
}

impl Shared {
	fn calculate(&self, operation: Operation) -> Result<(), InputError> {
		let operand = parse_operand::<f64>(&self.input.value())?;
		let next = self.calculator.borrow().apply(operation, operand)?;
		debug!(log_entries = next.log().len(), "Logged calculation.");
		*self.calculator.borrow_mut() = next;
		self.output();
		Ok(())
	}

	fn output(&self) {
		let calculator = self.calculator.borrow();
		self.current_result.set_text_content(Some(&calculator.result().to_string()));
		self.current_calculation.set_text_content(calculator.description());
	}
}
