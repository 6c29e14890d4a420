use mount_drills::{
	calculator::{parse_operand, Calculator, LogEntry, Operation},
	InputError,
};

#[test]
fn starts_at_zero() {
	let calculator = Calculator::<f64>::new();
	assert_eq!(calculator.result(), 0.0);
	assert_eq!(calculator.description(), None);
	assert!(calculator.log().is_empty());
}

#[test]
fn running_total() {
	let calculator = Calculator::<f64>::new();
	let calculator = calculator.apply(Operation::Add, 10.0).unwrap();
	let calculator = calculator.apply(Operation::Multiply, 3.0).unwrap();
	let calculator = calculator.apply(Operation::Divide, 2.0).unwrap();
	let calculator = calculator.apply(Operation::Subtract, 1.0).unwrap();
	assert_eq!(calculator.result(), 14.0);
	assert_eq!(calculator.description(), Some("15 - 1"));
	assert_eq!(calculator.log().len(), 4);
	assert_eq!(
		calculator.log()[1],
		LogEntry {
			operation: Operation::Multiply,
			previous: 10.0,
			operand: 3.0,
			result: 30.0,
		}
	);
}

#[test]
fn integer_calculator() {
	let calculator = Calculator::<i64>::new().apply(Operation::Add, 7).unwrap();
	let calculator = calculator.apply(Operation::Divide, 2).unwrap();
	assert_eq!(calculator.result(), 3);
	assert_eq!(calculator.description(), Some("7 / 2"));
}

#[test]
fn operands() {
	assert_eq!(parse_operand::<f64>(" 12 "), Ok(12.0));
	assert_eq!(parse_operand::<i64>("-3"), Ok(-3));
	assert_eq!(parse_operand::<f64>("0"), Err(InputError::InvalidOperand));
	assert_eq!(parse_operand::<f64>(""), Err(InputError::InvalidOperand));
	assert_eq!(parse_operand::<i64>("abc"), Err(InputError::InvalidOperand));
	assert_eq!(parse_operand::<f64>("NaN"), Err(InputError::InvalidOperand));
	assert_eq!(parse_operand::<f64>("inf"), Err(InputError::InvalidOperand));
	assert_eq!(parse_operand::<f64>("-infinity"), Err(InputError::InvalidOperand));
	assert_eq!(parse_operand::<f64>("1e400"), Err(InputError::InvalidOperand));
	assert_eq!(parse_operand::<f64>("1e300"), Ok(1e300));
}

#[test]
fn non_finite_values_change_nothing() {
	let calculator = Calculator::<f64>::new().apply(Operation::Add, 1e300).unwrap();
	assert_eq!(calculator.apply(Operation::Add, f64::INFINITY), Err(InputError::InvalidOperand));
	assert_eq!(calculator.apply(Operation::Subtract, f64::NAN), Err(InputError::InvalidOperand));
	assert_eq!(calculator.apply(Operation::Multiply, 1e300), Err(InputError::InvalidOperand));
	assert_eq!(calculator.result(), 1e300);
	assert_eq!(calculator.log().len(), 1);
}

#[test]
fn zero_operand_changes_nothing() {
	let calculator = Calculator::<i64>::new().apply(Operation::Add, 5).unwrap();
	assert_eq!(calculator.apply(Operation::Divide, 0), Err(InputError::InvalidOperand));
	assert_eq!(calculator.result(), 5);
	assert_eq!(calculator.log().len(), 1);
}

#[test]
fn symbols() {
	assert_eq!(Operation::Add.symbol(), '+');
	assert_eq!(Operation::Subtract.symbol(), '-');
	assert_eq!(Operation::Multiply.symbol(), '*');
	assert_eq!(Operation::Divide.symbol(), '/');
	assert_eq!(Operation::Divide.to_string(), "DIVIDE");
}
