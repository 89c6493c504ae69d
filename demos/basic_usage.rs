// ============================================================================
// Basic Usage Example
// ============================================================================

use digit_decimal::prelude::*;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    digit_decimal::logging::init();

    println!("=== Digit Decimal Example ===\n");

    // Exact arithmetic on strings
    println!("0.1 + 0.2      = {}", add("0.1", "0.2")?);
    println!("1.5e3 - 0.25   = {}", subtract("1.5e3", "0.25")?);
    println!("-12.5 * 0.08   = {}", multiply("-12.5", "0.08")?);
    println!("1 / 3 (cap 10) = {}", divide("1", "3", 10)?);

    let split = divide_with_remainder("10", "3", 4)?;
    println!(
        "10 / 3 (cap 4) = {} remainder {}",
        split.quotient, split.remainder
    );

    // Ordering is sign-aware
    println!("\ncompare(-5, -3) = {:?}", compare("-5", "-3")?);

    // Expressions
    println!("\n=== Expressions ===");
    for expression in ["1+2*3", "(1+2)*3", "-2--3", "10/3*3", "2*-(1.5+0.5)"] {
        println!("{expression:<14} = {}", evaluate(expression, DEFAULT_MAX_DECIMAL_LENGTH)?);
    }

    for expression in ["1+(2*3", "1()2", "1/0"] {
        match evaluate(expression, DEFAULT_MAX_DECIMAL_LENGTH) {
            Ok(value) => println!("{expression:<14} = {value}"),
            Err(e) => println!("{expression:<14} ! {e}"),
        }
    }

    // A configured calculator with a logging observer
    println!("\n=== Calculator ===");
    let calc = CalculatorBuilder::financial()
        .max_decimal_length(6)
        .build(Arc::new(LoggingObserver))?;

    println!("evaluate 100/7           = {}", calc.evaluate("100/7")?);
    println!("evaluate_formatted 1e6/3 = {}", calc.evaluate_formatted("1000000/3")?);
    println!("format_money 2500000     = {}", calc.format_money("2500000")?);
    println!("format_money 7300000000  = {}", calc.format_money("7300000000")?);

    // Typed values
    println!("\n=== ExactDecimal ===");
    let prices: Vec<ExactDecimal> = ["19.99", "5.01", "0.10"]
        .iter()
        .map(|s| s.parse())
        .collect::<Result<_, _>>()?;
    let total: ExactDecimal = prices.iter().cloned().sum();
    println!("total       = {total}");
    println!("total / 3   = {}", total.checked_div(&ExactDecimal::from(3i64), 4)?);
    println!("as Decimal  = {}", total.to_decimal()?);

    Ok(())
}
