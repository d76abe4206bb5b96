//! Parsing two integers with a single boundary.
//!
//! Run with: cargo run --example atoi_sum

use std::num::ParseIntError;

use errless::prelude::*;

fn sum(a: &str, b: &str) -> WrappedResult<i32, ParseIntError> {
    boundary::handle(empty_handler, || {
        let x = try_result(a.parse::<i32>()).check()?;
        let y = try_result(b.parse::<i32>()).check()?;
        Ok(x + y)
    })
}

fn sum_with_message(a: &str, b: &str) -> WrappedResult<i32, ParseIntError> {
    boundary::handle(empty_handler, || {
        let x = a.parse::<i32>().attempt().err_message("cannot convert to int")?;
        let y = b.parse::<i32>().attempt().err_message("cannot convert to int")?;
        Ok(x + y)
    })
}

fn main() {
    match sum("10", "20") {
        Ok(res) => println!("result: {res}"),
        Err(err) => eprintln!("error occurred: {err}"),
    }

    match sum_with_message("10", "20t") {
        Ok(res) => println!("result: {res}"),
        Err(err) => eprintln!("error occurred:\n{err:#}"),
    }
}
