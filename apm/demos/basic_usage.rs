//! Console driver for the APM numeric stack. Prints a handful of the
//! worked examples from spec.md §8 so the workspace has a runnable
//! entry point; it contains no logic beyond formatting output.

use apm::prelude::*;

fn main() {
    DecimalContext::configure(100);

    let a = Decimal::parse(
        "1234567890987654321123456789098765432112345678909876543211234567890987654321",
    );
    let b = Decimal::parse("0.125");
    println!("a + b = {}", a.add(&b));
    println!("a * b = {}", a.mul(&b));
    println!("a / b = {}", a.div(&b));

    let third = Decimal::parse("1/3");
    println!("1/3 + 1/3 + 1/3 = {}", third.add(&third).add(&third));

    println!("pi * 2 = {}", Decimal::pi().mul(&Decimal::from_i64(2)));

    println!("0x10 = {}", Integer::from_str_radix("10", 16).unwrap());
    println!("0b1010 = {}", Integer::from_str_radix("1010", 2).unwrap());
    println!("0o17 = {}", Integer::from_str_radix("17", 8).unwrap());

    let neg_five = Integer::from_i64(-5);
    let three = Integer::from_i64(3);
    println!("(-5) mod 3 = {}", neg_five.rem(&three));
    println!("5 / 0 = {}", Integer::from_i64(5).div_rem(&Integer::from_i64(0)).0);
}
