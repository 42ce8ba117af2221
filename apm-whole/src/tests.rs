use super::*;
use quickcheck_macros::quickcheck;

fn w(n: u64) -> WholeNumber {
    WholeNumber::from_word(n)
}

#[test]
fn zero_is_not_nonzero() {
    assert!(!WholeNumber::zero().is_nonzero());
}

#[test]
fn addition_carries_across_words() {
    let r = w(Word::MAX).add(&w(1));
    assert_eq!(r.word(0), 0);
    assert_eq!(r.word(1), 1);
}

#[test]
fn subtraction_saturates_to_zero() {
    assert!(!w(1).sub(&w(5)).is_nonzero());
}

#[test]
fn multiplication_matches_native_u64() {
    let r = w(123_456).mul(&w(987));
    assert_eq!(r.word(0), 123_456u64 * 987);
}

#[test]
fn pow_matches_repeated_multiplication() {
    assert_eq!(w(3).pow(5), w(243));
    assert_eq!(w(10).pow(0), w(1));
}

#[test]
fn div_rem_satisfies_division_identity() {
    let a = w(1_000_000_007);
    let b = w(97);
    let (q, r) = a.div_rem(&b);
    assert_eq!(q.mul(&b).add(&r), a);
    assert!(r < b);
}

#[test]
fn div_rem_by_zero_yields_zero_quotient_and_original_remainder() {
    let a = w(42);
    let (q, r) = a.div_rem(&WholeNumber::zero());
    assert!(!q.is_nonzero());
    assert_eq!(r, a);
}

#[test]
fn div_rem_general_path_with_multi_word_divisor() {
    let a = WholeNumber::from_str_radix("340282366920938463463374607431768211456", 10).unwrap(); // 2^128
    let b = WholeNumber::from_str_radix("18446744073709551617", 10).unwrap(); // 2^64 + 1
    let (q, r) = a.div_rem(&b);
    assert_eq!(q.mul(&b).add(&r), a);
    assert!(r < b);
}

#[test]
fn sqrt_is_exact_for_perfect_squares() {
    assert_eq!(w(144).sqrt(), w(12));
    assert_eq!(w(0).sqrt(), w(0));
}

#[test]
fn sqrt_rounds_down_for_non_squares() {
    assert_eq!(w(10).sqrt(), w(3));
    assert_eq!(w(99).sqrt(), w(9));
}

#[test]
fn root_matches_sqrt_for_n_equal_two() {
    assert_eq!(w(100).root(2), w(10));
}

#[test]
fn root_of_cube() {
    assert_eq!(w(27).root(3), w(3));
    assert_eq!(w(28).root(3), w(3));
}

#[test]
fn gcd_of_coprime_numbers_is_one() {
    assert_eq!(w(17).gcd(&w(13)), w(1));
    assert_eq!(w(48).gcd(&w(18)), w(6));
}

#[test]
fn lcm_matches_gcd_identity() {
    assert_eq!(w(4).lcm(&w(6)), w(12));
    assert_eq!(w(4).gcd(&w(6)).mul(&w(4).lcm(&w(6))), w(4).mul(&w(6)));
    assert!(!w(0).lcm(&w(5)).is_nonzero());
}

#[test]
fn from_str_radix_strict_rejects_bad_digit() {
    assert!(matches!(
        WholeNumber::from_str_radix("12x", 10),
        Err(WholeParseError::InvalidDigit { digit: 'x', base: 10 })
    ));
}

#[test]
fn from_str_radix_skips_commas_and_whitespace() {
    assert_eq!(WholeNumber::from_str_radix("1,000, 000", 10).unwrap(), w(1_000_000));
}

#[test]
fn from_str_radix_rejects_unsupported_base() {
    assert!(matches!(
        WholeNumber::from_str_radix("1", 7),
        Err(WholeParseError::UnsupportedRadix(7))
    ));
}

#[test]
fn to_string_radix_groups_base_ten_by_threes() {
    assert_eq!(w(1_234_567).to_string_radix(10), "1,234,567");
    assert_eq!(w(255).to_string_radix(16), "0xff");
    assert_eq!(w(8).to_string_radix(2), "0b1000");
}

#[test]
fn to_string_radix_zero_is_literal_zero() {
    assert_eq!(WholeNumber::zero().to_string_radix(10), "0");
}

#[quickcheck]
fn qc_add_commutes(a: u32, b: u32) -> bool {
    w(a as u64).add(&w(b as u64)) == w(b as u64).add(&w(a as u64))
}

#[quickcheck]
fn qc_mul_matches_u64(a: u32, b: u32) -> bool {
    w(a as u64).mul(&w(b as u64)).word(0) == a as u64 * b as u64
}

#[quickcheck]
fn qc_div_rem_identity(a: u32, b: u32) -> bool {
    if b == 0 {
        return true;
    }
    let (q, r) = w(a as u64).div_rem(&w(b as u64));
    q.mul(&w(b as u64)).add(&r) == w(a as u64)
}

#[quickcheck]
fn qc_sqrt_is_floor_of_real_root(n: u32) -> bool {
    let r = w(n as u64).sqrt();
    let next = r.add(&w(1));
    r.mul(&r) <= w(n as u64) && next.mul(&next) > w(n as u64)
}

#[quickcheck]
fn qc_gcd_lcm_product(a: u16, b: u16) -> bool {
    if a == 0 || b == 0 {
        return true;
    }
    let (a, b) = (w(a as u64), w(b as u64));
    a.gcd(&b).mul(&a.lcm(&b)) == a.mul(&b)
}

#[quickcheck]
fn qc_string_round_trips(n: u32) -> bool {
    let v = w(n as u64);
    WholeNumber::from_str_radix(&v.to_string_radix(10).replace(',', ""), 10).unwrap() == v
}
