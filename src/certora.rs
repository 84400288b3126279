use crate::{add, checked_add, saturating_add};

use cvlr::prelude::*;

/// Verifies that `add` computes the exact sum whenever it fits in `i32`.
#[rule]
pub fn rule_add_is_correct() {
    let x: i32 = nondet();
    let y: i32 = nondet();
    let wide = x as i64 + y as i64;
    cvlr_assume!(wide >= i32::MIN as i64 && wide <= i32::MAX as i64);
    cvlr_assert_eq!(add(x, y) as i64, wide);
}

#[rule]
pub fn rule_add_is_commutative() {
    let x: i32 = nondet();
    let y: i32 = nondet();
    cvlr_assert_eq!(add(x, y), add(y, x));
}

#[rule]
pub fn rule_zero_is_identity() {
    let x: i32 = nondet();
    cvlr_assert_eq!(add(x, 0), x);
}

/// A successful `checked_add` agrees with the wrapping sum.
#[rule]
pub fn rule_checked_add_agrees() {
    let x: i32 = nondet();
    let y: i32 = nondet();
    if let Ok(sum) = checked_add(x, y) {
        cvlr_assert_eq!(sum, add(x, y));
    }
}

#[rule]
pub fn rule_saturating_add_is_clamped() {
    let x: i32 = nondet();
    let y: i32 = nondet();
    let wide = x as i64 + y as i64;
    let sum = saturating_add(x, y) as i64;
    cvlr_assert!(sum == wide.clamp(i32::MIN as i64, i32::MAX as i64));
}
