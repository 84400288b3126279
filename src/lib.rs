#[cfg(feature = "certora")]
mod certora;
mod error;
mod policy;

pub use error::{Error, Result};
pub use policy::OverflowPolicy;

/// Adds two numbers together.
/// Returns the sum of left and right, wrapping on overflow. Never panics.
pub fn add(left: i32, right: i32) -> i32 {
    left.wrapping_add(right)
}

/// Adds two numbers, reporting [`Error::Overflow`] if the sum does not fit in `i32`.
pub fn checked_add(left: i32, right: i32) -> Result<i32> {
    left.checked_add(right).ok_or_else(|| {
        log::debug!("overflow adding {left} and {right}");
        Error::Overflow { left, right }
    })
}

/// Adds two numbers, clamping the result to `i32::MIN..=i32::MAX`.
pub fn saturating_add(left: i32, right: i32) -> i32 {
    left.saturating_add(right)
}

/// Adds two numbers under the given overflow policy.
///
/// Only [`OverflowPolicy::Checked`] can fail.
pub fn add_with(policy: OverflowPolicy, left: i32, right: i32) -> Result<i32> {
    log::trace!("add {left} + {right} ({policy})");
    match policy {
        OverflowPolicy::Wrapping => Ok(add(left, right)),
        OverflowPolicy::Saturating => Ok(saturating_add(left, right)),
        OverflowPolicy::Checked => checked_add(left, right),
    }
}
