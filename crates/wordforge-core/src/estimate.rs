use crate::error::{Error, Result};

/// Exact number of strings an exhaustive enumeration produces:
/// `sum(alphabet_size^i for i in 1..=max_length)`.
///
/// Checked 128-bit arithmetic; a sum that does not fit is reported as
/// [`Error::Overflow`] instead of wrapping.
pub fn estimate(alphabet_size: usize, max_length: usize) -> Result<u128> {
    if max_length < 1 {
        return Err(Error::InvalidLength(max_length));
    }

    let overflow = || Error::Overflow {
        alphabet_size,
        max_length,
    };

    let base = alphabet_size as u128;
    // Every power of 0 or 1 is itself.
    if base <= 1 {
        return Ok(base * max_length as u128);
    }

    let mut power: u128 = 1;
    let mut total: u128 = 0;
    for _ in 0..max_length {
        power = power.checked_mul(base).ok_or_else(overflow)?;
        total = total.checked_add(power).ok_or_else(overflow)?;
    }
    Ok(total)
}

/// Number of strings of exactly `length` characters, `alphabet_size^length`.
///
/// `None` when it does not fit in 128 bits.
pub fn tier_size(alphabet_size: usize, length: usize) -> Option<u128> {
    let exp = u32::try_from(length).ok()?;
    (alphabet_size as u128).checked_pow(exp)
}
