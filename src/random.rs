//! Random data for filling trees: lowercase strings of a chosen length and
//! uniformly drawn lengths to go with them.

use rand::Rng;

use crate::error::{TreeError, TreeResult};

/// Draws a number uniformly from `start..end`.
///
/// # Panics
///
/// Panics if the range is empty (`start >= end`).
pub fn random_number<R>(rng: &mut R, start: usize, end: usize) -> usize
where
    R: Rng + ?Sized,
{
    rng.random_range(start..end)
}

/// Draws a lowercase ASCII letter.
pub fn random_character<R>(rng: &mut R) -> char
where
    R: Rng + ?Sized,
{
    char::from(rng.random_range(b'a'..=b'z'))
}

/// Builds a string of exactly `length` random lowercase letters.
///
/// The buffer is reserved up front; if that fails a [`TreeError::Alloc`] for
/// the value is returned.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let value = ordtree::random::random_string(&mut rng, 12)?;
///
/// assert_eq!(value.len(), 12);
/// assert!(value.bytes().all(|b| b.is_ascii_lowercase()));
/// # Ok::<(), ordtree::TreeError>(())
/// ```
pub fn random_string<R>(rng: &mut R, length: usize) -> TreeResult<String>
where
    R: Rng + ?Sized,
{
    let mut value = String::new();
    value
        .try_reserve_exact(length)
        .map_err(|source| TreeError::alloc("value", source))?;
    value.extend((0..length).map(|_| random_character(&mut *rng)));
    Ok(value)
}
