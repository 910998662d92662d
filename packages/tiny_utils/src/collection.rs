//! Endless iteration over a collection, in order or at random, and random picking.

use std::iter::FusedIterator;

use rand::Rng;
use rand::seq::{IndexedRandom, IteratorRandom};

use crate::{Error, Result};

/// Cycles through `items` in their original order, forever.
///
/// An empty input produces an empty iterator.
///
/// ```rust
/// let letters: Vec<_> = tiny_utils::circular(["A", "B", "C"]).take(7).collect();
///
/// assert_eq!(letters, ["A", "B", "C", "A", "B", "C", "A"]);
/// ```
pub fn circular<I>(items: I) -> Circular<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Circular {
        items: items.into_iter().collect(),
        position: 0,
    }
}

/// Yields uniformly random elements of `items` forever, drawing each one independently (with
/// replacement).
///
/// An empty input produces an empty iterator.
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let rng = StdRng::seed_from_u64(7);
///
/// for letter in tiny_utils::randomly(["A", "B", "C"], rng).take(10) {
///     assert!(["A", "B", "C"].contains(&letter));
/// }
/// ```
pub fn randomly<I, R>(items: I, rng: R) -> Randomly<I::Item, R>
where
    I: IntoIterator,
    I::Item: Clone,
    R: Rng,
{
    Randomly {
        items: items.into_iter().collect(),
        rng,
    }
}

/// Picks one uniformly random element of `items`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `items` is empty. Use [`pick_one_optional()`] to get
/// `None` instead.
pub fn pick_one<I, R>(items: I, rng: &mut R) -> Result<I::Item>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    pick_one_optional(items, rng).ok_or_else(|| {
        Error::InvalidArgument(Some("cannot pick from an empty collection".to_string()))
    })
}

/// Picks one uniformly random element of `items`, or `None` if there are none.
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
///
/// assert!(tiny_utils::pick_one_optional(Vec::<u8>::new(), &mut rng).is_none());
/// assert_eq!(tiny_utils::pick_one_optional([5], &mut rng), Some(5));
/// ```
pub fn pick_one_optional<I, R>(items: I, rng: &mut R) -> Option<I::Item>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    items.into_iter().choose(rng)
}

/// Iterator returned by [`circular()`].
#[derive(Clone, Debug)]
pub struct Circular<T> {
    items: Vec<T>,
    position: usize,
}

impl<T> Circular<T> {
    /// Starts the cycle over from the first element.
    pub fn restart(&mut self) {
        self.position = 0;
    }
}

impl<T: Clone> Iterator for Circular<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.position)?.clone();

        self.position = self.position.wrapping_add(1);
        if self.position == self.items.len() {
            self.position = 0;
        }

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.items.is_empty() {
            (0, Some(0))
        } else {
            (usize::MAX, None)
        }
    }
}

impl<T: Clone> FusedIterator for Circular<T> {}

/// Iterator returned by [`randomly()`].
#[derive(Clone, Debug)]
pub struct Randomly<T, R> {
    items: Vec<T>,
    rng: R,
}

impl<T: Clone, R: Rng> Iterator for Randomly<T, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.choose(&mut self.rng).cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.items.is_empty() {
            (0, Some(0))
        } else {
            (usize::MAX, None)
        }
    }
}

impl<T: Clone, R: Rng> FusedIterator for Randomly<T, R> {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::ErrorKind;

    const LETTERS: [&str; 3] = ["A", "B", "C"];

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5EED)
    }

    #[test]
    fn circular_repeats_in_order() {
        let mut iter = circular(LETTERS);

        let taken: Vec<_> = iter.by_ref().take(7).collect();
        assert_eq!(taken, ["A", "B", "C", "A", "B", "C", "A"]);
        assert_eq!(iter.next(), Some("B"));
    }

    #[test]
    fn circular_restart() {
        let mut iter = circular(LETTERS);
        iter.next();
        iter.next();

        iter.restart();

        assert_eq!(iter.next(), Some("A"));
    }

    #[test]
    fn circular_single_element() {
        let taken: Vec<_> = circular([1]).take(3).collect();

        assert_eq!(taken, [1, 1, 1]);
    }

    #[test]
    fn circular_empty() {
        let mut iter = circular(Vec::<u8>::new());

        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn randomly_draws_only_members_and_eventually_all() {
        let mut seen = HashSet::new();

        for letter in randomly(LETTERS, rng()).take(1_000) {
            assert!(LETTERS.contains(&letter));
            seen.insert(letter);
        }

        assert_eq!(seen.len(), LETTERS.len());
    }

    #[test]
    fn randomly_accepts_borrowed_rng() {
        let mut rng = rng();

        let first: Vec<_> = randomly(LETTERS, &mut rng).take(5).collect();
        let second: Vec<_> = randomly(LETTERS, &mut rng).take(5).collect();

        assert_eq!(first.len(), 5);
        assert_eq!(second.len(), 5);
    }

    #[test]
    fn randomly_is_roughly_uniform() {
        let draws = 30_000;
        let mut counts = [0_u32; 3];

        for index in randomly([0_usize, 1, 2], rng()).take(draws) {
            counts[index] += 1;
        }

        for count in counts {
            assert!((9_000..11_000).contains(&count), "{counts:?}");
        }
    }

    #[test]
    fn randomly_empty() {
        let mut iter = randomly(Vec::<u8>::new(), rng());

        assert_eq!(iter.next(), None);
    }

    #[test]
    fn pick_one_from_members() {
        let mut rng = rng();
        let mut seen = HashSet::new();

        for _ in 0..1_000 {
            let letter = pick_one(LETTERS, &mut rng).unwrap();
            assert!(LETTERS.contains(&letter));
            seen.insert(letter);
        }

        assert_eq!(seen.len(), LETTERS.len());
    }

    #[test]
    fn pick_one_from_empty_fails() {
        let error = pick_one(Vec::<u8>::new(), &mut rng()).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn pick_one_optional_present_for_non_empty() {
        let mut rng = rng();
        let mut seen = HashSet::new();

        for _ in 0..1_000 {
            let letter = pick_one_optional(LETTERS, &mut rng).unwrap();
            seen.insert(letter);
        }

        assert_eq!(seen.len(), LETTERS.len());
    }

    #[test]
    fn pick_one_optional_absent_for_empty() {
        let mut rng = rng();

        for _ in 0..10 {
            assert_eq!(pick_one_optional(HashSet::<u8>::new(), &mut rng), None);
        }
    }

    #[test]
    fn pick_one_works_with_borrowed_items() {
        let owned = vec![String::from("x"), String::from("y")];

        let picked = pick_one(&owned, &mut rng()).unwrap();

        assert!(owned.contains(picked));
    }
}
