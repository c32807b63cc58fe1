//! Lazy views over strided coefficient indices.

use std::iter::FusedIterator;

use unipoly_rings::traits::Ring;

use crate::polynomial::coefficient_at;

/// A view of the coefficients at `start, start + step, ...` below `stop`.
///
/// Created by [`Polynomial::get_range`](crate::Polynomial::get_range).
/// The view is `Copy`, and each call to [`CoeffRange::iter`] starts over.
#[derive(Debug)]
pub struct CoeffRange<'a, R: Ring> {
    coeffs: &'a [R],
    start: usize,
    stop: usize,
    step: usize,
}

impl<'a, R: Ring> CoeffRange<'a, R> {
    /// `step` must be nonzero.
    pub(crate) fn new(coeffs: &'a [R], start: usize, stop: usize, step: usize) -> Self {
        debug_assert!(step > 0);
        Self {
            coeffs,
            start,
            stop,
            step,
        }
    }

    /// Returns an iterator from the start of the range.
    #[must_use]
    pub fn iter(&self) -> CoeffIter<'a, R> {
        CoeffIter {
            coeffs: self.coeffs,
            next: self.start,
            stop: self.stop,
            step: self.step,
        }
    }

    /// Returns the number of indices in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        remaining(self.start, self.stop, self.step)
    }

    /// Returns true if the range selects no index.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.stop
    }
}

impl<R: Ring> Clone for CoeffRange<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Ring> Copy for CoeffRange<'_, R> {}

impl<'a, R: Ring> IntoIterator for CoeffRange<'a, R> {
    type Item = R;
    type IntoIter = CoeffIter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, R: Ring> IntoIterator for &CoeffRange<'a, R> {
    type Item = R;
    type IntoIter = CoeffIter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`CoeffRange`].
#[derive(Clone, Debug)]
pub struct CoeffIter<'a, R: Ring> {
    coeffs: &'a [R],
    next: usize,
    stop: usize,
    step: usize,
}

impl<R: Ring> Iterator for CoeffIter<'_, R> {
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if self.next >= self.stop {
            return None;
        }
        let c = coefficient_at(self.coeffs, self.next);
        self.next = self.next.saturating_add(self.step);
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = remaining(self.next, self.stop, self.step);
        (n, Some(n))
    }
}

impl<R: Ring> ExactSizeIterator for CoeffIter<'_, R> {}

impl<R: Ring> FusedIterator for CoeffIter<'_, R> {}

fn remaining(next: usize, stop: usize, step: usize) -> usize {
    if next >= stop {
        0
    } else {
        (stop - next - 1) / step + 1
    }
}
