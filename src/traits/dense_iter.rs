// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::BitmaskVT;

/// Iterator over a value slice paired with an optional validity window,
/// yielding `Some(value)` at valid positions and `None` at nulls.
#[derive(Debug, Clone)]
pub struct NullableIter<'a, T> {
    values: core::slice::Iter<'a, T>,
    validity: Option<BitmaskVT<'a>>,
    pos: usize,
}

impl<'a, T: Copy> NullableIter<'a, T> {
    /// `validity`, when present, must cover exactly `values.len()` positions.
    #[inline]
    pub fn new(values: &'a [T], validity: Option<BitmaskVT<'a>>) -> Self {
        debug_assert!(validity.map_or(true, |(_, _, len)| len == values.len()));
        Self {
            values: values.iter(),
            validity,
            pos: 0,
        }
    }
}

impl<T: Copy> Iterator for NullableIter<'_, T> {
    type Item = Option<T>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let v = *self.values.next()?;
        let idx = self.pos;
        self.pos += 1;
        match self.validity {
            None => Some(Some(v)),
            Some((mask, offset, _)) => Some(mask.get(offset + idx).then_some(v)),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T: Copy> ExactSizeIterator for NullableIter<'_, T> {}

/// Collects valid (non-null) values from a slice into a Vec.
#[inline(always)]
pub fn collect_valid<T: Copy>(d: &[T], m: Option<BitmaskVT<'_>>) -> Vec<T> {
    NullableIter::new(d, m).flatten().collect()
}
