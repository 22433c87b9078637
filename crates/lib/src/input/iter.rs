use std::marker::PhantomData;

use crate::input::{FromInput, IStr, IStrError};

/// Iterator parsing consecutive `T`s out of an [IStr].
///
/// Ends at the first `Ok(None)` from the underlying parse, so trailing
/// whitespace does not produce a final error item.
pub struct Iter<'a, T> {
    input: &'a mut IStr,
    _marker: PhantomData<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(input: &'a mut IStr) -> Self {
        Self {
            input,
            _marker: PhantomData,
        }
    }
}

impl<T> Iterator for Iter<'_, T>
where
    T: FromInput,
{
    type Item = Result<T, IStrError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.try_next().transpose()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Exhausted input yields nothing more; otherwise the number of
        // remaining items depends on what T consumes.
        if self.input.is_empty() {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}
