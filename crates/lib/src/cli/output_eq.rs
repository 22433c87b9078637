/// Helper trait to compare a solution's answers against expected values.
pub trait OutputEq<O = Self>
where
    O: ?Sized,
{
    fn output_eq(&self, other: &O) -> bool;
}

impl<A, B, C, D> OutputEq<(C, D)> for (A, B)
where
    A: OutputEq<C>,
    B: OutputEq<D>,
{
    #[inline]
    fn output_eq(&self, other: &(C, D)) -> bool {
        self.0.output_eq(&other.0) && self.1.output_eq(&other.1)
    }
}

impl<A, B> OutputEq<Option<B>> for Option<A>
where
    A: OutputEq<B>,
{
    #[inline]
    fn output_eq(&self, other: &Option<B>) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.output_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! partial_eq {
    ($ty:ty) => {
        impl OutputEq<$ty> for $ty {
            #[inline]
            fn output_eq(&self, other: &Self) -> bool {
                other == self
            }
        }
    };
}

partial_eq!(usize);
partial_eq!(isize);
partial_eq!(u32);
partial_eq!(u64);
partial_eq!(i32);
partial_eq!(i64);
partial_eq!(bool);

#[cfg(test)]
mod tests {
    use super::OutputEq;

    #[test]
    fn test_tuples() {
        assert!((11u32, 31u32).output_eq(&(11, 31)));
        assert!(!(11u32, 30u32).output_eq(&(11, 31)));
        assert!(Some((2u32, 4u32)).output_eq(&Some((2, 4))));
        assert!(!None::<u32>.output_eq(&Some(2)));
    }
}
