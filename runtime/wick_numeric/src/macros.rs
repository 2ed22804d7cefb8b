/// Implement `std::ops` binary operators for a numeric type from one
/// by-reference method per operator. Owned and mixed operand forms forward to
/// the reference form.
macro_rules! forward_binops {
    ($ty:ty { $($trait:ident :: $method:ident => $inherent:ident),* $(,)? }) => {
        $(
            impl std::ops::$trait<&$ty> for &$ty {
                type Output = $ty;

                #[inline]
                fn $method(self, rhs: &$ty) -> $ty {
                    <$ty>::$inherent(self, rhs)
                }
            }

            impl std::ops::$trait<$ty> for $ty {
                type Output = $ty;

                #[inline]
                fn $method(self, rhs: $ty) -> $ty {
                    <$ty>::$inherent(&self, &rhs)
                }
            }

            impl std::ops::$trait<&$ty> for $ty {
                type Output = $ty;

                #[inline]
                fn $method(self, rhs: &$ty) -> $ty {
                    <$ty>::$inherent(&self, rhs)
                }
            }
        )*

        impl std::ops::Neg for &$ty {
            type Output = $ty;

            #[inline]
            fn neg(self) -> $ty {
                self.negate()
            }
        }

        impl std::ops::Neg for $ty {
            type Output = $ty;

            #[inline]
            fn neg(self) -> $ty {
                self.negate()
            }
        }
    };
}
