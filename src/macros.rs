macro_rules! const_assert {
    ($x:expr $(,)?) => {
        const _: [(); 0 / {
            const X: bool = $x;
            X as usize
        }] = [];
    };
}
pub(super) use const_assert;

macro_rules! const_assert_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::macros::const_assert!($lhs == $rhs);
    };
}
pub(super) use const_assert_eq;

macro_rules! const_assert_size_eq {
    ($lhs:ty, $rhs:ty $(,)?) => {
        $crate::macros::const_assert_eq! {
            core::mem::size_of::<$lhs>(),
            core::mem::size_of::<$rhs>(),
        }
    };
}
pub(super) use const_assert_size_eq;

/// Creates a [ZSeq](crate::ZSeq) of bytes from a string literal.
///
/// The result is usable in `const` position.
///
/// # Examples
///
/// ```
/// use zseq::{zstr, ZSeq};
///
/// let s1 = ZSeq::from_units_until_nul(b"hello\0").unwrap();
/// let s2 = zstr!("hello");
/// assert_eq!(s1, s2);
/// ```
#[macro_export]
macro_rules! zstr {
    ($s:literal) => {
        unsafe { $crate::ZSeq::<u8>::from_units_until_nul_unchecked(concat!($s, "\0").as_bytes()) }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ZSeq;

    const_assert!(true);
    const_assert_eq!(1, 1);
    const_assert_size_eq!(u8, u8);

    const _: &ZSeq<u8> = zstr!("abcd");

    #[test]
    fn const_declared_value_matches_runtime() {
        const GREETING: &ZSeq<u8> = zstr!("hi");

        let at_runtime = zstr!("hi");
        assert_eq!(GREETING, at_runtime);
        assert_eq!(GREETING.count_units(), 2);
    }
}
