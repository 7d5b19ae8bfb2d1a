use crate::{unit::Unit, ZSeq};

/// Calculates the length of a possibly absent sequence, excluding the nul terminator.
///
/// An absent sequence has length 0; no memory is read for it. A present sequence is scanned to
/// its terminator, so the precondition of [ZSeq::from_ptr] applies.
///
/// # Examples
///
/// ```
/// use zseq::{length, zstr, ZSeq};
///
/// assert_eq!(length(Some(zstr!("abc"))), 3);
/// assert_eq!(length(Some(zstr!(""))), 0);
/// assert_eq!(length(None::<&ZSeq<u8>>), 0);
/// ```
pub fn length<C: Unit>(s: Option<&ZSeq<C>>) -> usize {
    match s {
        Some(s) => s.count_units(),
        None => 0,
    }
}

/// Checks two possibly absent sequences for unit-wise equality.
///
/// Two absent sequences are equal; an absent and a present sequence are not, regardless of
/// content. Present sequences are compared in lockstep, returning `false` at the first differing
/// pair of units; the scan ends with the terminators compared at the same offset, so a strict
/// prefix of a longer sequence is not equal to it.
///
/// # Examples
///
/// ```
/// use zseq::{equals, zstr, ZSeq};
///
/// assert!(equals(Some(zstr!("nul")), Some(zstr!("nul"))));
/// assert!(!equals(Some(zstr!("nul")), Some(zstr!("nil"))));
/// assert!(!equals(Some(zstr!("nu")), Some(zstr!("nul"))));
///
/// assert!(equals(None::<&ZSeq<u8>>, None));
/// assert!(!equals(None, Some(zstr!(""))));
/// ```
pub fn equals<C: Unit>(lhs: Option<&ZSeq<C>>, rhs: Option<&ZSeq<C>>) -> bool {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => lhs == rhs,
        (None, None) => true,
        _ => false,
    }
}
