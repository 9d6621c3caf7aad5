//! Constant-time operations used on the decapsulation path

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slices of
/// different length compare unequal without inspecting their contents.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time equality of two word vectors
///
/// Every element pair is compared; the result is folded without branching
/// on intermediate outcomes.
pub fn ct_eq_words(a: &[u32], b: &[u32]) -> Choice {
    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.iter()
        .zip(b.iter())
        .fold(Choice::from(1), |acc, (x, y)| acc & x.ct_eq(y))
}

/// Constant-time selection between two byte arrays
///
/// Returns `a` if `choice` is 0 and `b` if `choice` is 1.
pub fn ct_select_bytes<const N: usize>(a: &[u8; N], b: &[u8; N], choice: Choice) -> [u8; N] {
    let mut out = [0u8; N];
    for (o, (x, y)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
        *o = u8::conditional_select(x, y, choice);
    }
    out
}
