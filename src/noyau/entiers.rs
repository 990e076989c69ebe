// src/noyau/entiers.rs
//
// Arithmétique entière de base : pgcd (Euclide) et ppcm.
// Génériques sur les entiers natifs signés (i32, i64, ...).

use num_traits::{PrimInt, Signed};

/// Plus grand commun diviseur de |a| et |b| (Euclide itératif).
///
/// - pgcd(0, n) = |n|
/// - pgcd(0, 0) = 0
/// - symétrique : pgcd(a, b) == pgcd(b, a)
///
/// Suppose `a` et `b` différents de `T::min_value()` (|MIN| n’est pas représentable).
pub fn pgcd<T: PrimInt + Signed>(a: T, b: T) -> T {
    let mut x = a.abs();
    let mut y = b.abs();

    while !y.is_zero() {
        let r = x % y;
        x = y;
        y = r;
    }

    x
}

/// Plus petit commun multiple : |a / pgcd(a, b) * b|.
///
/// La division est exacte (pgcd divise toujours a).
/// `None` si le produit dépasse la capacité de `T`.
/// Convention : ppcm(0, 0) = 0.
pub fn ppcm<T: PrimInt + Signed>(a: T, b: T) -> Option<T> {
    let g = pgcd(a, b);
    if g.is_zero() {
        return Some(T::zero());
    }

    let m = (a / g).checked_mul(&b)?;
    if m.is_negative() {
        T::zero().checked_sub(&m)
    } else {
        Some(m)
    }
}
