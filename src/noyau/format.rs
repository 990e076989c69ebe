// src/noyau/format.rs
//
// Affichage texte d’une fraction (inverse de lecture.rs) :
// - 0          -> "0"
// - |n| < |d|  -> "n/d"      (ex: -1/2)
// - entier     -> "w"        (ex: 4/2 -> 2)
// - sinon      -> "w_r/d"    (ex: 8/3 -> 2_2/3, -8/3 -> -2_2/3)
//
// Pas de simplification ici : 2/4 s’affiche "2/4".
// Seul le signe est ramené sur le numérateur (1/-2 -> "-1/2").

use std::fmt;

use super::fraction::Fraction;

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (mut n, mut d) = (self.numerateur(), self.denominateur());
        if d < 0 {
            n = -n;
            d = -d;
        }

        if n == 0 {
            return f.write_str("0");
        }

        // fraction propre
        if n.abs() < d {
            return write!(f, "{n}/{d}");
        }

        // nombre mixte : division tronquée vers zéro, reste du même signe que n
        let entier = n / d;
        let reste = n - entier * d;
        if reste == 0 {
            write!(f, "{entier}")
        } else {
            write!(f, "{entier}_{}/{d}", reste.abs())
        }
    }
}
