// src/noyau/lecture.rs
//
// Lecture d’un opérande texte -> Fraction (simplifiée).
//
// Grammaire :
//   [W_]N/D   (nombre mixte ou fraction)
//   N         (entier seul, sans partie W_)
//
// Règles :
// - au plus un '_' et au plus un '/' ;
// - W, N, D : littéraux entiers (signe optionnel) ;
// - le signe d’un nombre mixte se met devant W seulement :
//   "-2_3/7" ok ; "2_-3/7", "-2_-3/7", "2_3/-7" refusés (ambigus).

use std::str::FromStr;

use log::trace;

use super::erreur::{ErreurCalc, Resultat};
use super::fraction::Fraction;

fn entier(litteral: &str, texte: &str) -> Resultat<i64> {
    litteral
        .parse::<i64>()
        .map_err(|_| ErreurCalc::fraction_invalide(texte))
}

impl Fraction {
    /// Lit "2/3", "-7", "2_3/7", "-2_3/7"... Le résultat est toujours simplifié.
    /// Toute erreur cite `texte`.
    pub fn lire(texte: &str) -> Resultat<Self> {
        Self::lire_operande(texte).map_err(|e| {
            e.avec_contexte(&format!("Invalid fraction input: {texte}"), texte)
        })
    }

    fn lire_operande(texte: &str) -> Resultat<Self> {
        let parties: Vec<&str> = texte.split('_').collect();
        let (partie_entiere, partie_fraction) = match parties.as_slice() {
            [fraction] => (None, *fraction),
            [entiere, fraction] => (Some(*entiere), *fraction),
            _ => return Err(ErreurCalc::fraction_invalide(texte)),
        };

        let entiere = partie_entiere
            .map(|w| entier(w, texte))
            .transpose()?;

        let morceaux: Vec<&str> = partie_fraction.split('/').collect();
        let (num, den) = match (morceaux.as_slice(), entiere) {
            // entier seul : "7", "-7"
            ([seul], None) => {
                let n = entier(seul, texte)?;
                trace!("lecture {texte:?} -> entier {n}");
                return Self::depuis_entier(n);
            }
            ([num, den], _) => (entier(num, texte)?, entier(den, texte)?),
            _ => return Err(ErreurCalc::fraction_invalide(texte)),
        };

        let fraction = Self::new_simplifiee(num, den)?;

        let Some(w) = entiere else {
            trace!("lecture {texte:?} -> {fraction}");
            return Ok(fraction);
        };

        if fraction.est_negative() {
            return Err(ErreurCalc::signe_ambigu(texte, w, num, den));
        }

        // "-W_N/D" = -(W + N/D) ; "-0_N/D" vaut donc +N/D
        let fraction = if w < 0 { fraction.oppose() } else { fraction };
        let resultat = fraction.plus(&Self::depuis_entier(w)?)?.simplifiee();

        trace!("lecture {texte:?} -> {resultat}");
        Ok(resultat)
    }
}

impl FromStr for Fraction {
    type Err = ErreurCalc;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lire(s)
    }
}
