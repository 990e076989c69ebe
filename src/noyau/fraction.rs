//! Noyau — fraction exacte sur entiers natifs (i64).
//!
//! Contrats :
//! - dénominateur jamais nul (vérifié à la construction) ;
//! - aucune composante égale à `i64::MIN` (|MIN| n’est pas représentable) ;
//! - valeurs immuables : chaque opération rend une nouvelle `Fraction` ;
//! - après simplification : forme irréductible, signe porté par le numérateur.
//!
//! Arithmétique contrôlée : tout dépassement i64 remonte en `ErreurCalc::Depassement`.

use num_rational::Ratio;

use super::entiers::{pgcd, ppcm};
use super::erreur::{ErreurCalc, Resultat};

#[derive(Clone, Copy, Debug)]
pub struct Fraction {
    numerateur: i64,
    denominateur: i64,
}

impl Fraction {
    /* ------------------------ Construction ------------------------ */

    /// Fraction telle quelle (non simplifiée). Échoue si `denominateur == 0`.
    pub fn new(numerateur: i64, denominateur: i64) -> Resultat<Self> {
        if denominateur == 0 {
            return Err(ErreurCalc::denominateur_nul());
        }
        if numerateur == i64::MIN || denominateur == i64::MIN {
            return Err(ErreurCalc::depassement(format!(
                "{numerateur}/{denominateur}"
            )));
        }
        Ok(Self {
            numerateur,
            denominateur,
        })
    }

    /// Fraction réduite dès la construction.
    pub fn new_simplifiee(numerateur: i64, denominateur: i64) -> Resultat<Self> {
        Ok(Self::new(numerateur, denominateur)?.simplifiee())
    }

    /// Entier n -> n/1.
    pub fn depuis_entier(n: i64) -> Resultat<Self> {
        Self::new(n, 1)
    }

    pub fn numerateur(&self) -> i64 {
        self.numerateur
    }

    pub fn denominateur(&self) -> i64 {
        self.denominateur
    }

    pub fn est_nulle(&self) -> bool {
        self.numerateur == 0
    }

    pub fn est_negative(&self) -> bool {
        (self.numerateur < 0) != (self.denominateur < 0) && self.numerateur != 0
    }

    /* ------------------------ Simplification ------------------------ */

    /// Forme irréductible, dénominateur > 0 (ex: 6/4 -> 3/2, 8/-6 -> -4/3).
    pub fn simplifiee(&self) -> Self {
        // dénominateur != 0 => g >= 1
        let g = pgcd(self.numerateur, self.denominateur);
        let mut numerateur = self.numerateur / g;
        let mut denominateur = self.denominateur / g;
        if denominateur < 0 {
            numerateur = -numerateur;
            denominateur = -denominateur;
        }
        Self {
            numerateur,
            denominateur,
        }
    }

    /// Variante en place de `simplifiee`.
    pub fn simplifier(&mut self) {
        *self = self.simplifiee();
    }

    /* ------------------------ Échelle / inverse / normalisation ------------------------ */

    /// Multiplie numérateur et dénominateur par `facteur` (ex: 3/2 x3 -> 9/6).
    /// Sert seulement à aligner les dénominateurs, jamais à simplifier.
    pub fn mise_a_l_echelle(&self, facteur: i64) -> Resultat<Self> {
        let numerateur = self.numerateur.checked_mul(facteur);
        let denominateur = self.denominateur.checked_mul(facteur);
        match (numerateur, denominateur) {
            (Some(n), Some(d)) => Self::new(n, d),
            _ => Err(ErreurCalc::depassement(format!(
                "({}/{}) x {facteur}",
                self.numerateur, self.denominateur
            ))),
        }
    }

    /// Inverse brut (ex: 6/4 -> 4/6). Échoue si la fraction est nulle.
    pub fn inverse(&self) -> Resultat<Self> {
        Self::new(self.denominateur, self.numerateur)
    }

    /// Inverse réduit (ex: 100/50 -> 1/2).
    pub fn inverse_simplifiee(&self) -> Resultat<Self> {
        Self::new_simplifiee(self.denominateur, self.numerateur)
    }

    /// Vrai si les deux fractions partagent déjà le même dénominateur.
    pub fn est_normalisee(&self, autre: &Self) -> bool {
        self.denominateur == autre.denominateur
    }

    /// Couple de fractions ramenées au ppcm des dénominateurs
    /// (ex: 2/3, 3/5 -> 10/15, 9/15). Sans effet si déjà normalisées.
    pub fn normaliser(&self, autre: &Self) -> Resultat<(Self, Self)> {
        if self.est_normalisee(autre) {
            return Ok((*self, *autre));
        }

        let commun = ppcm(self.denominateur, autre.denominateur).ok_or_else(|| {
            ErreurCalc::depassement(format!(
                "ppcm({}, {})",
                self.denominateur, autre.denominateur
            ))
        })?;

        // ppcm multiple des deux dénominateurs : facteurs entiers exacts
        debug_assert_eq!(commun % self.denominateur, 0);
        debug_assert_eq!(commun % autre.denominateur, 0);

        let a = self.mise_a_l_echelle(commun / self.denominateur)?;
        let b = autre.mise_a_l_echelle(commun / autre.denominateur)?;
        Ok((a, b))
    }

    /* ------------------------ Opérations ------------------------ */

    pub fn plus(&self, autre: &Self) -> Resultat<Self> {
        let (a, b) = self.normaliser(autre)?;
        let n = a
            .numerateur
            .checked_add(b.numerateur)
            .ok_or_else(|| ErreurCalc::depassement(format!("{self} + {autre}")))?;
        Self::new_simplifiee(n, a.denominateur)
    }

    pub fn moins(&self, autre: &Self) -> Resultat<Self> {
        let (a, b) = self.normaliser(autre)?;
        let n = a
            .numerateur
            .checked_sub(b.numerateur)
            .ok_or_else(|| ErreurCalc::depassement(format!("{self} - {autre}")))?;
        Self::new_simplifiee(n, a.denominateur)
    }

    pub fn fois(&self, autre: &Self) -> Resultat<Self> {
        let n = self.numerateur.checked_mul(autre.numerateur);
        let d = self.denominateur.checked_mul(autre.denominateur);
        match (n, d) {
            (Some(n), Some(d)) => Self::new_simplifiee(n, d),
            _ => Err(ErreurCalc::depassement(format!("{self} * {autre}"))),
        }
    }

    /// a / b = a * inverse(b) ; la réduction se fait dans la multiplication.
    pub fn divise(&self, autre: &Self) -> Resultat<Self> {
        self.fois(&autre.inverse()?)
    }

    /// -x (même dénominateur).
    pub fn oppose(&self) -> Self {
        // aucune composante ne vaut i64::MIN : la négation est sûre
        Self {
            numerateur: -self.numerateur,
            denominateur: self.denominateur,
        }
    }
}

/* ------------------------ Égalité (valeur, pas représentation) ------------------------ */

impl PartialEq for Fraction {
    fn eq(&self, autre: &Self) -> bool {
        if self.est_normalisee(autre) {
            return self.numerateur == autre.numerateur;
        }
        match self.normaliser(autre) {
            Ok((a, b)) => a.numerateur == b.numerateur,
            // ppcm hors plage : les formes irréductibles sont uniques
            Err(_) => {
                let a = self.simplifiee();
                let b = autre.simplifiee();
                a.numerateur == b.numerateur && a.denominateur == b.denominateur
            }
        }
    }
}

impl Eq for Fraction {}

impl From<Fraction> for Ratio<i64> {
    fn from(f: Fraction) -> Self {
        Ratio::new(f.numerateur, f.denominateur)
    }
}
