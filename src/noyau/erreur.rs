//! Noyau — erreurs.
//!
//! Deux familles imposées par le contrat (division par zéro / entrée invalide),
//! plus le dépassement d’entier natif (i64).
//! Chaque message reprend le texte fautif tel que saisi.

use thiserror::Error;

pub type Resultat<T> = Result<T, ErreurCalc>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// Dénominateur nul (construction ou inversion d’une fraction nulle).
    #[error("{0}")]
    DivisionParZero(String),

    /// Opérande mal formé, signe ambigu, opérateur inconnu, mauvais nombre d’opérandes.
    #[error("{0}")]
    EntreeInvalide(String),

    /// Résultat hors de la plage des entiers natifs.
    #[error("Integer overflow: {0}")]
    Depassement(String),
}

pub(crate) const MSG_DENOMINATEUR_NUL: &str = "Cannot have 0 as a denominator.";

impl ErreurCalc {
    pub(crate) fn denominateur_nul() -> Self {
        Self::DivisionParZero(MSG_DENOMINATEUR_NUL.into())
    }

    pub(crate) fn fraction_invalide(texte: &str) -> Self {
        Self::EntreeInvalide(format!("Invalid fraction input: {texte}"))
    }

    /// `W_-N/D`, `-W_-N/D`, `W_N/-D` : le signe doit être devant la partie entière.
    pub(crate) fn signe_ambigu(texte: &str, entier: i64, num: i64, den: i64) -> Self {
        Self::EntreeInvalide(format!(
            "Invalid fraction input: {texte}: Please input negative mixed fractions with the \
             minus sign at the beginning to reduce ambiguity (i.e. -{}_{}/{})",
            entier.unsigned_abs(),
            num.unsigned_abs(),
            den.unsigned_abs()
        ))
    }

    pub(crate) fn operateur_invalide(commande: &str, jeton: &str) -> Self {
        Self::EntreeInvalide(format!(
            "Invalid input: {commande}, {jeton} is not a valid operator"
        ))
    }

    pub(crate) fn nombre_operandes(commande: &str) -> Self {
        Self::EntreeInvalide(format!(
            "Invalid input: {commande}, incorrect number of operands"
        ))
    }

    pub(crate) fn depassement(operation: impl Into<String>) -> Self {
        Self::Depassement(operation.into())
    }

    /// Rattache le texte saisi à une erreur de calcul.
    /// `prefixe` : "Invalid fraction input: 3/0" (opérande) ou "Invalid input: 1/2 / 0" (commande).
    /// Les entrées invalides citent déjà leur texte : inchangées.
    pub(crate) fn avec_contexte(self, prefixe: &str, texte: &str) -> Self {
        match self {
            Self::DivisionParZero(msg) => Self::DivisionParZero(format!("{prefixe}: {msg}")),
            Self::Depassement(detail) => Self::Depassement(format!("{texte} ({detail})")),
            autre => autre,
        }
    }
}
