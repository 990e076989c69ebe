//! Noyau exact (fractions sur entiers natifs)
//!
//! Organisation interne :
//! - entiers.rs  : pgcd / ppcm
//! - erreur.rs   : erreurs typées (division par zéro, entrée invalide, dépassement)
//! - fraction.rs : Fraction + simplification + arithmétique + égalité
//! - format.rs   : affichage texte (1/2, 2_2/3, -3)
//! - lecture.rs  : lecture texte -> Fraction
//! - jetons.rs   : opérateurs + validation de la suite de jetons
//! - eval.rs     : pli gauche-droite + démarche

pub mod entiers;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod fraction;
pub mod jetons;
pub mod lecture;



#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurCalc, Resultat};
pub use eval::{evaluer, evaluer_avec_demarche, DemarcheNoyau};
pub use fraction::Fraction;
