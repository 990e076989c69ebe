//! Calculatrice fractions : évalue `4/3 + 1/2 * 3_1/6` de gauche à droite,
//! en arithmétique exacte sur entiers natifs.
//!
//! - `noyau` : Fraction, lecture/affichage, évaluateur
//! - `app`   : état + rendu texte de la ligne de commande

pub mod app;
pub mod noyau;
