// src/noyau/jetons.rs
//
// Jetons de la ligne de commande (déjà découpés par le shell) :
//   opérande opérateur opérande ... opérande
// - rang pair   : opérande (lu par Fraction::lire)
// - rang impair : opérateur parmi + - * /
// - nombre de jetons impair (commence et finit par un opérande)

use std::fmt;

use super::erreur::{ErreurCalc, Resultat};
use super::fraction::Fraction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_texte(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Plus),
            "-" => Some(Self::Moins),
            "*" => Some(Self::Fois),
            "/" => Some(Self::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Moins => "-",
            Self::Fois => "*",
            Self::Divise => "/",
        }
    }

    pub fn appliquer(self, a: &Fraction, b: &Fraction) -> Resultat<Fraction> {
        match self {
            Self::Plus => a.plus(b),
            Self::Moins => a.moins(b),
            Self::Fois => a.fois(b),
            Self::Divise => a.divise(b),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

/// Expression validée : premier opérande puis couples (opérateur, opérande).
#[derive(Clone, Debug)]
pub struct Expression {
    pub premier: Fraction,
    pub suite: Vec<(Operateur, Fraction)>,
}

/// Valide l’alternance opérande/opérateur et lit chaque opérande.
/// Aucun calcul ici : toute l’entrée est vérifiée avant la première opération.
pub fn analyser<S: AsRef<str>>(jetons: &[S]) -> Resultat<Expression> {
    let commande = jetons
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");

    let mut operandes = Vec::with_capacity(jetons.len() / 2 + 1);
    let mut operateurs = Vec::with_capacity(jetons.len() / 2);

    for (i, jeton) in jetons.iter().map(AsRef::as_ref).enumerate() {
        if i % 2 == 0 {
            operandes.push(Fraction::lire(jeton)?);
        } else {
            let op = Operateur::depuis_texte(jeton)
                .ok_or_else(|| ErreurCalc::operateur_invalide(&commande, jeton))?;
            operateurs.push(op);
        }
    }

    // pair (ou vide) => il manque un opérande après le dernier opérateur
    if jetons.len() % 2 == 0 {
        return Err(ErreurCalc::nombre_operandes(&commande));
    }

    let mut operandes = operandes.into_iter();
    let Some(premier) = operandes.next() else {
        return Err(ErreurCalc::nombre_operandes(&commande));
    };

    Ok(Expression {
        premier,
        suite: operateurs.into_iter().zip(operandes).collect(),
    })
}

/// Format utilitaire (démarche) : l’expression lue, opérandes réécrits.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.premier)?;
        for (op, b) in &self.suite {
            write!(f, " {op} {b}")?;
        }
        Ok(())
    }
}
