//! Noyau — évaluation (pipeline réel)
//!
//! jetons -> analyse (alternance + lecture des opérandes) -> pli gauche-droite
//!
//! Aucune priorité, aucune parenthèse : `a op1 b op2 c` vaut `(a op1 b) op2 c`.

use log::debug;

use super::erreur::Resultat;
use super::fraction::Fraction;
use super::jetons::analyser;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    /// Expression telle que lue (opérandes simplifiés).
    pub jetons: String,
    /// Une ligne par opération, dans l’ordre d’application.
    pub etapes: Vec<String>,
}

/// API publique : évalue une suite de jetons et rend la fraction résultat.
pub fn evaluer<S: AsRef<str>>(jetons: &[S]) -> Resultat<Fraction> {
    evaluer_avec_demarche(jetons).map(|(resultat, _d)| resultat)
}

/// Comme `evaluer`, avec la démarche (expression lue + étapes).
pub fn evaluer_avec_demarche<S: AsRef<str>>(
    jetons: &[S],
) -> Resultat<(Fraction, DemarcheNoyau)> {
    let expression = analyser(jetons)?;
    let commande = jetons
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");

    let mut demarche = DemarcheNoyau {
        jetons: expression.to_string(),
        etapes: Vec::with_capacity(expression.suite.len()),
    };
    debug!("évaluation: {}", demarche.jetons);

    let resultat = expression
        .suite
        .iter()
        .try_fold(expression.premier, |acc, (op, b)| -> Resultat<Fraction> {
            let r = op.appliquer(&acc, b)?;
            let etape = format!("{acc} {op} {b} = {r}");
            debug!("{etape}");
            demarche.etapes.push(etape);
            Ok(r)
        })
        .map_err(|e| e.avec_contexte(&format!("Invalid input: {commande}"), &commande))?;

    Ok((resultat, demarche))
}
