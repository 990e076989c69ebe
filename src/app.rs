// src/app.rs
//
// Calculatrice fractions — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs)
// - Brancher l’état sur le noyau : jetons -> résultat ou erreur
//
// Le noyau ne voit jamais l’aide : "-h" / "--help" sont traités ici.

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use log::debug;

use crate::noyau;

fn demande_aide(jetons: &[String]) -> bool {
    jetons.is_empty() || jetons.iter().any(|j| j == "-h" || j == "--help")
}

impl AppCalc {
    /// Une invocation complète : tout ou rien.
    pub fn executer(&mut self, jetons: Vec<String>) {
        self.entree = jetons;

        if demande_aide(&self.entree) {
            self.set_aide();
            return;
        }

        match noyau::evaluer_avec_demarche(&self.entree) {
            Ok((resultat, demarche)) => {
                debug!("résultat: {resultat:?}");
                self.set_resultats(resultat.to_string(), demarche);
            }
            Err(e) => {
                debug!("échec: {e:?}");
                self.set_erreur(e.to_string());
            }
        }
    }
}
