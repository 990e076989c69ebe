//! src/app/etat.rs
//!
//! État de la calculatrice (sans vue, sans noyau).
//!
//! Rôle : contenir l’entrée (jetons), le résultat EXACT, l’erreur et la démarche,
//! avec des opérations simples pour les remplir ou les vider.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Résultat et erreur sont exclusifs : poser l’un efface l’autre.

use crate::noyau::DemarcheNoyau;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: Vec<String>,

    // --- sorties ---
    pub exact: String,  // résultat formaté (2_2/3, -1/2, 0...)
    pub erreur: String, // message d’erreur (lecture/évaluation)
    pub aide: bool,     // afficher l’aide seule (pas d’entrée, ou -h / --help)

    // --- démarche ---
    pub demarche: DemarcheNoyau,

    // --- paramètres ---
    pub demarche_visible: bool,
}

impl AppCalc {
    pub fn new(demarche_visible: bool) -> Self {
        Self {
            demarche_visible,
            ..Self::default()
        }
    }

    /// Effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.exact.clear();
        self.erreur.clear();
        self.aide = false;
        self.demarche = DemarcheNoyau::default();
    }

    pub fn set_aide(&mut self) {
        self.clear_resultats();
        self.aide = true;
    }

    /// Placer une erreur : l’ancien résultat et la démarche ne sont plus fiables.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.clear_resultats();
        self.erreur = msg.into();
    }

    pub fn set_resultats(&mut self, exact: impl Into<String>, demarche: DemarcheNoyau) {
        self.clear_resultats();
        self.exact = exact.into();
        self.demarche = demarche;
    }

    pub fn en_erreur(&self) -> bool {
        !self.erreur.is_empty()
    }
}
