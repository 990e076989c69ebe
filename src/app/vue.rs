// src/app/vue.rs
//
// Vue texte (sortie standard)
// ---------------------------
// - succès : le résultat EXACT (+ la démarche si demandée)
// - erreur : ligne vide, message, ligne vide, aide
// - aide   : ligne vide, aide

use super::etat::AppCalc;

/// Texte d’aide (affiché seul, ou après un message d’erreur).
pub const AIDE: &str = "Input expression to evaluate. \n\n\
Valid operators are + - / \"*\" \n\
(Asterisk must be quoted or escaped to prevent glob expansion in shell, or you can run \
'set -f' beforehand to disable shell expansion) \n\n\
Fractions should be expressed as X/Y or -X/Y, and X_Y/Z or -X_Y/Z for mixed fractions\n\n\
Evaluation is strictly left to right: 1 + 2 * 3 = 9";

impl AppCalc {
    /// Rendu complet, prêt pour stdout.
    pub fn rendu(&self) -> String {
        if self.aide {
            return format!("\n{AIDE}\n");
        }

        if self.en_erreur() {
            return format!("\n{}\n\n{AIDE}\n", self.erreur);
        }

        let mut out = String::new();
        if self.demarche_visible {
            self.rendu_demarche(&mut out);
        }
        out.push_str(&self.exact);
        out.push('\n');
        out
    }

    fn rendu_demarche(&self, out: &mut String) {
        out.push_str("Expression : ");
        out.push_str(&self.demarche.jetons);
        out.push('\n');
        for (i, etape) in self.demarche.etapes.iter().enumerate() {
            out.push_str(&format!("  {}. {etape}\n", i + 1));
        }
    }
}
