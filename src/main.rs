// src/main.rs
//
// Calculatrice fractions — point d’entrée (ligne de commande)
// -----------------------------------------------------------
// Les jetons arrivent déjà découpés par le shell :
//   calculatrice_fractions 4/3 + 1/2 "*" 3_1/6
//
// - "-1/2" est un opérande, pas une option (valeurs à tiret acceptées)
// - "*" doit être protégé du glob du shell (ou `set -f`)
// - RUST_LOG=debug affiche les étapes dans les traces

use std::process::ExitCode;

use clap::Parser;

use calculatrice_fractions::app::AppCalc;

#[derive(Parser, Debug)]
#[command(name = "calculatrice_fractions", version, disable_help_flag = true)]
struct Arguments {
    /// Affiche la démarche (une ligne par opération)
    #[arg(short = 'd', long = "demarche")]
    demarche: bool,

    /// Expression : opérandes et opérateurs séparés par des espaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    jetons: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Arguments::parse();

    let mut app = AppCalc::new(args.demarche);
    app.executer(args.jetons);
    print!("{}", app.rendu());

    if app.en_erreur() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
