//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’évaluateur avec des suites de jetons arbitraires.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : toute erreur est typée ET cite le texte fautif

use std::time::{Duration, Instant};

use super::erreur::ErreurCalc;
use super::eval::evaluer;
use super::fraction::Fraction;
use super::tests_outils::{budget, Rng};

/* ------------------------ Génération de jetons (bornée) ------------------------ */

fn gen_entier(rng: &mut Rng) -> i64 {
    let n = rng.pick(13) as i64;
    if rng.coin() {
        -n
    } else {
        n
    }
}

fn gen_operande(rng: &mut Rng) -> String {
    match rng.pick(12) {
        0 => format!("{}", gen_entier(rng)),
        1 => format!("{}_{}/{}", rng.pick(5), rng.pick(9), 1 + rng.pick(9)),
        2 => format!("-{}_{}/{}", rng.pick(5), rng.pick(9), 1 + rng.pick(9)),
        // signes ambigus
        3 => format!("{}_-{}/{}", 1 + rng.pick(5), 1 + rng.pick(9), 1 + rng.pick(9)),
        // dénominateur nul possible
        4 => format!("{}/{}", gen_entier(rng), rng.pick(3)),
        // bruit
        5 => match rng.pick(6) {
            0 => "x".to_string(),
            1 => "1/2/3".to_string(),
            2 => "_".to_string(),
            3 => "1__2/3".to_string(),
            4 => "".to_string(),
            _ => "3.5".to_string(),
        },
        _ => format!("{}/{}", gen_entier(rng), 1 + rng.pick(12)),
    }
}

fn gen_operateur(rng: &mut Rng) -> String {
    match rng.pick(10) {
        0 => "#".to_string(),
        1 => "x".to_string(),
        2 => "-".to_string(),
        3 | 4 => "+".to_string(),
        5 | 6 => "*".to_string(),
        _ => "/".to_string(),
    }
}

fn gen_jetons(rng: &mut Rng) -> Vec<String> {
    let n = rng.pick(10) as usize;
    (0..n)
        .map(|i| {
            if i % 2 == 0 {
                gen_operande(rng)
            } else {
                gen_operateur(rng)
            }
        })
        .collect()
}

/// Toute erreur, quel que soit son type, cite la commande ou un jeton saisi
/// (un opérande vide est cité vide : "Invalid fraction input: ").
fn check_erreur(jetons: &[String], e: &ErreurCalc) {
    let msg = e.to_string();
    let commande = jetons.join(" ");
    assert!(
        msg.contains(&commande) || jetons.iter().any(|j| msg.contains(j.as_str())),
        "jetons={jetons:?} msg={msg}"
    );
    if let ErreurCalc::DivisionParZero(_) = e {
        assert!(msg.contains("Cannot have 0 as a denominator."), "{msg}");
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_erreurs_typees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut rng_bis = rng.clone();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let jetons = gen_jetons(&mut rng);
        let jetons_bis = gen_jetons(&mut rng_bis);
        assert_eq!(jetons, jetons_bis);

        let r1 = evaluer(&jetons);
        let r2 = evaluer(&jetons_bis);
        assert_eq!(r1, r2, "non déterministe: {jetons:?}");

        match r1 {
            Ok(f) => {
                assert_eq!(jetons.len() % 2, 1);
                let s = f.simplifiee();
                assert_eq!((s.numerateur(), s.denominateur()), (f.numerateur(), f.denominateur()));
                seen_ok += 1;
            }
            Err(e) => {
                check_erreur(&jetons, &e);
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_resultat_relisible() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let jetons = gen_jetons(&mut rng);
        if let Ok(f) = evaluer(&jetons) {
            // le texte produit est un opérande valide qui redonne la même valeur
            let texte = f.to_string();
            let relu = evaluer(&[texte.as_str()])
                .unwrap_or_else(|e| panic!("relecture {texte:?} erreur: {e}"));
            assert_eq!(relu, f, "jetons={jetons:?}");
        }
    }
}

#[test]
fn fuzz_safe_longue_chaine_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // 1/2 + 1/2 + ... (800 termes) = 400
    let mut jetons = vec!["1/2".to_string()];
    for _ in 1..800 {
        jetons.push("+".to_string());
        jetons.push("1/2".to_string());
    }

    let r = evaluer(&jetons).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(r, Fraction::depuis_entier(400).unwrap());
    assert_eq!(r.to_string(), "400");
}

#[test]
fn fuzz_safe_division_par_zero_cite_la_commande() {
    let jetons: Vec<String> = ["1/2", "/", "0"].iter().map(|j| j.to_string()).collect();
    let e = evaluer(&jetons).unwrap_err();
    assert!(e.to_string().contains("1/2 / 0"), "{e}");
    check_erreur(&jetons, &e);
}

#[test]
fn fuzz_safe_depassement_signale() {
    let grand = i64::MAX.to_string();
    for jetons in [
        vec![grand.clone(), "*".to_string(), "2".to_string()],
        vec![grand.clone(), "+".to_string(), "1".to_string()],
        vec![format!("{grand}_1/2")],
    ] {
        let e = evaluer(&jetons).unwrap_err();
        assert!(matches!(e, ErreurCalc::Depassement(_)), "{e}");
        check_erreur(&jetons, &e);
    }
}
