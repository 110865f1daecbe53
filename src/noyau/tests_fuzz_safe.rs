//! Tests fuzz safe : générateur martelé, graines fixes, budget temps.
//!
//! Invariants vérifiés sur chaque exercice produit :
//! - '-' : gauche >= droite ; '/' : droite > gauche (à chaque noeud)
//! - formes canoniques toutes distinctes dans un lot
//! - eval_expression(texte) == evaluate(arbre), petites et très grandes plages

use std::collections::HashSet;
use std::time::{Duration, Instant};

use super::eval::eval_expression;
use super::expr::{Expr, Op};
use super::fraction::Rational;
use super::generateur::Generateur;

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn contraintes_ok(e: &Expr) -> bool {
    match e {
        Expr::Lit(_) => true,
        Expr::Bin { op, gauche, droite } => {
            let (Ok(g), Ok(d)) = (gauche.evaluate(), droite.evaluate()) else {
                return false;
            };
            let local = match op {
                Op::Moins => g >= d,
                Op::Divise => d > g,
                Op::Plus | Op::Fois => true,
            };
            local && contraintes_ok(gauche) && contraintes_ok(droite)
        }
    }
}

#[test]
fn fuzz_safe_accord_texte_arbre() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    for (graine, plage) in [(1u64, 2i64), (2, 5), (3, 10), (4, 30), (5, 100)] {
        let mut g = Generateur::new(plage, Some(graine));
        for _ in 0..150 {
            budget(t0, max);

            let Ok(e) = g.generer_au_plus(3) else {
                continue;
            };
            let texte = e.to_string();
            let attendu = e.evaluate().unwrap_or_else(|err| panic!("{texte}: {err}"));
            let relu = eval_expression(&texte).unwrap_or_else(|err| panic!("{texte}: {err}"));
            assert_eq!(relu, attendu, "texte={texte:?}");
        }
    }
}

#[test]
fn fuzz_safe_accord_texte_arbre_grandes_plages() {
    let t0 = Instant::now();
    let max = Duration::from_secs(20);

    // opérandes énormes : le regroupement gauche à droite du texte frôle i64
    for (graine, plage) in [(11u64, 100_000i64), (12, 1_000_000), (13, 100_000_000)] {
        let mut g = Generateur::new(plage, Some(graine));
        let mut produits = 0usize;
        for _ in 0..300 {
            budget(t0, max);

            let Ok(e) = g.generer_au_plus(3) else {
                continue;
            };
            produits += 1;
            let texte = e.to_string();
            let attendu = e.evaluate().unwrap_or_else(|err| panic!("{texte}: {err}"));
            let relu = eval_expression(&texte).unwrap_or_else(|err| panic!("{texte}: {err}"));
            assert_eq!(relu, attendu, "plage={plage} texte={texte:?}");
        }
        assert!(produits > 100, "plage={plage}: {produits} exercices");
    }
}

#[test]
fn fuzz_safe_contraintes_et_valeurs_positives() {
    let t0 = Instant::now();
    let max = Duration::from_secs(10);

    let mut g = Generateur::new(12, Some(0xBADC0DE));
    for _ in 0..500 {
        budget(t0, max);

        let e = g.generer(3).unwrap_or_else(|err| panic!("{err}"));
        assert!(contraintes_ok(&e), "contrainte violée: {e}");
        assert!(e.evaluate().unwrap() >= Rational::entier(0), "{e}");
    }

    for plage in [100_000i64, 1_000_000, 100_000_000] {
        let mut g = Generateur::new(plage, Some(0xBADC0DE));
        for _ in 0..100 {
            budget(t0, max);

            let Ok(e) = g.generer_au_plus(3) else {
                continue;
            };
            assert!(contraintes_ok(&e), "plage={plage} contrainte violée: {e}");
            assert!(e.evaluate().unwrap() >= Rational::entier(0), "{e}");
        }
    }
}

#[test]
fn fuzz_safe_unicite_dans_le_lot() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    // petite plage : beaucoup de collisions à rejeter
    let mut g = Generateur::new(4, Some(77));
    let mut vues = HashSet::new();
    let mut produits = 0usize;

    for _ in 0..250 {
        budget(t0, max);
        if let Ok(e) = g.generer_au_plus(3) {
            assert!(vues.insert(e.canon()), "doublon canonique: {e}");
            produits += 1;
        }
    }

    assert!(produits > 50, "trop peu d'exercices: {produits}");
}

#[test]
fn fuzz_safe_determinisme() {
    let texte = |graine: u64| -> Vec<String> {
        let mut g = Generateur::new(10, Some(graine));
        (0..40)
            .filter_map(|_| g.generer_au_plus(3).ok())
            .map(|e| e.to_string())
            .collect()
    };

    assert_eq!(texte(0xC0FFEE), texte(0xC0FFEE));
    assert_ne!(texte(1), texte(2));
}
