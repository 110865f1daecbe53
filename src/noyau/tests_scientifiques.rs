//! Tests scientifiques (campagne) : scénarios de bout en bout du noyau.
//!
//! - forme texte des rationnels (aller-retour)
//! - lot généré puis corrigé par le chemin texte
//! - correction ligne à ligne, erreurs isolées

use super::eval::eval_expression;
use super::fraction::Rational;
use super::generateur::Generateur;
use super::pilote::{corriger_lot, generer_lot};

fn r(n: i64, d: i64) -> Rational {
    Rational::new(n, d).unwrap_or_else(|e| panic!("{n}/{d}: {e}"))
}

#[test]
fn sci_nombre_mixte() {
    assert_eq!(r(7, 4).to_string(), "1'3/4");
    assert_eq!(Rational::parse("1'3/4").unwrap(), r(7, 4));
}

#[test]
fn sci_lot_cinq_plage_dix() {
    let mut g = Generateur::new(10, Some(2024));
    let lot = generer_lot(&mut g, 5, 3);

    assert_eq!(lot.exercices.len(), 5);
    assert_eq!(lot.reponses.len(), 5);

    // accord ligne à ligne : l'évaluation du texte redonne la réponse
    for (ex, rep) in lot.exercices.iter().zip(&lot.reponses) {
        let (gauche, droite) = ex.split_once('=').expect("'=' attendu");
        assert_eq!(droite, " ");
        let v = eval_expression(gauche).unwrap_or_else(|e| panic!("{ex:?}: {e}"));
        assert_eq!(v.to_string(), *rep, "exercice {ex:?}");
    }
}

#[test]
fn sci_correction_reponse_juste_ou_fausse() {
    let b = corriger_lot(["3/4 + 1/4 = "], ["1"]);
    assert_eq!(b.corrects, vec![1]);
    assert!(b.faux.is_empty());

    let b = corriger_lot(["3/4 + 1/4 = "], ["2"]);
    assert!(b.corrects.is_empty());
    assert_eq!(b.faux, vec![1]);
}

#[test]
fn sci_ligne_sans_egal_n_arrete_rien() {
    let exercices = ["1 + 2 = ", "1 + 2", "1/2 * 1/2 = "];
    let reponses = ["3", "3", "1/4"];
    let b = corriger_lot(exercices, reponses);
    assert_eq!(b.corrects, vec![1, 3]);
    assert_eq!(b.faux, vec![2]);
    assert_eq!(b.to_string(), "Correct: 2 (1, 3)\nWrong: 1 (2)");
}

#[test]
fn sci_reponses_equivalentes_acceptees() {
    // forme non réduite ou non mixte : même valeur => correct
    let b = corriger_lot(["1/2 + 1 = ", "1/2 + 1 = ", "1/2 + 1 = "], ["1'1/2", "3/2", "6/4"]);
    assert_eq!(b.corrects, vec![1, 2, 3]);
}

#[test]
fn sci_division_exacte() {
    // (a / b) * b == a
    for (a, b) in [(r(3, 7), r(5, 9)), (r(1, 1), r(1, 3)), (r(22, 7), r(7, 22))] {
        let q = a.divise(&b).unwrap();
        assert_eq!(q.multiplie(&b).unwrap(), a);
    }
}
