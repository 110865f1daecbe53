//! Propriétés (proptest) du rationnel exact.

use proptest::prelude::*;

use super::fraction::Rational;

fn petit_entier() -> impl Strategy<Value = i64> {
    -100_000i64..100_000i64
}

fn denominateur() -> impl Strategy<Value = i64> {
    prop_oneof![(-10_000i64..=-1i64), (1i64..=10_000i64)]
}

fn rationnel() -> impl Strategy<Value = Rational> {
    (petit_entier(), denominateur()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

fn pgcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a.abs()
    } else {
        pgcd(b, a % b)
    }
}

proptest! {
    #[test]
    fn aller_retour_texte(a in rationnel()) {
        let texte = a.to_string();
        prop_assert_eq!(Rational::parse(&texte).unwrap(), a);
    }

    #[test]
    fn toujours_reduit(n in petit_entier(), d in denominateur()) {
        let a = Rational::new(n, d).unwrap();
        prop_assert!(a.denom() > 0);
        prop_assert_eq!(pgcd(a.numer(), a.denom()), 1);
    }

    #[test]
    fn reduction_idempotente(a in rationnel()) {
        let b = Rational::new(a.numer(), a.denom()).unwrap();
        prop_assert_eq!(b.numer(), a.numer());
        prop_assert_eq!(b.denom(), a.denom());
    }

    #[test]
    fn division_puis_produit(a in rationnel(), b in rationnel()) {
        prop_assume!(!b.is_zero());
        let q = a.divise(&b).unwrap();
        prop_assert_eq!(q.multiplie(&b).unwrap(), a);
    }

    #[test]
    fn somme_puis_difference(a in rationnel(), b in rationnel()) {
        let s = a.ajoute(&b).unwrap();
        prop_assert_eq!(s.soustrait(&b).unwrap(), a);
    }

    #[test]
    fn ordre_coherent_avec_difference(a in rationnel(), b in rationnel()) {
        let diff = a.soustrait(&b).unwrap();
        prop_assert_eq!(a.cmp(&b), diff.numer().cmp(&0));
    }
}
