// src/noyau/fraction.rs
//
// Rationnel exact à largeur fixe (i64), toujours réduit.
// - dénominateur > 0, pgcd(|n|, d) = 1, zéro = 0/1
// - immuable : chaque opération renvoie une nouvelle valeur
// - opérations “checked” : un débordement i64 devient ErreurNoyau::Depassement
//
// Forme texte (aller-retour exact avec parse) :
//   4      -> "4"
//   3/4    -> "3/4"
//   7/4    -> "1'3/4"
//   -7/4   -> "-1'3/4"

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use super::erreur::{ErreurNoyau, Resultat};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational(Ratio<i64>);

impl Rational {
    /// n/d réduit. d == 0 => DivisionParZero.
    pub fn new(numer: i64, denom: i64) -> Resultat<Self> {
        if denom == 0 {
            return Err(ErreurNoyau::DivisionParZero);
        }
        // la normalisation du signe ferait déborder i64::MIN
        if numer == i64::MIN || denom == i64::MIN {
            return Err(ErreurNoyau::Depassement);
        }
        Ok(Rational(Ratio::new(numer, denom)))
    }

    pub fn entier(n: i64) -> Self {
        Rational(Ratio::from_integer(n))
    }

    pub fn numer(&self) -> i64 {
        *self.0.numer()
    }

    pub fn denom(&self) -> i64 {
        *self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /* ------------------------ Arithmétique exacte ------------------------ */

    pub fn ajoute(&self, autre: &Rational) -> Resultat<Rational> {
        self.0
            .checked_add(&autre.0)
            .map(Rational)
            .ok_or(ErreurNoyau::Depassement)
    }

    pub fn soustrait(&self, autre: &Rational) -> Resultat<Rational> {
        self.0
            .checked_sub(&autre.0)
            .map(Rational)
            .ok_or(ErreurNoyau::Depassement)
    }

    pub fn multiplie(&self, autre: &Rational) -> Resultat<Rational> {
        self.0
            .checked_mul(&autre.0)
            .map(Rational)
            .ok_or(ErreurNoyau::Depassement)
    }

    pub fn divise(&self, autre: &Rational) -> Resultat<Rational> {
        if autre.is_zero() {
            return Err(ErreurNoyau::DivisionParZero);
        }
        self.0
            .checked_div(&autre.0)
            .map(Rational)
            .ok_or(ErreurNoyau::Depassement)
    }

    /// -x (jamais de débordement : i64::MIN est refusé à la construction).
    pub fn oppose(&self) -> Rational {
        Rational(-self.0)
    }

    /* ------------------------ Lecture texte ------------------------ */

    /// Accepte "W'N/D", "N/D", "N" (un '-' initial optionnel porte sur toute la valeur).
    pub fn parse(texte: &str) -> Resultat<Rational> {
        let s = texte.trim();
        if s.is_empty() {
            return Err(ErreurNoyau::lecture("nombre vide"));
        }

        let (negatif, corps) = match s.strip_prefix('-') {
            Some(reste) => (true, reste),
            None => (false, s),
        };

        let valeur = match corps.split_once('\'') {
            // nombre mixte : W'N/D
            Some((w, frac)) => {
                let w = lire_entier(w)?;
                let (n, d) = lire_fraction(frac)?;
                let numer = w
                    .checked_mul(d)
                    .and_then(|x| x.checked_add(n))
                    .ok_or(ErreurNoyau::Depassement)?;
                Rational::new(numer, d)?
            }
            None if corps.contains('/') => {
                let (n, d) = lire_fraction(corps)?;
                Rational::new(n, d)?
            }
            None => Rational::entier(lire_entier(corps)?),
        };

        Ok(if negatif { valeur.oppose() } else { valeur })
    }
}

/// Suite non vide de chiffres ASCII.
fn lire_entier(s: &str) -> Resultat<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErreurNoyau::lecture(format!("entier invalide: {s:?}")));
    }
    s.parse::<i64>()
        .map_err(|_| ErreurNoyau::lecture(format!("entier trop grand: {s:?}")))
}

/// "N/D" (deux entiers, un seul '/').
fn lire_fraction(s: &str) -> Resultat<(i64, i64)> {
    let (n, d) = s
        .split_once('/')
        .ok_or_else(|| ErreurNoyau::lecture(format!("'/' manquant dans {s:?}")))?;
    Ok((lire_entier(n)?, lire_entier(d)?))
}

impl FromStr for Rational {
    type Err = ErreurNoyau;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rational::parse(s)
    }
}

/* ------------------------ Ordre total (produits croisés) ------------------------ */

impl Ord for Rational {
    fn cmp(&self, autre: &Self) -> Ordering {
        // dénominateurs > 0 : a/b < c/d <=> a*d < c*b ; i128 évite tout débordement
        let gauche = self.numer() as i128 * autre.denom() as i128;
        let droite = autre.numer() as i128 * self.denom() as i128;
        gauche.cmp(&droite)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, autre: &Self) -> Option<Ordering> {
        Some(self.cmp(autre))
    }
}

/* ------------------------ Affichage ------------------------ */

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.numer();
        let d = self.denom();

        if d == 1 {
            return write!(f, "{n}");
        }

        let partie_entiere = n / d;
        if partie_entiere == 0 {
            // le signe reste sur le numérateur : -3/4
            write!(f, "{n}/{d}")
        } else {
            let reste = (n % d).abs();
            write!(f, "{partie_entiere}'{reste}/{d}")
        }
    }
}
