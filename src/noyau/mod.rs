//! Noyau exact Q-pur (exercices)
//!
//! Organisation interne :
//! - erreur.rs     : ErreurNoyau (thiserror)
//! - fraction.rs   : Rational (i64, toujours réduit) + forme texte W'N/D
//! - expr.rs       : AST Lit / Bin + évaluation
//! - format.rs     : affichage lisible (parenthèses minimales)
//! - canon.rs      : forme canonique (déduplication)
//! - generateur.rs : génération par rejet, graine explicite
//! - jetons.rs     : tokenisation du texte d'un exercice
//! - eval.rs       : évaluation à deux piles (correction)
//! - pilote.rs     : lots de génération / correction + bulletin

pub mod canon;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod fraction;
pub mod generateur;
pub mod jetons;
pub mod pilote;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proptest;

// API publique minimale
pub use generateur::Generateur;
pub use pilote::{corriger_lot, generer_lot};
