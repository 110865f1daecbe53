// src/noyau/erreur.rs
//
// Erreurs du noyau (typées, sans I/O).
// - Rational / Expr : propagées telles quelles à l'appelant
// - Générateur : seule GenerationEpuisee sort (le reste est “rejeté puis retenté”)
// - Correction : toute erreur d'une ligne => ligne fausse, on continue

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurNoyau {
    /// Dénominateur nul à la construction, ou division par une valeur nulle.
    #[error("division par zéro")]
    DivisionParZero,

    /// Texte numérique ou expression mal formé.
    #[error("lecture impossible: {0}")]
    Lecture(String),

    #[error("opérateur inconnu: '{0}'")]
    OperateurInvalide(char),

    /// Ligne d'exercice sans '='.
    #[error("format d'exercice invalide (pas de '=')")]
    Format,

    #[error("impossible de générer un exercice unique après {0} essais")]
    GenerationEpuisee(usize),

    /// Largeur fixe (i64) dépassée pendant un calcul.
    #[error("dépassement de capacité")]
    Depassement,
}

pub type Resultat<T> = Result<T, ErreurNoyau>;

impl ErreurNoyau {
    pub(crate) fn lecture(msg: impl Into<String>) -> Self {
        ErreurNoyau::Lecture(msg.into())
    }
}
