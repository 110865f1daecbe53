//! Noyau — pilotage par lots (en mémoire, sans fichiers).
//!
//! - generer_lot  : N exercices + N réponses, alignés ligne à ligne
//! - corriger_lot : exercice i / réponse i -> bulletin (numéros 1..)
//!
//! Aucune erreur d'un exercice ou d'une ligne n'interrompt le lot, sauf
//! l'épuisement complet des formes : les emplacements restants sont alors
//! comptés en échecs d'un seul coup.

use std::fmt;

use tracing::{info, warn};

use super::erreur::{ErreurNoyau, Resultat};
use super::eval::eval_expression;
use super::fraction::Rational;
use super::generateur::Generateur;

/// Lignes produites par une génération (mêmes indices = même exercice).
#[derive(Clone, Debug, Default)]
pub struct Lot {
    pub exercices: Vec<String>,
    pub reponses: Vec<String>,
    /// Emplacements sautés (GenerationEpuisee ou autre erreur du noyau).
    pub echecs: usize,
}

/// Génère `nombre` exercices d'au plus `ops_max` opérateurs.
/// Exercice : "<expression> = " ; réponse : valeur exacte formatée.
pub fn generer_lot(generateur: &mut Generateur, nombre: usize, ops_max: usize) -> Lot {
    let mut lot = Lot::default();

    for emplacement in 1..=nombre {
        let formes_avant = generateur.nb_formes();
        let resultat = generateur
            .generer_au_plus(ops_max)
            .and_then(|e| e.evaluate().map(|v| (e, v)));

        match resultat {
            Ok((expr, valeur)) => {
                lot.exercices.push(format!("{expr} = "));
                lot.reponses.push(valeur.to_string());
            }
            // un essai complet sans aucune forme nouvelle : l'espace est épuisé
            Err(ErreurNoyau::GenerationEpuisee(_)) if generateur.nb_formes() == formes_avant => {
                let restants = nombre - emplacement + 1;
                warn!(emplacement, restants, "plus aucune forme nouvelle, fin du lot");
                lot.echecs += restants;
                break;
            }
            Err(e) => {
                warn!(emplacement, erreur = %e, "exercice ignoré");
                lot.echecs += 1;
            }
        }
    }

    info!(
        demandes = nombre,
        generes = lot.exercices.len(),
        echecs = lot.echecs,
        formes = generateur.nb_formes(),
        "génération terminée"
    );
    lot
}

/// Corrige une ligne : vrai si la réponse vaut exactement la partie gauche du '='.
pub fn corriger_ligne(exercice: &str, reponse: &str) -> Resultat<bool> {
    let (gauche, _) = exercice.split_once('=').ok_or(ErreurNoyau::Format)?;
    let attendu = eval_expression(gauche)?;
    let donne = Rational::parse(reponse)?;
    Ok(attendu == donne)
}

/// Résultat d'une correction : numéros de ligne (1..), croissants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bulletin {
    pub corrects: Vec<usize>,
    pub faux: Vec<usize>,
}

impl Bulletin {
    pub fn total(&self) -> usize {
        self.corrects.len() + self.faux.len()
    }
}

/// Corrige deux suites de lignes alignées ; la plus courte borne la correction.
pub fn corriger_lot<E, R>(exercices: E, reponses: R) -> Bulletin
where
    E: IntoIterator,
    E::Item: AsRef<str>,
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    let mut bulletin = Bulletin::default();

    for (i, (exercice, reponse)) in exercices.into_iter().zip(reponses).enumerate() {
        let numero = i + 1;
        match corriger_ligne(exercice.as_ref(), reponse.as_ref()) {
            Ok(true) => bulletin.corrects.push(numero),
            Ok(false) => bulletin.faux.push(numero),
            Err(e) => {
                warn!(ligne = numero, erreur = %e, "ligne non corrigeable, comptée fausse");
                bulletin.faux.push(numero);
            }
        }
    }

    info!(
        corrects = bulletin.corrects.len(),
        faux = bulletin.faux.len(),
        "correction terminée"
    );
    bulletin
}

fn liste(numeros: &[usize]) -> String {
    numeros
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Deux lignes : "Correct: n (a, b, ...)" puis "Wrong: n (...)".
impl fmt::Display for Bulletin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Correct: {} ({})", self.corrects.len(), liste(&self.corrects))?;
        write!(f, "Wrong: {} ({})", self.faux.len(), liste(&self.faux))
    }
}
