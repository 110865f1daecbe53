//! Noyau — évaluation d'un exercice à partir de son TEXTE (chemin de correction).
//!
//! tokenize -> deux piles (valeurs, opérateurs) -> Rational
//!
//! On ne réutilise jamais l'arbre du générateur : la correction refait le calcul
//! depuis le fichier, comme le ferait un correcteur humain.
//!
//! Règles :
//! - ')' : on applique jusqu'à la '(' correspondante
//! - opérateur : on applique d'abord tout opérateur en attente de précédence >= (gauche à droite)
//! - fin : on applique le reste ; il doit rester exactement une valeur

use tracing::trace;

use super::erreur::{ErreurNoyau, Resultat};
use super::expr::Op;
use super::fraction::Rational;
use super::jetons::{format_tokens, tokenize, Tok};

/// Élément de la pile d'opérateurs.
#[derive(Clone, Copy, Debug)]
enum EnAttente {
    Op(Op),
    LPar,
}

/// API publique : valeur exacte d'une expression infixe (+ - * /, parenthèses).
pub fn eval_expression(texte: &str) -> Resultat<Rational> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurNoyau::lecture("expression vide"));
    }

    let jetons = tokenize(s)?;
    trace!(jetons = %format_tokens(&jetons), "exercice tokenisé");

    let mut valeurs: Vec<Rational> = Vec::new();
    let mut ops: Vec<EnAttente> = Vec::new();

    // “valeur” = un nombre ou une parenthèse fermée ; sert à refuser "1 2" ou "1 + * 2"
    let mut prev_was_value = false;

    for tok in jetons {
        match tok {
            Tok::Num(r) => {
                if prev_was_value {
                    return Err(ErreurNoyau::lecture("opérateur manquant"));
                }
                valeurs.push(r);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurNoyau::lecture("opérateur manquant avant '('"));
                }
                ops.push(EnAttente::LPar);
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(ErreurNoyau::lecture("opérande manquant avant ')'"));
                }
                loop {
                    match ops.pop() {
                        Some(EnAttente::LPar) => break,
                        Some(EnAttente::Op(op)) => applique(&mut valeurs, op)?,
                        None => return Err(ErreurNoyau::lecture("')' sans '('")),
                    }
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    return Err(ErreurNoyau::lecture("opérande manquant"));
                }
                let op = match tok.op() {
                    Some(op) => op,
                    None => return Err(ErreurNoyau::lecture("jeton inattendu")),
                };

                // gauche à droite : on vide tout ce qui est au moins aussi prioritaire
                while let Some(&EnAttente::Op(top)) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop();
                    applique(&mut valeurs, top)?;
                }

                ops.push(EnAttente::Op(op));
                prev_was_value = false;
            }
        }
    }

    if !prev_was_value {
        return Err(ErreurNoyau::lecture("expression incomplète"));
    }

    while let Some(e) = ops.pop() {
        match e {
            EnAttente::Op(op) => applique(&mut valeurs, op)?,
            EnAttente::LPar => return Err(ErreurNoyau::lecture("parenthèses non fermées")),
        }
    }

    match (valeurs.pop(), valeurs.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurNoyau::lecture("expression invalide")),
    }
}

fn applique(valeurs: &mut Vec<Rational>, op: Op) -> Resultat<()> {
    let b = valeurs
        .pop()
        .ok_or_else(|| ErreurNoyau::lecture("opérande manquant"))?;
    let a = valeurs
        .pop()
        .ok_or_else(|| ErreurNoyau::lecture("opérande manquant"))?;
    valeurs.push(op.applique(&a, &b)?);
    Ok(())
}
