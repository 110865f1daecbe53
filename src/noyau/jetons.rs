// src/noyau/jetons.rs
//
// Tokenisation du texte d'un exercice (chemin de correction).
// - nombre : suite de chiffres, '/' et '\'' (ex: 12, 3/4, 1'3/4), lu par Rational::parse
// - opérateurs + - * / et parenthèses ( ) : un caractère chacun
//
// '/' est à double sens : DANS un nombre (pas d'espace) c'est la barre de fraction,
// ENTRE deux jetons (précédé d'un espace ou d'une parenthèse) c'est la division.

use super::erreur::{ErreurNoyau, Resultat};
use super::expr::Op;
use super::fraction::Rational;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(Rational),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

impl Tok {
    /// Opérateur binaire porté par le jeton, s'il y en a un.
    pub fn op(&self) -> Option<Op> {
        match self {
            Tok::Plus => Some(Op::Plus),
            Tok::Minus => Some(Op::Moins),
            Tok::Star => Some(Op::Fois),
            Tok::Slash => Some(Op::Divise),
            _ => None,
        }
    }
}

fn est_car_nombre(c: char) -> bool {
    c.is_ascii_digit() || c == '/' || c == '\''
}

/// Tokenize une chaîne en jetons.
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre (entier, fraction, mixte) : un seul jeton
        if c.is_ascii_digit() || c == '\'' {
            let start = i;
            while i < chars.len() && est_car_nombre(chars[i]) {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            out.push(Tok::Num(Rational::parse(&texte)?));
            continue;
        }

        let tok = match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            '+' => Tok::Plus,
            '-' => Tok::Minus,
            '*' => Tok::Star,
            '/' => Tok::Slash,
            autre => return Err(ErreurNoyau::OperateurInvalide(autre)),
        };
        out.push(tok);
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(r) => r.to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            autre => autre.op().map(|o| o.symbole().to_string()).unwrap_or_default(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
