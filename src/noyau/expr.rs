// src/noyau/expr.rs
//
// Arbre d'expression exact (sans flottants).
// - Lit : un rationnel
// - Bin : opération binaire (+ - * /), chaque noeud possède ses enfants (Box)
//
// Deux rendus indépendants :
// - format.rs : lisible, parenthèses minimales (exercice affiché)
// - canon.rs  : clef de déduplication (commutativité de tête seulement)

use std::fmt;

use super::canon::canon_expr;
use super::erreur::Resultat;
use super::format::format_expr_pretty;
use super::fraction::Rational;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Op {
    pub const TOUS: [Op; 4] = [Op::Plus, Op::Moins, Op::Fois, Op::Divise];

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '*',
            Op::Divise => '/',
        }
    }

    /// {+,-} = 1 < {*,/} = 2
    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Fois | Op::Divise => 2,
        }
    }

    pub fn est_commutatif(self) -> bool {
        matches!(self, Op::Plus | Op::Fois)
    }

    pub fn applique(self, a: &Rational, b: &Rational) -> Resultat<Rational> {
        match self {
            Op::Plus => a.ajoute(b),
            Op::Moins => a.soustrait(b),
            Op::Fois => a.multiplie(b),
            Op::Divise => a.divise(b),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Lit(Rational),
    Bin {
        op: Op,
        gauche: Box<Expr>,
        droite: Box<Expr>,
    },
}

impl Expr {
    pub fn bin(op: Op, gauche: Expr, droite: Expr) -> Expr {
        Expr::Bin {
            op,
            gauche: Box::new(gauche),
            droite: Box::new(droite),
        }
    }

    /// Valeur exacte. Propage DivisionParZero / Depassement des enfants.
    pub fn evaluate(&self) -> Resultat<Rational> {
        match self {
            Expr::Lit(r) => Ok(*r),
            Expr::Bin { op, gauche, droite } => {
                let a = gauche.evaluate()?;
                let b = droite.evaluate()?;
                op.applique(&a, &b)
            }
        }
    }

    /// Nombre d'opérateurs binaires dans l'arbre.
    pub fn nb_operateurs(&self) -> usize {
        match self {
            Expr::Lit(_) => 0,
            Expr::Bin { gauche, droite, .. } => 1 + gauche.nb_operateurs() + droite.nb_operateurs(),
        }
    }

    /// Clef de déduplication (voir canon.rs).
    pub fn canon(&self) -> String {
        canon_expr(self)
    }
}

/// Rendu lisible (parenthèses minimales).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_expr_pretty(self))
    }
}
