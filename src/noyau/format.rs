// src/noyau/format.rs
//
// Affichage lisible d'une Expr (texte de l'exercice).
// - un espace de chaque côté de l'opérateur : "1/2 + 3"
// - parenthèses seulement quand la lecture l'exige :
//     * enfant de précédence strictement plus faible que le parent
//     * enfant DROIT de même précédence sous '-' ou '/' (a - (b - c), a / (b * c))
//
// Le second cas garantit que relire le texte (eval.rs) redonne la valeur de l'arbre.

use super::expr::{Expr, Op};

/// Formate l'expression telle qu'elle apparaît dans le fichier d'exercices.
pub fn format_expr_pretty(e: &Expr) -> String {
    match e {
        Expr::Lit(r) => r.to_string(),
        Expr::Bin { op, gauche, droite } => {
            let g = format_enfant(gauche, *op, false);
            let d = format_enfant(droite, *op, true);
            format!("{g} {op} {d}")
        }
    }
}

fn format_enfant(enfant: &Expr, parent: Op, cote_droit: bool) -> String {
    let s = format_expr_pretty(enfant);
    if besoin_parentheses(enfant, parent, cote_droit) {
        format!("({s})")
    } else {
        s
    }
}

fn besoin_parentheses(enfant: &Expr, parent: Op, cote_droit: bool) -> bool {
    match enfant {
        Expr::Lit(_) => false,
        Expr::Bin { op, .. } => {
            op.precedence() < parent.precedence()
                || (cote_droit
                    && !parent.est_commutatif()
                    && op.precedence() == parent.precedence())
        }
    }
}
