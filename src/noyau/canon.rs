// src/noyau/canon.rs
//
// Forme canonique (déduplication seulement, jamais affichée) :
// - feuille : texte du rationnel
// - noeud   : "(G op D)", toujours parenthésé (la structure de l'arbre reste visible)
// - + et * : G et D triés lexicographiquement => a+b et b+a ont la même clef
// - - et / : ordre conservé
//
// Volontairement “peu profond” : pas d'associativité ni d'identités algébriques,
// (a+b)+c et a+(b+c) restent deux exercices distincts.

use super::expr::Expr;

pub fn canon_expr(e: &Expr) -> String {
    match e {
        Expr::Lit(r) => r.to_string(),
        Expr::Bin { op, gauche, droite } => {
            let mut g = canon_expr(gauche);
            let mut d = canon_expr(droite);
            if op.est_commutatif() && g > d {
                std::mem::swap(&mut g, &mut d);
            }
            format!("({g}{op}{d})")
        }
    }
}
