// src/noyau/generateur.rs
//
// Génération d'exercices par rejet (rejection sampling) avec budget d'essais.
//
// Contraintes vérifiées à CHAQUE noeud binaire :
// - '-' : gauche >= droite      (jamais de résultat négatif)
// - '/' : droite > gauche       (quotient < 1, donc droite > 0 : pas de division par zéro)
// - forme canonique jamais vue dans cette session (voir canon.rs)
// - le texte relu (eval.rs, gauche à droite) redonne la valeur de l'arbre :
//   le regroupement du texte peut déborder i64 là où celui de l'arbre ne déborde pas
//
// Les rejets sont silencieux et retentés ; seul GenerationEpuisee remonte.
// Le RNG est possédé par le générateur : même graine + mêmes appels => mêmes exercices.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use super::erreur::{ErreurNoyau, Resultat};
use super::eval::eval_expression;
use super::expr::{Expr, Op};
use super::fraction::Rational;

/// Nombre maximal d'essais, par niveau de l'arbre et pour l'exercice complet.
pub const BUDGET_ESSAIS: usize = 100;

pub struct Generateur {
    rng: ChaCha8Rng,
    /// Bornes des opérandes : entiers dans [0, plage), dénominateurs dans [1, plage).
    plage: i64,
    budget: usize,
    /// Formes canoniques déjà produites (tous niveaux confondus).
    deja_vus: HashSet<String>,
}

impl Generateur {
    /// `graine = None` : graine tirée de l'entropie système (non reproductible).
    pub fn new(plage: i64, graine: Option<u64>) -> Self {
        let rng = match graine {
            Some(g) => ChaCha8Rng::seed_from_u64(g),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            rng,
            plage: plage.max(1),
            budget: BUDGET_ESSAIS,
            deja_vus: HashSet::new(),
        }
    }

    /// Nombre de formes canoniques retenues jusqu'ici.
    pub fn nb_formes(&self) -> usize {
        self.deja_vus.len()
    }

    /// Un exercice complet avec exactement `nb_ops` opérateurs.
    pub fn generer(&mut self, nb_ops: usize) -> Resultat<Expr> {
        for essai in 0..self.budget {
            match self.generer_expression(nb_ops) {
                Ok(e) => {
                    debug_assert_eq!(e.nb_operateurs(), nb_ops);
                    return Ok(e);
                }
                Err(ErreurNoyau::GenerationEpuisee(_)) => {
                    debug!(essai, nb_ops, "essai de génération abandonné");
                }
                Err(autre) => return Err(autre),
            }
        }
        Err(ErreurNoyau::GenerationEpuisee(self.budget))
    }

    /// Un exercice avec 1 à `ops_max` opérateurs (nombre tiré uniformément).
    pub fn generer_au_plus(&mut self, ops_max: usize) -> Resultat<Expr> {
        let nb_ops = self.rng.gen_range(1..=ops_max.max(1));
        self.generer(nb_ops)
    }

    /// Sous-arbre avec exactement `ops_restants` opérateurs.
    fn generer_expression(&mut self, ops_restants: usize) -> Resultat<Expr> {
        if ops_restants == 0 {
            return self.generer_nombre();
        }

        for _ in 0..self.budget {
            let op = Op::TOUS[self.rng.gen_range(0..Op::TOUS.len())];
            let ops_gauche = self.rng.gen_range(0..ops_restants);

            // un enfant épuisé fait échouer ce niveau
            let gauche = self.generer_expression(ops_gauche)?;
            let droite = self.generer_expression(ops_restants - 1 - ops_gauche)?;

            let (vg, vd) = match (gauche.evaluate(), droite.evaluate()) {
                (Ok(a), Ok(b)) => (a, b),
                _ => continue,
            };
            if !respecte_contraintes(op, &vg, &vd) {
                trace!(%op, %vg, %vd, "candidat rejeté (contrainte)");
                continue;
            }

            let expr = Expr::bin(op, gauche, droite);
            // dépassement i64 au noeud courant : rejet
            let Ok(valeur) = expr.evaluate() else {
                continue;
            };
            if !texte_fidele(&expr, &valeur) {
                trace!(texte = %expr, "candidat rejeté (texte non relisible)");
                continue;
            }

            // vérifier + insérer en une seule opération
            if self.deja_vus.insert(expr.canon()) {
                return Ok(expr);
            }
            trace!(canon = %expr.canon(), "candidat rejeté (doublon)");
        }

        Err(ErreurNoyau::GenerationEpuisee(self.budget))
    }

    /// Feuille : entier de [0, plage) ou fraction n/d avec d ∈ [1, plage), n ∈ [0, d·(plage-1)).
    fn generer_nombre(&mut self) -> Resultat<Expr> {
        // plage 1 : aucune fraction possible (d ∈ [1, 1) est vide)
        if self.plage < 2 || self.rng.gen_bool(0.5) {
            let n = self.rng.gen_range(0..self.plage);
            return Ok(Expr::Lit(Rational::entier(n)));
        }

        let d = self.rng.gen_range(1..self.plage);
        let borne = d.saturating_mul(self.plage - 1);
        let n = self.rng.gen_range(0..borne);
        Ok(Expr::Lit(Rational::new(n, d)?))
    }
}

fn respecte_contraintes(op: Op, gauche: &Rational, droite: &Rational) -> bool {
    match op {
        Op::Moins => gauche >= droite,
        Op::Divise => droite > gauche,
        Op::Plus | Op::Fois => true,
    }
}

/// Vrai si le correcteur, partant du texte affiché, retrouve exactement `valeur`.
fn texte_fidele(expr: &Expr, valeur: &Rational) -> bool {
    matches!(eval_expression(&expr.to_string()), Ok(v) if v == *valeur)
}
