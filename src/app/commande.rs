// src/app/commande.rs
//
// Ligne de commande (clap derive), sans validation métier.
//
// Deux usages, exclusifs :
//   génération : exercices-qpur -n <nombre> -r <plage> [--seed G] [--max-ops K]
//   correction : exercices-qpur -e <exercices> -a <réponses>
//
// La cohérence des options est vérifiée dans etat.rs (Config::depuis_commande).

use std::path::PathBuf;

use clap::Parser;

use super::etat::OPS_MAX_DEFAUT;

#[derive(Parser, Debug)]
#[command(
    name = "exercices-qpur",
    version,
    about = "Génère des exercices d'arithmétique exacte (fractions) ou corrige des réponses."
)]
pub struct Commande {
    /// Nombre d'exercices à générer (1-10000)
    #[arg(short = 'n', long = "number")]
    pub nombre: Option<usize>,

    /// Plage des nombres : entiers < plage, dénominateurs < plage (≥ 1)
    #[arg(short = 'r', long = "range", allow_negative_numbers = true)]
    pub plage: Option<i64>,

    /// Fichier d'exercices à corriger
    #[arg(short = 'e', long = "exercise")]
    pub exercices: Option<PathBuf>,

    /// Fichier de réponses à corriger (aligné ligne à ligne)
    #[arg(short = 'a', long = "answer")]
    pub reponses: Option<PathBuf>,

    /// Graine du générateur (reproductible) ; sinon entropie système
    #[arg(long = "seed")]
    pub graine: Option<u64>,

    /// Nombre maximal d'opérateurs par exercice (1-3)
    #[arg(long = "max-ops", default_value_t = OPS_MAX_DEFAUT)]
    pub ops_max: usize,

    /// Dossier des fichiers produits (Exercises.txt, Answers.txt, Grade.txt)
    #[arg(long = "out-dir", default_value = ".")]
    pub dossier: PathBuf,
}
