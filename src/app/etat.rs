// src/app/etat.rs
//
// Configuration validée d'une exécution (sans I/O, sans noyau).
//
// Contrats :
// - génération : 1 ≤ nombre ≤ NOMBRE_MAX, plage ≥ 1, 1 ≤ ops_max ≤ OPS_MAX
// - correction : les deux fichiers sont fournis
// - jamais les deux modes à la fois

use std::path::PathBuf;

use anyhow::{bail, Result};

use super::commande::Commande;

/// Garde-fou : taille maximale d'un lot.
pub const NOMBRE_MAX: usize = 10_000;

pub const OPS_MAX_DEFAUT: usize = 3;
pub const OPS_MAX: usize = 3;

pub const FICHIER_EXERCICES: &str = "Exercises.txt";
pub const FICHIER_REPONSES: &str = "Answers.txt";
pub const FICHIER_BULLETIN: &str = "Grade.txt";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Generer {
        nombre: usize,
        plage: i64,
        graine: Option<u64>,
        ops_max: usize,
    },
    Corriger {
        exercices: PathBuf,
        reponses: PathBuf,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    /// Dossier où sont écrits les fichiers produits.
    pub dossier: PathBuf,
}

impl Config {
    pub fn depuis_commande(c: Commande) -> Result<Config> {
        let generation = c.nombre.is_some() || c.plage.is_some();
        let correction = c.exercices.is_some() || c.reponses.is_some();

        let mode = match (generation, correction) {
            (true, true) => bail!("choisir soit la génération (-n/-r), soit la correction (-e/-a)"),
            (false, false) => bail!("rien à faire : utiliser -n/-r (génération) ou -e/-a (correction)"),

            (true, false) => {
                let Some(nombre) = c.nombre else {
                    bail!("-n <nombre> est requis pour générer");
                };
                let Some(plage) = c.plage else {
                    bail!("-r <plage> est requis pour générer");
                };
                if !(1..=NOMBRE_MAX).contains(&nombre) {
                    bail!("le nombre d'exercices doit être entre 1 et {NOMBRE_MAX} (reçu {nombre})");
                }
                if plage < 1 {
                    bail!("la plage doit être ≥ 1 (reçu {plage})");
                }
                if !(1..=OPS_MAX).contains(&c.ops_max) {
                    bail!("--max-ops doit être entre 1 et {OPS_MAX} (reçu {})", c.ops_max);
                }
                Mode::Generer {
                    nombre,
                    plage,
                    graine: c.graine,
                    ops_max: c.ops_max,
                }
            }

            (false, true) => match (c.exercices, c.reponses) {
                (Some(exercices), Some(reponses)) => Mode::Corriger {
                    exercices,
                    reponses,
                },
                _ => bail!("la correction exige le fichier d'exercices (-e) ET le fichier de réponses (-a)"),
            },
        };

        Ok(Config {
            mode,
            dossier: c.dossier,
        })
    }

    pub fn chemin(&self, fichier: &str) -> PathBuf {
        self.dossier.join(fichier)
    }
}
