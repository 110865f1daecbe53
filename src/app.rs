// src/app.rs
//
// Exercices Q-pur — module App (racine)
// -------------------------------------
// Rôle:
// - Déclarer les sous-modules (commande.rs + etat.rs + fichiers.rs)
// - Exécuter une Config validée : génération OU correction
// - Tout le calcul reste dans le noyau ; ici on lit/écrit les fichiers et on journalise.

pub mod commande;
pub mod etat;
pub mod fichiers;

// Ré-exports pratiques pour main.rs
pub use commande::Commande;
pub use etat::Config;

use anyhow::Result;
use tracing::info;

use crate::noyau::{corriger_lot, generer_lot, Generateur};
use etat::{Mode, FICHIER_BULLETIN, FICHIER_EXERCICES, FICHIER_REPONSES};
use fichiers::{ecrire_lignes, lire_lignes};

/// Exécute la configuration et renvoie le message de fin pour l'utilisateur.
pub fn executer(config: &Config) -> Result<String> {
    match &config.mode {
        Mode::Generer {
            nombre,
            plage,
            graine,
            ops_max,
        } => {
            info!(nombre, plage, ?graine, ops_max, "génération");

            let mut generateur = Generateur::new(*plage, *graine);
            let lot = generer_lot(&mut generateur, *nombre, *ops_max);

            let chemin_ex = config.chemin(FICHIER_EXERCICES);
            let chemin_rep = config.chemin(FICHIER_REPONSES);
            ecrire_lignes(&chemin_ex, &lot.exercices)?;
            ecrire_lignes(&chemin_rep, &lot.reponses)?;

            let mut msg = format!(
                "{} exercice(s) générés (plage {plage}) -> {} / {}",
                lot.exercices.len(),
                chemin_ex.display(),
                chemin_rep.display()
            );
            if lot.echecs > 0 {
                msg.push_str(&format!(" ; {} ignoré(s), faute d'exercice unique", lot.echecs));
            }
            Ok(msg)
        }

        Mode::Corriger {
            exercices,
            reponses,
        } => {
            info!(exercices = %exercices.display(), reponses = %reponses.display(), "correction");

            let lignes_ex = lire_lignes(exercices)?;
            let lignes_rep = lire_lignes(reponses)?;
            let bulletin = corriger_lot(&lignes_ex, &lignes_rep);

            let chemin = config.chemin(FICHIER_BULLETIN);
            ecrire_lignes(&chemin, bulletin.to_string().lines())?;

            Ok(format!(
                "correction terminée ({} juste(s) sur {}) -> {}",
                bulletin.corrects.len(),
                bulletin.total(),
                chemin.display()
            ))
        }
    }
}
