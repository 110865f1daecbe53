// src/app/fichiers.rs
//
// Fichiers texte, une entrée par ligne (exercices, réponses, bulletin).

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Lit toutes les lignes (fin de ligne "\n" ou "\r\n" retirée).
pub fn lire_lignes(chemin: &Path) -> Result<Vec<String>> {
    let texte = fs::read_to_string(chemin)
        .with_context(|| format!("impossible de lire {}", chemin.display()))?;
    Ok(texte.lines().map(str::to_owned).collect())
}

/// Écrit une ligne par élément, dans l'ordre.
pub fn ecrire_lignes<I>(chemin: &Path, lignes: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let fichier = File::create(chemin)
        .with_context(|| format!("impossible de créer {}", chemin.display()))?;
    let mut w = BufWriter::new(fichier);
    for ligne in lignes {
        writeln!(w, "{}", ligne.as_ref())
            .with_context(|| format!("écriture impossible dans {}", chemin.display()))?;
    }
    w.flush()
        .with_context(|| format!("écriture impossible dans {}", chemin.display()))?;
    Ok(())
}
