// src/main.rs
//
// Exercices Q-pur — point d’entrée (ligne de commande)
// ----------------------------------------------------
// - journalisation : tracing (RUST_LOG, sinon exercices_qpur=info), sur stderr
// - arguments      : clap -> Config validée
// - erreurs        : message + code de sortie non nul

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod noyau;

use app::{Commande, Config};

fn main() -> ExitCode {
    let filtre =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("exercices_qpur=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();

    let commande = Commande::parse();

    match Config::depuis_commande(commande).and_then(|c| app::executer(&c)) {
        Ok(msg) => {
            println!("{msg}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("erreur: {e:#}");
            ExitCode::FAILURE
        }
    }
}
