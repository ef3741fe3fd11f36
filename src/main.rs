// src/main.rs
//
// Calculatrice — point d’entrée ligne de commande
// -----------------------------------------------
// - `calc "2+3*4"`      : une expression, un résultat
// - `calc`              : lecture ligne à ligne sur stdin (m+ m- mc mr deg rad hist clear)
// - `--degrees`         : démarre en mode DEG
// - `--trace`           : affiche la démarche (jetons + postfixe)
//
// Journalisation : RUST_LOG=debug calc ...

use std::io::{stdin, BufRead};
use std::process::ExitCode;

use calculatrice_sci::app::etat::HISTORIQUE_DEFAUT;
use calculatrice_sci::app::{Commande, Session, SessionConfig, Sortie};
use calculatrice_sci::noyau::AngleMode;
use clap::Parser;
use log::info;

/// Calculatrice scientifique : nombres, + - * / ^, parenthèses,
/// sin cos tan asin acos atan log ln sqrt fact, constantes π et e.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Angles en degrés (radians par défaut).
    #[arg(short, long)]
    degrees: bool,

    /// Affiche les jetons et la forme postfixe avant le résultat.
    #[arg(short, long)]
    trace: bool,

    /// Taille maximale de l’historique.
    #[arg(long, default_value_t = HISTORIQUE_DEFAUT)]
    history: usize,

    /// Expression à évaluer ; sans argument, lit stdin ligne par ligne.
    expression: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let angle = if args.degrees {
        AngleMode::Degree
    } else {
        AngleMode::Radian
    };

    let mut session = Session::new(SessionConfig {
        history_capacity: args.history,
        angle,
    });

    match &args.expression {
        Some(expr) => {
            if run(&mut session, expr, args.trace) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        None => {
            info!("lecture de stdin ({angle})");
            for line in stdin().lock().lines().map_while(Result::ok) {
                if line.trim().is_empty() {
                    continue;
                }
                run(&mut session, &line, args.trace);
            }
            ExitCode::SUCCESS
        }
    }
}

/// Exécute une ligne ; false si elle a échoué.
fn run(session: &mut Session, line: &str, trace: bool) -> bool {
    let cmd = Commande::parse(line);
    let resultat = session.executer(cmd);

    // une seule évaluation : la démarche vient de la session
    if trace && matches!(cmd, Commande::Expression(_)) {
        if let Some(d) = session.demarche() {
            println!("jetons   = {}", d.jetons);
            match &d.rpn {
                Some(rpn) => println!("postfixe = {rpn}"),
                None => println!("postfixe = (conversion impossible)"),
            }
        }
    }

    match resultat {
        Ok(Sortie::Valeur(v)) => println!("{v}"),
        Ok(Sortie::Angle(a)) => println!("[{a}]"),
        Ok(Sortie::Historique(h)) => {
            for e in h {
                println!("{} = {}", e.expression, e.result);
            }
        }
        Ok(Sortie::Rien) => {}
        Err(_) => {
            eprintln!("Erreur: {}", session.display);
            return false;
        }
    }
    true
}
