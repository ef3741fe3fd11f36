// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer l’état de session (etat.rs)
// - Ré-exporter Session (pour main.rs: use calculatrice_sci::app::Session;)
// - Traduire une ligne saisie en commande (touches mémoire, DEG/RAD, historique)
//
// Important:
// - Aucune évaluation ici : tout passe par Session::submit -> noyau.

pub mod etat;

pub use etat::{Entry, Session, SessionConfig};

use crate::noyau::{AngleMode, EvalResult};

/// Une ligne saisie : soit une touche de session, soit une expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Commande<'a> {
    MemoryAdd,
    MemorySub,
    MemoryClear,
    MemoryRecall,
    Angle(AngleMode),
    Historique,
    EffacerHistorique,
    Expression(&'a str),
}

impl<'a> Commande<'a> {
    pub fn parse(ligne: &'a str) -> Self {
        match ligne.trim() {
            "m+" => Commande::MemoryAdd,
            "m-" => Commande::MemorySub,
            "mc" => Commande::MemoryClear,
            "mr" => Commande::MemoryRecall,
            "deg" => Commande::Angle(AngleMode::Degree),
            "rad" => Commande::Angle(AngleMode::Radian),
            "hist" => Commande::Historique,
            "clear" => Commande::EffacerHistorique,
            expr => Commande::Expression(expr),
        }
    }
}

/// Ce que la commande a produit, pour que l’appelant l’affiche.
#[derive(Clone, Debug, PartialEq)]
pub enum Sortie {
    Valeur(f64),
    Angle(AngleMode),
    Historique(Vec<Entry>),
    Rien,
}

impl Session {
    pub fn executer(&mut self, cmd: Commande<'_>) -> EvalResult<Sortie> {
        let sortie = match cmd {
            Commande::MemoryAdd => {
                self.memory_add();
                Sortie::Rien
            }
            Commande::MemorySub => {
                self.memory_sub();
                Sortie::Rien
            }
            Commande::MemoryClear => {
                self.memory_clear();
                Sortie::Rien
            }
            Commande::MemoryRecall => Sortie::Valeur(self.memory_recall()),
            Commande::Angle(angle) => {
                self.set_angle(angle);
                Sortie::Angle(angle)
            }
            Commande::Historique => Sortie::Historique(self.history().cloned().collect()),
            Commande::EffacerHistorique => {
                self.clear_history();
                Sortie::Rien
            }
            Commande::Expression(expr) => Sortie::Valeur(self.submit(expr)?),
        };
        Ok(sortie)
    }
}
