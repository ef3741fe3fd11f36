//! src/app/etat.rs
//!
//! État de session (sans vue, sans persistance).
//!
//! Rôle : contenir ce que la calculatrice garde entre deux évaluations
//! (mode d’angle, historique, mémoire, affichage) et offrir les actions
//! des touches (m+, m-, mc, mr, DEG/RAD) sans logique d’affichage.
//!
//! Contrats :
//! - Le noyau ne lit que le mode d’angle passé en paramètre ; seul l’état le modifie.
//! - Historique borné, le plus récent en tête.
//! - Une erreur remplace l’affichage, l’historique reste intact.

use std::collections::VecDeque;

use log::{debug, info};

use crate::noyau::{evaluate_with_trace, AngleMode, Demarche, EvalResult};

/// Taille par défaut de l’historique.
pub const HISTORIQUE_DEFAUT: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub history_capacity: usize,
    pub angle: AngleMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_capacity: HISTORIQUE_DEFAUT,
            angle: AngleMode::Radian,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub expression: String,
    pub result: f64,
}

#[derive(Clone, Debug)]
pub struct Session {
    angle: AngleMode,
    capacite: usize,
    history: VecDeque<Entry>,

    // --- mémoire (m+, m-, mc, mr) ---
    memory: f64,

    // --- sorties ---
    // Dernier résultat valide : base de m+ / m-.
    courant: f64,
    pub display: String,

    // Démarche de la dernière évaluation (jetons + postfixe), succès ou échec.
    demarche: Option<Demarche>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            angle: config.angle,
            capacite: config.history_capacity,
            history: VecDeque::new(),
            memory: 0.0,
            courant: 0.0,
            display: String::new(),
            demarche: None,
        }
    }

    /* ------------------------ Évaluation ------------------------ */

    /// "=" : évalue avec le mode d’angle courant.
    ///
    /// Succès : entrée ajoutée en tête d’historique, affichage = résultat.
    /// Échec : affichage = message d’erreur, rien d’autre ne bouge.
    pub fn submit(&mut self, expression: &str) -> EvalResult<f64> {
        let demarche = evaluate_with_trace(expression, self.angle);
        let resultat = demarche.resultat.clone();
        self.demarche = Some(demarche);

        match resultat {
            Ok(v) => {
                self.courant = v;
                self.display = v.to_string();
                self.push_history(Entry {
                    expression: expression.to_string(),
                    result: v,
                });
                Ok(v)
            }
            Err(e) => {
                debug!("échec {expression:?}: {e}");
                self.display = e.to_string();
                Err(e)
            }
        }
    }

    /// Démarche de la dernière évaluation soumise.
    pub fn demarche(&self) -> Option<&Demarche> {
        self.demarche.as_ref()
    }

    fn push_history(&mut self, entry: Entry) {
        if self.capacite == 0 {
            return;
        }
        self.history.push_front(entry);
        self.history.truncate(self.capacite);
    }

    /// Historique, le plus récent d’abord.
    pub fn history(&self) -> impl Iterator<Item = &Entry> {
        self.history.iter()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /* ------------------------ Mode d’angle ------------------------ */

    pub fn angle(&self) -> AngleMode {
        self.angle
    }

    pub fn set_angle(&mut self, angle: AngleMode) {
        if self.angle != angle {
            info!("mode d’angle : {} -> {angle}", self.angle);
        }
        self.angle = angle;
    }

    pub fn toggle_angle(&mut self) -> AngleMode {
        self.set_angle(self.angle.toggled());
        self.angle
    }

    /* ------------------------ Mémoire ------------------------ */

    /// Dernier résultat valide (0 si aucun).
    pub fn current(&self) -> f64 {
        self.courant
    }

    /// m+
    pub fn memory_add(&mut self) {
        self.memory += self.courant;
    }

    /// m-
    pub fn memory_sub(&mut self) {
        self.memory -= self.courant;
    }

    /// mc
    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    /// mr : la valeur rappelée devient la valeur courante.
    pub fn memory_recall(&mut self) -> f64 {
        self.courant = self.memory;
        self.display = self.memory.to_string();
        self.memory
    }
}
