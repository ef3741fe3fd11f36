//! Calculatrice scientifique — noyau d’évaluation d’expressions (f64)
//!
//! Pipeline : jetons -> postfixe (shunting-yard) -> pile de f64.
//! Le mode d’angle (RAD/DEG) est un paramètre explicite de chaque appel.
//!
//! - `noyau` : le calcul pur (aucun état entre deux appels)
//! - `app`   : l’état de session autour du noyau (historique, mémoire, mode)

pub mod app;
pub mod noyau;

pub use noyau::{evaluate_expression, AngleMode, ErrorKind, EvaluationError};
