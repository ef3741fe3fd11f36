//! Noyau de calcul (f64)
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (alternance fixe, caractères inconnus ignorés)
//! - rpn.rs      : shunting-yard -> postfixe
//! - eval.rs     : pile de f64 + pipeline complet
//! - trig.rs     : mode d’angle (RAD/DEG) et conversions
//! - erreur.rs   : EvaluationError + ErrorKind

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod rpn;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::{ErrorKind, EvalResult, EvaluationError};
pub use eval::{evaluate, evaluate_expression, evaluate_with_trace, Demarche};
pub use jetons::{tokenize, Token};
pub use rpn::to_postfix;
pub use trig::AngleMode;
