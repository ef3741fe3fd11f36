// src/noyau/erreur.rs
//
// Erreurs du noyau : une seule erreur typée remonte à l’appelant,
// avec sa catégorie et un message lisible (affiché tel quel par l’UI).

use std::fmt;

/// Catégorie d’échec d’une évaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Pile vide au moment de dépiler un opérande (postfixe mal formée).
    StackUnderflow,
    /// Jeton absent des tables opérateurs/fonctions (parenthèse, constante non résolue).
    UnknownOperator,
    /// Argument hors domaine (ex: fact(-1), fact(2.5)).
    InvalidArgument,
    /// Parenthèses déséquilibrées ou valeurs en trop sur la pile.
    MalformedExpression,
    /// Constante reconnue mais sans valeur réelle (i).
    UnsupportedConstant,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            ErrorKind::StackUnderflow => "StackUnderflow",
            ErrorKind::UnknownOperator => "UnknownOperator",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::MalformedExpression => "MalformedExpression",
            ErrorKind::UnsupportedConstant => "UnsupportedConstant",
        };
        write!(f, "{s}")
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct EvaluationError {
    pub kind: ErrorKind,
    pub message: String,
}

pub type EvalResult<T> = Result<T, EvaluationError>;

impl EvaluationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn stack_underflow() -> Self {
        Self::new(ErrorKind::StackUnderflow, "expression invalide : opérande manquant")
    }

    pub fn unknown_operator(jeton: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::UnknownOperator,
            format!("opérateur inconnu : '{jeton}'"),
        )
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedExpression, message)
    }

    pub fn unsupported_constant(nom: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::UnsupportedConstant,
            format!("constante non prise en charge : '{nom}' (nombres complexes hors domaine)"),
        )
    }
}
