// src/noyau/rpn.rs
//
// Shunting-yard -> postfixe
// Règles:
// - Nombre : sortie directe. Constantes π, e : résolues en nombre ici.
// - Fonction : empilée, sortie après la parenthèse fermante de son argument.
// - Opérateur : dépile tant que le sommet est un opérateur de précédence >=
//   (pas de cas particulier pour ^ : groupement à gauche partout).
//
// NOTE:
// - Pas de moins unaire : "-5" arrive à l’évaluateur avec un opérande manquant.
// - Parenthèses déséquilibrées => MalformedExpression.

use log::debug;

use super::erreur::{EvalResult, EvaluationError};
use super::jetons::{format_tokens, Operator, Token};

/// Dépile tant que le sommet est un opérateur qui doit sortir avant `op`.
/// '(' et les fonctions bloquent.
fn doit_depiler(sommet: Option<&Token>, op: Operator) -> bool {
    match sommet {
        Some(Token::Operator(top)) => top.precedence() >= op.precedence(),
        _ => false,
    }
}

/// Convertit une suite de jetons en notation postfixe.
///
/// Exemple:
///   tokens: [12, +, 3, *, 4]
///   rpn:    [12, 3, 4, *, +]
pub fn to_postfix(tokens: &[Token]) -> EvalResult<Vec<Token>> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for &tok in tokens {
        match tok {
            Token::Number(_) => out.push(tok),

            Token::Constant(c) => match c.value() {
                Some(v) => out.push(Token::Number(v)),
                None => return Err(EvaluationError::unsupported_constant(c.symbol())),
            },

            Token::Function(_) | Token::LeftParen => ops.push(tok),

            Token::RightParen => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Token::LeftParen) => break,
                        Some(top) => out.push(top),
                        None => {
                            return Err(EvaluationError::malformed(
                                "parenthèse fermante sans ouvrante",
                            ))
                        }
                    }
                }

                // si une fonction est au sommet, elle s’applique à ce qui vient d’être fermé
                if let Some(Token::Function(_)) = ops.last() {
                    out.extend(ops.pop());
                }
            }

            Token::Operator(op) => {
                while doit_depiler(ops.last(), op) {
                    out.extend(ops.pop());
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Token::LeftParen) {
            return Err(EvaluationError::malformed("parenthèses non fermées"));
        }
        out.push(top);
    }

    debug!("postfixe: {}", format_tokens(&out));
    Ok(out)
}
