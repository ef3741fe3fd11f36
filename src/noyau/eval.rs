//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> postfixe (shunting-yard) -> pile de f64 -> valeur
//!
//! Les valeurs non finies (∞, NaN) ne sont pas des erreurs : elles suivent
//! l’arithmétique IEEE (5/0 = ∞, 0/0 = NaN, sqrt(-1) = NaN).

use log::debug;

use super::erreur::{ErrorKind, EvalResult, EvaluationError};
use super::jetons::{format_tokens, tokenize, Function, Operator, Token};
use super::rpn::to_postfix;
use super::trig::AngleMode;

/// Démarche d’une évaluation : ce qui a pu être produit, même en cas d’échec.
#[derive(Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    /// None si la conversion en postfixe a échoué.
    pub rpn: Option<String>,
    pub resultat: EvalResult<f64>,
}

/// API publique : évalue une expression dans le mode d’angle donné.
pub fn evaluate_expression(text: &str, angle: AngleMode) -> EvalResult<f64> {
    let jetons = tokenize(text);
    let rpn = to_postfix(&jetons)?;
    evaluate(&rpn, angle)
}

/// Même pipeline, une seule fois, en gardant la démarche (jetons + postfixe).
pub fn evaluate_with_trace(text: &str, angle: AngleMode) -> Demarche {
    let jetons = tokenize(text);
    let jetons_txt = format_tokens(&jetons);

    match to_postfix(&jetons) {
        Ok(rpn) => Demarche {
            jetons: jetons_txt,
            rpn: Some(format_tokens(&rpn)),
            resultat: evaluate(&rpn, angle),
        },
        Err(e) => Demarche {
            jetons: jetons_txt,
            rpn: None,
            resultat: Err(e),
        },
    }
}

/// Évalue une suite postfixe avec une pile de f64.
///
/// - Nombre : empilé.
/// - Fonction (unaire) : a = sommet.
/// - Opérateur (binaire) : b = sommet, a = suivant.
/// - Parenthèse ou constante non résolue : UnknownOperator.
///
/// Il doit rester exactement une valeur à la fin.
pub fn evaluate(postfix: &[Token], angle: AngleMode) -> EvalResult<f64> {
    let mut pile: Vec<f64> = Vec::with_capacity(postfix.len());

    for &tok in postfix {
        let v = match tok {
            Token::Number(n) => n,
            Token::Function(f) => {
                let a = depile(&mut pile)?;
                apply_function(f, a, angle)?
            }
            Token::Operator(op) => {
                let b = depile(&mut pile)?;
                let a = depile(&mut pile)?;
                apply_operator(op, a, b)
            }
            Token::Constant(_) | Token::LeftParen | Token::RightParen => {
                return Err(EvaluationError::unknown_operator(tok));
            }
        };
        pile.push(v);
    }

    match pile.as_slice() {
        [v] => {
            debug!("résultat: {v} ({angle})");
            Ok(*v)
        }
        [] => Err(EvaluationError::stack_underflow()),
        // "2 3" : un opérateur manque entre les valeurs restantes
        reste => Err(EvaluationError::new(
            ErrorKind::StackUnderflow,
            format!(
                "expression invalide : {} valeurs sans opérateur",
                reste.len()
            ),
        )),
    }
}

fn depile(pile: &mut Vec<f64>) -> EvalResult<f64> {
    pile.pop().ok_or_else(EvaluationError::stack_underflow)
}

fn apply_operator(op: Operator, a: f64, b: f64) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Div => a / b,
        Operator::Pow => a.powf(b),
    }
}

fn apply_function(f: Function, a: f64, angle: AngleMode) -> EvalResult<f64> {
    let v = match f {
        // directes : l’ENTRÉE est un angle
        Function::Sin => angle.to_radians(a).sin(),
        Function::Cos => angle.to_radians(a).cos(),
        Function::Tan => angle.to_radians(a).tan(),
        // inverses : l’entrée est un rapport, le RÉSULTAT est un angle
        Function::Asin => angle.from_radians(a.asin()),
        Function::Acos => angle.from_radians(a.acos()),
        Function::Atan => angle.from_radians(a.atan()),
        Function::Log => a.log10(),
        Function::Ln => a.ln(),
        Function::Sqrt => a.sqrt(),
        Function::Fact => factorial(a)?,
    };
    Ok(v)
}

/// Produit itératif 2·3·…·n ; n entier et >= 0 (NaN et ∞ refusés).
pub fn factorial(n: f64) -> EvalResult<f64> {
    if n < 0.0 {
        return Err(EvaluationError::invalid_argument(format!(
            "fact : argument négatif ({n})"
        )));
    }
    if !n.is_finite() || n.fract() != 0.0 {
        return Err(EvaluationError::invalid_argument(format!(
            "fact : argument non entier ({n})"
        )));
    }

    let mut acc = 1.0_f64;
    let mut k = 2.0_f64;
    // au-delà de 170!, le produit vaut ∞ : inutile de continuer
    while k <= n && acc.is_finite() {
        acc *= k;
        k += 1.0;
    }
    Ok(acc)
}
