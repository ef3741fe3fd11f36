//! Tests scientifiques (campagne) : propriétés observables du noyau.
//!
//! - précédence + groupement à gauche (^ compris)
//! - fonctions et mode d’angle
//! - constantes
//! - factorielle et ses refus
//! - arithmétique IEEE (∞, NaN) sans erreur
//! - déterminisme bit à bit

use std::f64::consts::{E, PI};
use std::time::{Duration, Instant};

use super::jetons::{format_tokens, tokenize};
use super::rpn::to_postfix;
use super::{evaluate_expression, AngleMode, ErrorKind};

const EPS: f64 = 1e-12;

fn eval_ok(expr: &str, angle: AngleMode) -> f64 {
    evaluate_expression(expr, angle).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn rad(expr: &str) -> f64 {
    eval_ok(expr, AngleMode::Radian)
}

fn deg(expr: &str) -> f64 {
    eval_ok(expr, AngleMode::Degree)
}

fn assert_proche(obtenu: f64, attendu: f64, expr: &str) {
    assert!(
        (obtenu - attendu).abs() < EPS,
        "expr={expr:?} obtenu={obtenu} attendu={attendu}"
    );
}

fn assert_kind(expr: &str, kind: ErrorKind) {
    match evaluate_expression(expr, AngleMode::Radian) {
        Ok(v) => panic!("expr={expr:?} devait échouer, valeur {v}"),
        Err(e) => assert_eq!(e.kind, kind, "expr={expr:?} err={e}"),
    }
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Pipeline ------------------------ */

#[test]
fn sci_pipeline_exemple() {
    let jetons = tokenize("12+3*4");
    assert_eq!(format_tokens(&jetons), "12 + 3 * 4");

    let rpn = to_postfix(&jetons).unwrap();
    assert_eq!(format_tokens(&rpn), "12 3 4 * +");

    assert_eq!(rad("12+3*4"), 24.0);
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn sci_precedence() {
    assert_eq!(rad("2+3*4"), 14.0);
    assert_eq!(rad("(2+3)*4"), 20.0);
    assert_eq!(rad("2*3^2"), 18.0);
}

#[test]
fn sci_puissance_groupee_a_gauche() {
    // (2^3)^2 = 64, et non 2^(3^2) = 512
    assert_eq!(rad("2^3^2"), 64.0);
    assert_eq!(rad("2^(3^2)"), 512.0);
}

/* ------------------------ Fonctions + angle ------------------------ */

#[test]
fn sci_fonctions() {
    assert_eq!(rad("sqrt(16)"), 4.0);
    assert_eq!(rad("sin(0)"), 0.0);
    assert_eq!(deg("sin(0)"), 0.0);
    assert_proche(deg("sin(90)"), 1.0, "sin(90)");
    assert_proche(deg("cos(180)"), -1.0, "cos(180)");
    assert_proche(deg("tan(45)"), 1.0, "tan(45)");
    assert_proche(rad("cos(π)"), -1.0, "cos(π)");
}

#[test]
fn sci_inverses_selon_mode() {
    assert_proche(rad("asin(1)"), PI / 2.0, "asin(1)");
    assert_proche(deg("asin(1)"), 90.0, "asin(1)");
    assert_proche(deg("acos(0-1)"), 180.0, "acos(-1)");
    assert_proche(deg("atan(1)"), 45.0, "atan(1)");
    // l’entrée des inverses n’est jamais convertie
    assert!(deg("asin(90)").is_nan());
}

#[test]
fn sci_aller_retour_degres() {
    for angle in [0.0, 15.0, 30.0, 45.0, 60.0, 89.0] {
        let v = deg(&format!("asin(sin({angle}))"));
        assert!((v - angle).abs() < 1e-9, "angle={angle} v={v}");
    }
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn sci_constantes() {
    assert_eq!(rad("π"), PI);
    assert_eq!(rad("e"), E);
    assert_eq!(rad("2*π"), 2.0 * PI);
    assert_kind("i", ErrorKind::UnsupportedConstant);
}

/* ------------------------ Factorielle ------------------------ */

#[test]
fn sci_factorielle() {
    assert_eq!(rad("fact(5)"), 120.0);
    assert_eq!(rad("fact(0)"), 1.0);
    assert_eq!(rad("fact(3)+1"), 7.0);
    assert_kind("fact(0-1)", ErrorKind::InvalidArgument);
    assert_kind("fact(2.5)", ErrorKind::InvalidArgument);
}

/* ------------------------ IEEE : pas d’erreur ------------------------ */

#[test]
fn sci_division_par_zero() {
    let v = rad("5/0");
    assert!(v.is_infinite() && v.is_sign_positive());
    assert!(rad("0/0").is_nan());
    assert!(rad("1+5/0").is_infinite());
}

/* ------------------------ Structure ------------------------ */

#[test]
fn sci_structure_invalide() {
    assert_kind("3+", ErrorKind::StackUnderflow);
    assert_kind("*3", ErrorKind::StackUnderflow);
    assert_kind("(1+2", ErrorKind::MalformedExpression);
    assert_kind("1+2)", ErrorKind::MalformedExpression);
    assert_kind("1 2", ErrorKind::StackUnderflow);
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn sci_idempotence_bit_a_bit() {
    let exprs = [
        "sin(1)+cos(2)*tan(3)",
        "sqrt(2)^π",
        "ln(7)/log(3)",
        "fact(20)/fact(18)",
        "0/0",
    ];
    for expr in exprs {
        for angle in [AngleMode::Radian, AngleMode::Degree] {
            let a = eval_ok(expr, angle);
            let b = eval_ok(expr, angle);
            assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?} angle={angle}");
        }
    }
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut expr = String::new();
    for k in 0..2000 {
        if k > 0 {
            expr.push('+');
        }
        expr.push_str("0.5");
        budget(t0, max);
    }

    assert_eq!(rad(&expr), 1000.0);
    budget(t0, max);
}

#[test]
fn sci_stress_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // pile explicite : pas de récursion, pas de risque de débordement
    let profondeur = 5000;
    let expr = format!("{}1{}", "(".repeat(profondeur), ")".repeat(profondeur));
    budget(t0, max);

    assert_eq!(rad(&expr), 1.0);
    budget(t0, max);
}
