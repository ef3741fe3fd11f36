// src/noyau/jetons.rs

use std::fmt;
use std::sync::OnceLock;

use log::trace;
use regex::Regex;

/// Opérateurs binaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    /// Pas de table d’associativité : la comparaison `>=` du convertisseur
    /// groupe tout à gauche, `^` compris.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Pow => 3,
        }
    }

    pub const fn arity(self) -> usize {
        2
    }
}

/// Fonctions nommées (toutes unaires).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Ln,
    Sqrt,
    Fact,
}

impl Function {
    pub const ALL: [Function; 10] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Asin,
        Function::Acos,
        Function::Atan,
        Function::Log,
        Function::Ln,
        Function::Sqrt,
        Function::Fact,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Function::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Log => "log",
            Function::Ln => "ln",
            Function::Sqrt => "sqrt",
            Function::Fact => "fact",
        }
    }

    pub const fn arity(self) -> usize {
        1
    }
}

/// Constantes reconnues par le lexique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
    /// Unité imaginaire : reconnue mais sans valeur réelle.
    I,
}

impl Constant {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "π" => Some(Constant::Pi),
            "e" => Some(Constant::E),
            "i" => Some(Constant::I),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Constant::Pi => "π",
            Constant::E => "e",
            Constant::I => "i",
        }
    }

    /// Valeur numérique ; None pour `i`.
    pub fn value(self) -> Option<f64> {
        match self {
            Constant::Pi => Some(std::f64::consts::PI),
            Constant::E => Some(std::f64::consts::E),
            Constant::I => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Constant(Constant),
    Operator(Operator),
    Function(Function),
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Constant(c) => write!(f, "{}", c.symbol()),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::Function(func) => write!(f, "{}", func.name()),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

// Ordre de l’alternance = ordre de priorité à une même position.
const MOTIF: &str = r"(?P<num>[0-9]+(?:\.[0-9]*)?|\.[0-9]+)|(?P<op>[-+*/^()])|(?P<func>asin|acos|atan|sin|cos|tan|log|ln|sqrt|fact)|(?P<cst>π|e|i)";

fn motif() -> &'static Regex {
    static MOTIF_RE: OnceLock<Regex> = OnceLock::new();
    MOTIF_RE.get_or_init(|| Regex::new(MOTIF).expect("motif du lexique"))
}

/// Tokenize une chaîne en jetons.
///
/// Extrait toutes les correspondances disjointes du motif, de gauche à droite :
/// - nombres (12, 3.5, 4., .25)
/// - opérateurs + - * / ^ et parenthèses
/// - fonctions sin cos tan asin acos atan log ln sqrt fact
/// - constantes π, e, i
///
/// Tout autre caractère est ignoré (espaces compris). Aucune validation
/// syntaxique ici : "2sin3" donne [2, sin, 3].
pub fn tokenize(s: &str) -> Vec<Token> {
    let mut out = Vec::new();

    for caps in motif().captures_iter(s) {
        let tok = if let Some(m) = caps.name("num") {
            match m.as_str().parse::<f64>() {
                Ok(n) => Token::Number(n),
                Err(_) => continue,
            }
        } else if let Some(m) = caps.name("op") {
            match m.as_str() {
                "(" => Token::LeftParen,
                ")" => Token::RightParen,
                sym => match sym.chars().next().and_then(Operator::from_symbol) {
                    Some(op) => Token::Operator(op),
                    None => continue,
                },
            }
        } else if let Some(m) = caps.name("func") {
            match Function::from_name(m.as_str()) {
                Some(func) => Token::Function(func),
                None => continue,
            }
        } else if let Some(m) = caps.name("cst") {
            match Constant::from_symbol(m.as_str()) {
                Some(c) => Token::Constant(c),
                None => continue,
            }
        } else {
            continue;
        };

        out.push(tok);
    }

    trace!("jetons {s:?} -> {}", format_tokens(&out));
    out
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
