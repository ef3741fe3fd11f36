// src/noyau/trig.rs
//
// Mode d’angle (RAD/DEG)
// ----------------------
// - sin/cos/tan : l’ENTRÉE passe par to_radians
// - asin/acos/atan : le RÉSULTAT passe par from_radians
//
// Le mode est un paramètre explicite : le noyau le lit, ne l’écrit jamais.

use std::f64::consts::PI;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleMode {
    #[default]
    Radian,
    Degree,
}

impl AngleMode {
    pub fn toggled(self) -> Self {
        match self {
            AngleMode::Radian => AngleMode::Degree,
            AngleMode::Degree => AngleMode::Radian,
        }
    }

    /// Angle saisi -> radians.
    pub fn to_radians(self, x: f64) -> f64 {
        match self {
            AngleMode::Radian => x,
            AngleMode::Degree => x * (PI / 180.0),
        }
    }

    /// Radians -> angle affiché.
    pub fn from_radians(self, x: f64) -> f64 {
        match self {
            AngleMode::Radian => x,
            AngleMode::Degree => x * (180.0 / PI),
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AngleMode::Radian => write!(f, "RAD"),
            AngleMode::Degree => write!(f, "DEG"),
        }
    }
}
