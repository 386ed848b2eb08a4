// Patient inputs for the encephalopathy risk models

use serde::Serialize;
use std::fmt;

/// One of the five clinical inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Alcohol,
    Bilirubin,
    Creatinine,
    Sofa,
    Urea,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Alcohol,
        Field::Bilirubin,
        Field::Creatinine,
        Field::Sofa,
        Field::Urea,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Alcohol => "alcohol",
            Field::Bilirubin => "bilirubin",
            Field::Creatinine => "creatinine",
            Field::Sofa => "sofa",
            Field::Urea => "urea",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A new value for one field, carrying the field's own value type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Update {
    Alcohol(bool),
    Bilirubin(f64),
    Creatinine(f64),
    Sofa(i32),
    Urea(f64),
}

impl Update {
    pub fn field(&self) -> Field {
        match self {
            Update::Alcohol(_) => Field::Alcohol,
            Update::Bilirubin(_) => Field::Bilirubin,
            Update::Creatinine(_) => Field::Creatinine,
            Update::Sofa(_) => Field::Sofa,
            Update::Urea(_) => Field::Urea,
        }
    }
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Update::Alcohol(v) => write!(f, "alcohol = {v}"),
            Update::Bilirubin(v) => write!(f, "bilirubin = {v}"),
            Update::Creatinine(v) => write!(f, "creatinine = {v}"),
            Update::Sofa(v) => write!(f, "sofa = {v}"),
            Update::Urea(v) => write!(f, "urea = {v}"),
        }
    }
}

/// The five clinical inputs of one session.
///
/// Values are stored as given; no clinical range validation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct InputState {
    alcohol: bool,
    bilirubin: f64,
    creatinine: f64,
    sofa: i32,
    urea: f64,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alcohol(&self) -> bool {
        self.alcohol
    }

    pub fn bilirubin(&self) -> f64 {
        self.bilirubin
    }

    pub fn creatinine(&self) -> f64 {
        self.creatinine
    }

    pub fn sofa(&self) -> i32 {
        self.sofa
    }

    pub fn urea(&self) -> f64 {
        self.urea
    }

    pub fn set_alcohol(&mut self, alcohol: bool) -> bool {
        self.apply(Update::Alcohol(alcohol))
    }

    pub fn set_bilirubin(&mut self, bilirubin: f64) -> bool {
        self.apply(Update::Bilirubin(bilirubin))
    }

    pub fn set_creatinine(&mut self, creatinine: f64) -> bool {
        self.apply(Update::Creatinine(creatinine))
    }

    pub fn set_sofa(&mut self, sofa: i32) -> bool {
        self.apply(Update::Sofa(sofa))
    }

    pub fn set_urea(&mut self, urea: f64) -> bool {
        self.apply(Update::Urea(urea))
    }

    /// Store `update` if it differs from the current value.
    /// Returns whether the state changed.
    pub fn apply(&mut self, update: Update) -> bool {
        match update {
            Update::Alcohol(v) => replace(&mut self.alcohol, v),
            Update::Bilirubin(v) => replace(&mut self.bilirubin, v),
            Update::Creatinine(v) => replace(&mut self.creatinine, v),
            Update::Sofa(v) => replace(&mut self.sofa, v),
            Update::Urea(v) => replace(&mut self.urea, v),
        }
    }

    /// Restore every field to its default in one step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether `field` holds an entered value. Zero and `false` count as
    /// not entered.
    pub fn is_present(&self, field: Field) -> bool {
        match field {
            Field::Alcohol => self.alcohol,
            Field::Bilirubin => self.bilirubin != 0.0,
            Field::Creatinine => self.creatinine != 0.0,
            Field::Sofa => self.sofa != 0,
            Field::Urea => self.urea != 0.0,
        }
    }

    /// Value of `field` as a regression term; alcohol is 1 or 0.
    pub fn term(&self, field: Field) -> f64 {
        match field {
            Field::Alcohol => {
                if self.alcohol {
                    1.0
                } else {
                    0.0
                }
            }
            Field::Bilirubin => self.bilirubin,
            Field::Creatinine => self.creatinine,
            Field::Sofa => f64::from(self.sofa),
            Field::Urea => self.urea,
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
