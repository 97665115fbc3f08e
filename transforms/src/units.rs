use serde::{Deserialize, Serialize};

/// The physical quantity a trace's samples represent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Units {
    #[serde(rename = "acc")]
    #[strum(to_string = "acceleration", serialize = "acc")]
    Acceleration,
    #[serde(rename = "vel")]
    #[strum(to_string = "velocity", serialize = "vel", serialize = "veloc")]
    Velocity,
    #[serde(rename = "disp")]
    #[strum(to_string = "displacement", serialize = "disp")]
    Displacement,
}
