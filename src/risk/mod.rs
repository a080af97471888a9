// Risk levels and their fixed presentation mapping.

pub mod level;
pub mod presentation;

pub use level::{CheckKind, RiskLevel};
pub use presentation::{risk_ui, RiskUi, Tone};
