//! GREENBOARD Core - Entity Types
//!
//! Pure data structures with no pipeline logic. All other crates depend on
//! this. This crate contains ONLY data types plus small total helpers:
//!
//! - Cell grids as delivered by the source collaborator (`CellValue`,
//!   `SheetGrid`)
//! - The fixed field vocabulary and per-block column maps (`FieldName`,
//!   `ColumnMap`)
//! - Extracted operation records (`OperationConfig`, `ParticipantRecord`,
//!   `OperationBlock`)
//! - Streak accumulation results (`ParticipantStats`, `AchievementEvent`)
//! - Soft diagnostics and the fatal error taxonomy (`Diagnostic`,
//!   `BoardError`)

pub mod cell;
pub mod config;
pub mod diag;
pub mod error;
pub mod fields;
pub mod record;
pub mod stats;

pub use cell::{CellValue, SheetGrid};
pub use config::RunConfig;
pub use diag::{Diagnostic, DiagnosticKind};
pub use error::{BoardError, BoardResult};
pub use fields::{ColumnMap, FieldName};
pub use record::{OperationBlock, OperationConfig, ParticipantRecord};
pub use stats::{AchievementEvent, AchievementKind, ParticipantStats};

/// Rolling-counter threshold at which a streak achievement is awarded.
pub const STREAK_THRESHOLD: u32 = 5;
