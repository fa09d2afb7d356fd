//! Party composition analysis.
//!
//! Given the roster and the reference catalogues, derives aggregate
//! statistics and flags coverage gaps: who covers which skills, how
//! classes and roles are distributed, what damage types the party can
//! inflict, and what is missing or duplicated.
//!
//! Everything here is a pure function over immutable inputs. The same
//! roster and catalogues always produce deep-equal output, so callers are
//! free to memoize on input equality. No step mutates its inputs or
//! performs I/O.

mod alerts;
mod coverage;
mod damage;
mod distribution;
mod export;
mod metrics;

pub use alerts::CompositionAlerts;
pub use coverage::SkillCoverage;
pub use damage::{spell_damage_types, weapon_damage_types, DAMAGE_TYPES};
pub use distribution::DistributionEntry;
pub use export::{ExportFilters, MetricsExport};
pub use metrics::{analyze_party, Catalogues, DamageTypeBreakdown, PartyMetrics};

/// Label standing in for members without a class.
pub const UNASSIGNED_CLASS: &str = "Unassigned class";

/// Label standing in for members without a role.
pub const UNDEFINED_ROLE: &str = "Undefined role";
