//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::assets::IconIndex;
use crate::infrastructure::companion::{
    CompanionDb, SqliteBestiaryRepo, SqliteBuildRepo, SqliteLootRepo, SqlitePartyRepo,
};
use crate::infrastructure::ports::PartyRepo;
use crate::infrastructure::reference::ReferenceData;

/// Main application state.
///
/// Holds the companion repositories, the reference snapshots and the icon
/// index. Passed to HTTP handlers via Axum state.
pub struct App {
    pub loot: SqliteLootRepo,
    pub builds: SqliteBuildRepo,
    pub bestiary: SqliteBestiaryRepo,
    pub party: Arc<dyn PartyRepo>,
    pub reference: ReferenceData,
    pub icons: IconIndex,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(db: &CompanionDb, reference: ReferenceData, icons: IconIndex) -> Self {
        Self {
            loot: SqliteLootRepo::new(db),
            builds: SqliteBuildRepo::new(db),
            bestiary: SqliteBestiaryRepo::new(db),
            party: Arc::new(SqlitePartyRepo::new(db)),
            reference,
            icons,
        }
    }

    /// The analyzer's view of the reference snapshots.
    pub fn catalogues(&self) -> bg3companion_domain::Catalogues<'_> {
        bg3companion_domain::Catalogues {
            spells: &self.reference.spells,
            weapons: &self.reference.weapons,
            skills: &self.reference.skills,
            roles: &self.reference.roles,
        }
    }
}
