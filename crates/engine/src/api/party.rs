//! Party roster and analysis routes.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use bg3companion_domain::{
    analyze_party, ExportFilters, MetricsExport, PartyMember, PartyMetrics, LEVEL_CAP,
};

use super::ApiError;
use crate::app::App;

pub async fn get_roster(
    State(app): State<Arc<App>>,
) -> Result<Json<Vec<PartyMember>>, ApiError> {
    Ok(Json(app.party.load().await?))
}

/// Replace the stored roster.
pub async fn save_roster(
    State(app): State<Arc<App>>,
    Json(roster): Json<Vec<PartyMember>>,
) -> Result<Json<Vec<PartyMember>>, ApiError> {
    validate_roster(&roster)?;
    app.party.save(&roster).await?;
    Ok(Json(roster))
}

/// Metrics for the stored roster.
pub async fn stored_roster_metrics(
    State(app): State<Arc<App>>,
) -> Result<Json<PartyMetrics>, ApiError> {
    let roster = app.party.load().await?;
    Ok(Json(analyze_party(&roster, &app.catalogues())))
}

/// Metrics for a roster supplied by the caller (used by the editor to
/// preview changes without saving).
pub async fn roster_metrics(
    State(app): State<Arc<App>>,
    Json(roster): Json<Vec<PartyMember>>,
) -> Result<Json<PartyMetrics>, ApiError> {
    validate_roster(&roster)?;
    Ok(Json(analyze_party(&roster, &app.catalogues())))
}

/// Shareable export of a filtered view over the stored roster.
pub async fn export_metrics(
    State(app): State<Arc<App>>,
    Json(filters): Json<ExportFilters>,
) -> Result<Json<MetricsExport>, ApiError> {
    let roster = app.party.load().await?;
    Ok(Json(MetricsExport::build(&roster, &app.catalogues(), filters)))
}

/// Shape validation happens here at the ingestion boundary; the analyzer
/// assumes well-formed members.
fn validate_roster(roster: &[PartyMember]) -> Result<(), ApiError> {
    for member in roster {
        if member.name.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "Party member name is required".to_string(),
            ));
        }
        if member.level < 1 || member.level > LEVEL_CAP {
            return Err(ApiError::BadRequest(format!(
                "Level {} for {} is outside 1..={}",
                member.level, member.name, LEVEL_CAP
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_validation_rejects_out_of_range_levels() {
        let mut member = PartyMember::new("Gale");
        member.level = 13;
        assert!(validate_roster(&[member]).is_err());
    }

    #[test]
    fn roster_validation_accepts_a_normal_party() {
        let roster = vec![
            PartyMember::new("Gale").with_level(5),
            PartyMember::new("Karlach").with_level(5),
        ];
        assert!(validate_roster(&roster).is_ok());
    }

    #[test]
    fn roster_validation_rejects_blank_names() {
        assert!(validate_roster(&[PartyMember::new("  ")]).is_err());
    }
}
