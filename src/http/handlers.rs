//! HTTP handlers for the REST API and the display markup.
//!
//! Each handler delegates to the service layer. Failures surface as the
//! JSON error envelope; handlers never return a non-JSON body or panic.

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use chrono::Utc;
use tracing::warn;

use super::dto::{ApiResponse, HealthResponse, ProjectionDto, SnapshotDto};
use super::error::ErrorBody;
use super::state::AppState;
use crate::services::snapshot;

/// GET /api/zmanim
///
/// The full display snapshot for the current moment.
pub async fn zmanim_api(State(state): State<AppState>) -> Json<ApiResponse<SnapshotDto>> {
    let result = snapshot::current_snapshot(
        state.timezone(),
        state.zmanim(),
        state.mincha(),
        state.reading(),
        state.hebcal(),
    )
    .await;

    match result {
        Ok(snap) => Json(ApiResponse::Data(snap.into())),
        Err(e) => {
            warn!(error = %e, "zmanim query failed");
            Json(ApiResponse::Error(ErrorBody::from(&e)))
        }
    }
}

/// GET /api/next
///
/// The next upcoming tracked moment.
pub async fn next_api(State(state): State<AppState>) -> Json<ApiResponse<ProjectionDto>> {
    match snapshot::current_projection(state.timezone(), state.zmanim()) {
        Ok(projection) => Json(ApiResponse::Data(projection.into())),
        Err(e) => {
            warn!(error = %e, "next-event query failed");
            Json(ApiResponse::Error(ErrorBody::from(&e)))
        }
    }
}

/// GET /health
///
/// Liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// GET /
///
/// Landing page with basic info.
pub async fn home() -> Html<&'static str> {
    Html(
        "<h1>Zmanim Tracker</h1>\
         <p>Jewish Halachic Times Display</p>\
         <p>API endpoint: <a href=\"/api/zmanim\">/api/zmanim</a></p>",
    )
}

/// GET /html
///
/// Display markup for the e-ink plugin.
pub async fn html_markup(State(state): State<AppState>) -> Html<String> {
    let result = snapshot::current_snapshot(
        state.timezone(),
        state.zmanim(),
        state.mincha(),
        state.reading(),
        state.hebcal(),
    )
    .await;

    match result {
        Ok(snap) => Html(render_display(&SnapshotDto::from(snap))),
        Err(e) => Html(format!(
            "<div class=\"zmanim-error\">{}</div>",
            ErrorBody::from(&e).error
        )),
    }
}

fn render_display(snap: &SnapshotDto) -> String {
    let mut rows = String::new();
    for (label, time) in &snap.times {
        rows.push_str(&format!(
            "<tr><td class=\"label\">{}</td><td class=\"time\">{}</td></tr>\n",
            label, time
        ));
    }

    let mut subtitle = snap.date.clone();
    if let Some(hebrew) = &snap.hebrew_date {
        subtitle.push_str(&format!(" &middot; {}", hebrew));
    }
    if let Some(parasha) = &snap.parasha {
        subtitle.push_str(&format!(" &middot; {}", parasha));
    }

    format!(
        "<div class=\"zmanim-display\">\n\
         <h1>{period}</h1>\n\
         <p class=\"subtitle\">{subtitle}</p>\n\
         <p class=\"now\">{current}</p>\n\
         <table>\n{rows}</table>\n\
         <p class=\"location\">{location}</p>\n\
         </div>",
        period = snap.period,
        subtitle = subtitle,
        current = snap.current_time,
        rows = rows,
        location = snap.location,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_display_lists_times_in_order() {
        let dto = SnapshotDto {
            period: "Shabbos Afternoon".to_string(),
            current_time: "2:00 PM".to_string(),
            date: "Saturday, August 29, 2026".to_string(),
            times: vec![
                ("Mincha Ketana".to_string(), "1:30 PM".to_string()),
                ("Sunset".to_string(), "7:45 PM".to_string()),
            ],
            location: "Milwaukee, WI".to_string(),
            hebrew_date: Some("16th of Elul, 5786".to_string()),
            parasha: Some("Parashat Ki Seitzei".to_string()),
        };

        let html = render_display(&dto);
        assert!(html.contains("<h1>Shabbos Afternoon</h1>"));
        let mincha = html.find("Mincha Ketana").unwrap();
        let sunset = html.find("Sunset").unwrap();
        assert!(mincha < sunset);
        assert!(html.contains("Parashat Ki Seitzei"));
    }
}
