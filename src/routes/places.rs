use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::places_dto::{PlacesQuery, SuggestionsResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/places",
    params(
        ("query" = Option<String>, Query, description = "Partial town or postcode, at least 3 characters")
    ),
    responses(
        (status = 200, description = "Location suggestions", body = Json<SuggestionsResponse>),
        (status = 500, description = "Places API key not configured or upstream failure")
    )
)]
#[axum::debug_handler]
pub async fn suggest_places(
    State(state): State<AppState>,
    Query(query): Query<PlacesQuery>,
) -> Result<impl IntoResponse> {
    let suggestions = state
        .places
        .suggest(query.query.as_deref().unwrap_or(""))
        .await?;
    Ok(Json(SuggestionsResponse { suggestions }))
}
