use crate::application::{dto::EventPageDto, queries::events::ListEventsQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventListParams {
    /// Return events with a sequence number greater than this.
    #[serde(default)]
    pub after: u64,
    /// Page size; 0 selects the default.
    #[serde(default)]
    pub limit: u32,
}

#[utoipa::path(
    get,
    path = "/api/v1/events",
    params(EventListParams),
    responses((status = 200, description = "Ledger events in commit order.", body = EventPageDto)),
    tag = "Events"
)]
pub async fn list_events(
    Extension(state): Extension<HttpState>,
    Query(params): Query<EventListParams>,
) -> HttpResult<Json<EventPageDto>> {
    state
        .services
        .event_queries
        .list_events(ListEventsQuery {
            after: params.after,
            limit: params.limit,
        })
        .into_http()
        .map(Json)
}
