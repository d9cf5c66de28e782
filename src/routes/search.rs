use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{metric_base_score, resolve_proximity, EngineError, Recommender};
use crate::models::{
    AdvancedSearchRequest, AreaSummary, AreasResponse, Attribute, CountiesResponse, ErrorResponse,
    HealthResponse, LocationDetailsResponse, ParameterInfo, ParametersResponse, SearchResponse,
    ShadeRequest, ShadeResponse, VenuesResponse,
};
use crate::services::Catalog;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Recommender,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/search/shade", web::post().to(shade))
        .route("/search/advanced", web::post().to(advanced_search))
        .route("/areas", web::get().to(areas))
        .route("/location/{area}", web::get().to(location_details))
        .route("/parameters", web::get().to(parameters))
        .route("/counties", web::get().to(counties))
        .route("/venues", web::get().to(venues));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn invalid_filters(err: &EngineError) -> HttpResponse {
    tracing::info!("Rejected filter spec: {}", err);
    bad_request("Invalid filters", err.to_string())
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.venues().is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Re-shade the candidates currently on the map
///
/// POST /api/v1/search/shade
///
/// Request body:
/// ```json
/// {
///   "candidates": [{ "area": "string", "coordinates": [lon, lat], ... }],
///   "filters": { "population_density": { "min": null, "max": 20000 }, ... }
/// }
/// ```
async fn shade(
    state: web::Data<AppState>,
    req: web::Json<ShadeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for shade request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    match state
        .recommender
        .shade(&req.candidates, state.catalog.venues(), &req.filters)
    {
        Ok(candidates) => HttpResponse::Ok().json(ShadeResponse {
            request_id: uuid::Uuid::new_v4(),
            candidates,
        }),
        Err(e) => invalid_filters(&e),
    }
}

/// Authoritative filtered search over the catalog
///
/// POST /api/v1/search/advanced
///
/// Request body:
/// ```json
/// {
///   "filters": { "radius_km": { "max": 8.0 }, "query": "string", "counties": [] },
///   "business_type": "restaurant",
///   "limit": 20
/// }
/// ```
async fn advanced_search(
    state: web::Data<AppState>,
    req: web::Json<AdvancedSearchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for advanced search request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    tracing::info!(
        "Advanced search: query={:?}, business_type={}, limit={:?}",
        req.filters.query,
        req.business_type,
        req.limit
    );

    let result = match state.recommender.search(
        state.catalog.candidates(),
        state.catalog.venues(),
        &req.filters,
        &req.business_type,
        req.limit.map(usize::from),
    ) {
        Ok(result) => result,
        Err(e) => return invalid_filters(&e),
    };

    let response = SearchResponse {
        request_id: uuid::Uuid::new_v4(),
        message: format!(
            "Found {} locations matching '{}' with applied filters",
            result.matches.len(),
            req.filters.query
        ),
        matches: result.matches,
        total_candidates: result.total_candidates,
        excluded: result.excluded,
    };

    tracing::info!(
        "Returning {} locations (from {} candidates, {} excluded)",
        response.matches.len(),
        response.total_candidates,
        response.excluded
    );

    HttpResponse::Ok().json(response)
}

/// List every catalog area with its coordinates and county
///
/// Unlike the advanced search this is never truncated, so clients can load
/// the full map before shading it.
async fn areas(state: web::Data<AppState>) -> impl Responder {
    let areas: Vec<AreaSummary> = state.catalog.candidates().iter().map(AreaSummary::from).collect();

    HttpResponse::Ok().json(AreasResponse {
        total: areas.len(),
        areas,
    })
}

/// Metrics and nearest venue for one area
///
/// GET /api/v1/location/{area}
async fn location_details(
    state: web::Data<AppState>,
    area: web::Path<String>,
) -> impl Responder {
    let area = area.into_inner();

    let Some(candidate) = state.catalog.find_area(&area) else {
        tracing::info!("Location lookup for unknown area {:?}", area);
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "Area not found".to_string(),
            message: format!("No catalog area named '{}'", area),
            status_code: 404,
        });
    };

    HttpResponse::Ok().json(LocationDetailsResponse {
        metric_score: metric_base_score(candidate),
        proximity: resolve_proximity(candidate.coordinate, state.catalog.venues()),
        candidate: candidate.clone(),
    })
}

/// List the parameters a filter spec can bound
async fn parameters() -> impl Responder {
    let parameters = Attribute::ALL
        .iter()
        .map(|attribute| ParameterInfo {
            name: attribute.name().to_string(),
            description: attribute.description().to_string(),
        })
        .chain(std::iter::once(ParameterInfo {
            name: "radius_km".to_string(),
            description: "Distance to the nearest venue in kilometres".to_string(),
        }))
        .collect();

    HttpResponse::Ok().json(ParametersResponse { parameters })
}

/// List counties available for filtering
async fn counties(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CountiesResponse {
        counties: state.catalog.counties(),
    })
}

/// List reference venues
async fn venues(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(VenuesResponse {
        venues: state.catalog.venues().to_vec(),
    })
}
