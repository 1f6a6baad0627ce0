//! Location CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{LocationStatus, Pagination};
use domain::{
    Coordinates, Location, LocationInput, LocationPage, LocationQuery, LocationService,
    ValidationErrors, Validator, rules,
};
use location_store::LocationRepository;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<R: LocationRepository> {
    pub locations: LocationService<R>,
}

// -- Request types --

/// Body of create and update requests.
///
/// Missing fields deserialize to empty values so validation can report them.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LocationRequest {
    pub vehicle_id: String,
    pub latitude: String,
    pub longitude: String,
    pub status: String,
    pub speed: i64,
}

impl LocationRequest {
    /// Checks every field and converts the request into domain input.
    pub fn validate(self) -> Result<LocationInput, ValidationErrors> {
        Validator::new()
            .str("vehicle_id", &self.vehicle_id, rules::VEHICLE_ID)
            .str("latitude", &self.latitude, rules::LATITUDE)
            .str("longitude", &self.longitude, rules::LONGITUDE)
            .str("status", &self.status, rules::STATUS)
            .int("speed", self.speed, rules::SPEED)
            .finish()?;

        let status = parse_status(&self.status)?;
        let speed = u32::try_from(self.speed)
            .map_err(|_| ValidationErrors::single("speed", self.speed, rules::SPEED[0]))?;

        Ok(LocationInput {
            vehicle_id: self.vehicle_id,
            coordinates: Coordinates::new(self.latitude, self.longitude),
            status,
            speed,
        })
    }
}

/// Query string of the list endpoint.
///
/// An empty value (`?vehicle_id=`) counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ListLocationsParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub vehicle_id: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<String>,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    use serde::de::Error;
    match Option::<String>::deserialize(deserializer)? {
        Some(value) if !value.is_empty() => value.parse().map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}

impl ListLocationsParams {
    /// Checks the parameters and converts them into a domain query.
    pub fn validate(self) -> Result<LocationQuery, ValidationErrors> {
        Validator::new()
            .optional_int("limit", self.limit, rules::LIMIT)
            .optional_int("page", self.page, rules::PAGE)
            .optional_str("vehicle_id", self.vehicle_id.as_deref(), rules::VEHICLE_ID)
            .optional_str("status", self.status.as_deref(), rules::STATUS)
            .finish()?;

        let status = self.status.as_deref().map(parse_status).transpose()?;
        let pagination = Pagination::new(
            self.page.and_then(|p| u32::try_from(p).ok()),
            self.limit.and_then(|l| u32::try_from(l).ok()),
        );

        Ok(LocationQuery {
            vehicle_id: self.vehicle_id,
            status,
            pagination,
        })
    }
}

fn parse_status(value: &str) -> Result<LocationStatus, ValidationErrors> {
    value
        .parse()
        .map_err(|_| ValidationErrors::single("status", value, rules::STATUS[1]))
}

// -- Response types --

#[derive(Debug, Serialize, Deserialize)]
pub struct CoordinatesResponse {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LocationResponse {
    pub id: String,
    pub vehicle_id: String,
    pub timestamp: DateTime<Utc>,
    pub location: CoordinatesResponse,
    pub speed: u32,
    pub status: LocationStatus,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id().to_string(),
            vehicle_id: location.vehicle_id,
            timestamp: location.timestamp,
            location: CoordinatesResponse {
                latitude: location.coordinates.latitude,
                longitude: location.coordinates.longitude,
            },
            speed: location.speed,
            status: location.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocationCreatedResponse {
    pub document_id: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PaginationInfo {
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug, Serialize)]
pub struct LocationListResponse {
    pub success: bool,
    pub data: Vec<LocationResponse>,
    pub pagination_info: PaginationInfo,
}

impl From<LocationPage> for LocationListResponse {
    fn from(page: LocationPage) -> Self {
        Self {
            success: page.success,
            data: page.locations.into_iter().map(Into::into).collect(),
            pagination_info: PaginationInfo {
                page: page.pagination.page(),
                limit: page.pagination.limit(),
            },
        }
    }
}

// -- Handlers --

/// POST /api/v1/locations: record a new location.
#[tracing::instrument(skip(state, body))]
pub async fn create<R: LocationRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    body: Result<Json<LocationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LocationCreatedResponse>), ApiError> {
    let Json(request) = body.map_err(ApiError::unprocessable_input)?;
    let input = request.validate()?;

    let location = state.locations.create(input).await?;

    let response = LocationCreatedResponse {
        document_id: location.id().to_string(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/locations/{id}: load a location by id.
#[tracing::instrument(skip(state))]
pub async fn get<R: LocationRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<LocationResponse>, ApiError> {
    let location = state.locations.get(&id).await?;
    Ok(Json(location.into()))
}

/// GET /api/v1/locations: list locations with optional filters.
#[tracing::instrument(skip(state, params))]
pub async fn list<R: LocationRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    params: Result<Query<ListLocationsParams>, QueryRejection>,
) -> Result<(StatusCode, Json<LocationListResponse>), ApiError> {
    let Query(params) = params.map_err(ApiError::unprocessable_input)?;
    let query = params.validate()?;

    let page = state.locations.list(query).await?;

    let status = if page.success {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    Ok((status, Json(page.into())))
}

/// PUT /api/v1/locations/{id}: replace a location.
#[tracing::instrument(skip(state, body))]
pub async fn update<R: LocationRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    body: Result<Json<LocationRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = body.map_err(ApiError::unprocessable_input)?;
    let input = request.validate()?;

    if state.locations.update(&id, input).await? {
        Ok(MessageResponse::new("location updated successfully"))
    } else {
        Err(ApiError::NotFound("no location was updated".to_string()))
    }
}

/// DELETE /api/v1/locations/{id}: remove a location.
#[tracing::instrument(skip(state))]
pub async fn delete<R: LocationRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if state.locations.delete(&id).await? {
        Ok(MessageResponse::new("location deleted successfully"))
    } else {
        Err(ApiError::NotFound("no location was deleted".to_string()))
    }
}
