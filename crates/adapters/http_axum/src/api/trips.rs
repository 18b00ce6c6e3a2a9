//! JSON REST handlers for trips.

use std::collections::BTreeSet;
use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use tripkeeper_app::ports::TripRepository;
use tripkeeper_domain::error::{NotFoundError, ValidationError};
use tripkeeper_domain::id::TripId;
use tripkeeper_domain::time::{Timestamp, parse_timestamp};
use tripkeeper_domain::trip::{NewTrip, Trip, TripPatch, TripStatus};
use tripkeeper_domain::validator::TripValidation;
use tripkeeper_domain::waypoint::Waypoint;

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a trip.
///
/// Any `userId` in the body is ignored; the owner is always the caller.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<TripStatus>,
    pub is_public: Option<bool>,
    pub tags: Option<BTreeSet<String>>,
    pub waypoints: Option<Vec<Waypoint>>,
}

impl TryFrom<CreateTripRequest> for NewTrip {
    type Error = ValidationError;

    fn try_from(req: CreateTripRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: req.name,
            description: req.description,
            start_date: parse_optional("startDate", req.start_date.as_deref())?,
            end_date: parse_optional("endDate", req.end_date.as_deref())?,
            status: req.status,
            is_public: req.is_public,
            tags: req.tags,
            waypoints: req.waypoints,
        })
    }
}

/// Request body for patching a trip. Omitted fields keep their value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<TripStatus>,
    pub is_public: Option<bool>,
    pub tags: Option<BTreeSet<String>>,
    pub waypoints: Option<Vec<Waypoint>>,
}

impl TryFrom<UpdateTripRequest> for TripPatch {
    type Error = ValidationError;

    fn try_from(req: UpdateTripRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: req.name,
            description: req.description,
            start_date: parse_optional("startDate", req.start_date.as_deref())?,
            end_date: parse_optional("endDate", req.end_date.as_deref())?,
            status: req.status,
            is_public: req.is_public,
            tags: req.tags,
            waypoints: req.waypoints,
        })
    }
}

fn parse_optional(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<Timestamp>, ValidationError> {
    value.map(|v| parse_timestamp(field, v)).transpose()
}

/// A path segment that is not a UUID cannot name a stored trip.
fn parse_trip_id(raw: &str) -> Result<TripId, ApiError> {
    TripId::from_str(raw).map_err(|_| NotFoundError::trip(raw).into())
}

/// Body returned by the delete endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteBody {
    pub deleted: bool,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Trip>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Trip>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Trip>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<DeleteBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/trips`
pub async fn list<R, V>(
    State(state): State<AppState<R, V>>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> Result<ListResponse, ApiError>
where
    R: TripRepository + Send + Sync + 'static,
    V: TripValidation + Send + Sync + 'static,
{
    let trips = state.trip_service.find_all(&user_id).await?;
    Ok(ListResponse::Ok(Json(trips)))
}

/// `GET /api/trips/:id`
pub async fn get<R, V>(
    State(state): State<AppState<R, V>>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: TripRepository + Send + Sync + 'static,
    V: TripValidation + Send + Sync + 'static,
{
    let trip_id = parse_trip_id(&id)?;
    let trip = state.trip_service.find_one(trip_id, &user_id).await?;
    Ok(GetResponse::Ok(Json(trip)))
}

/// `POST /api/trips`
pub async fn create<R, V>(
    State(state): State<AppState<R, V>>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    body: Result<Json<CreateTripRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: TripRepository + Send + Sync + 'static,
    V: TripValidation + Send + Sync + 'static,
{
    let Json(req) = body?;
    let payload = NewTrip::try_from(req)?;
    let created = state.trip_service.create(payload, &user_id).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PATCH /api/trips/:id`
pub async fn update<R, V>(
    State(state): State<AppState<R, V>>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(id): Path<String>,
    body: Result<Json<UpdateTripRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    R: TripRepository + Send + Sync + 'static,
    V: TripValidation + Send + Sync + 'static,
{
    let trip_id = parse_trip_id(&id)?;
    let Json(req) = body?;
    let patch = TripPatch::try_from(req)?;
    let updated = state.trip_service.update(trip_id, patch, &user_id).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/trips/:id`
pub async fn delete<R, V>(
    State(state): State<AppState<R, V>>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: TripRepository + Send + Sync + 'static,
    V: TripValidation + Send + Sync + 'static,
{
    let trip_id = parse_trip_id(&id)?;
    let deleted = state.trip_service.delete(trip_id, &user_id).await?;
    Ok(DeleteResponse::Ok(Json(DeleteBody { deleted })))
}
