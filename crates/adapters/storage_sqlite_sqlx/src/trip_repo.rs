//! `SQLite` implementation of [`TripRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use tripkeeper_app::ports::TripRepository;
use tripkeeper_domain::error::{NotFoundError, TripkeeperError};
use tripkeeper_domain::id::{TripId, UserId};
use tripkeeper_domain::time::Timestamp;
use tripkeeper_domain::trip::{Trip, TripDetails, TripStatus};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Trip`].
struct Wrapper(Trip);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Trip> {
        value.map(|w| w.0)
    }
}

fn decode_err<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Decode(Box::new(err))
}

fn parse_date(value: Option<String>) -> Result<Option<Timestamp>, sqlx::Error> {
    value
        .map(|s| {
            chrono::DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.to_utc())
                .map_err(decode_err)
        })
        .transpose()
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let user_id: String = row.try_get("user_id")?;
        let name: String = row.try_get("name")?;
        let description: String = row.try_get("description")?;
        let start_date: Option<String> = row.try_get("start_date")?;
        let end_date: Option<String> = row.try_get("end_date")?;
        let status: String = row.try_get("status")?;
        let is_public: bool = row.try_get("is_public")?;
        let tags_json: String = row.try_get("tags")?;
        let waypoints_json: String = row.try_get("waypoints")?;

        let id = TripId::from_str(&id).map_err(decode_err)?;
        let user_id =
            UserId::new(user_id).ok_or_else(|| sqlx::Error::Decode("blank user_id".into()))?;
        let status = TripStatus::from_str(&status).map_err(decode_err)?;

        Ok(Self(Trip {
            id,
            user_id,
            details: TripDetails {
                name,
                description,
                start_date: parse_date(start_date)?,
                end_date: parse_date(end_date)?,
                status,
                is_public,
                tags: serde_json::from_str(&tags_json).map_err(decode_err)?,
                waypoints: serde_json::from_str(&waypoints_json).map_err(decode_err)?,
            },
        }))
    }
}

/// Column values for the mutable part of a trip, ready to bind.
struct DetailColumns {
    start_date: Option<String>,
    end_date: Option<String>,
    tags: String,
    waypoints: String,
}

impl DetailColumns {
    fn encode(details: &TripDetails) -> Result<Self, StorageError> {
        Ok(Self {
            start_date: details.start_date.map(|ts| ts.to_rfc3339()),
            end_date: details.end_date.map(|ts| ts.to_rfc3339()),
            tags: serde_json::to_string(&details.tags)?,
            waypoints: serde_json::to_string(&details.waypoints)?,
        })
    }
}

const INSERT: &str = "INSERT INTO trips (id, user_id, name, description, start_date, end_date, status, is_public, tags, waypoints) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_USER: &str = "SELECT * FROM trips WHERE user_id = ? ORDER BY rowid";
const SELECT_BY_ID_AND_USER: &str = "SELECT * FROM trips WHERE id = ? AND user_id = ?";
const UPDATE: &str = "UPDATE trips SET name = ?, description = ?, start_date = ?, end_date = ?, status = ?, is_public = ?, tags = ?, waypoints = ? WHERE id = ? AND user_id = ?";
const DELETE_BY_ID_AND_USER: &str = "DELETE FROM trips WHERE id = ? AND user_id = ?";

/// `SQLite`-backed trip repository.
pub struct SqliteTripRepository {
    pool: SqlitePool,
}

impl SqliteTripRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TripRepository for SqliteTripRepository {
    async fn find_all_by_user(&self, user_id: &UserId) -> Result<Vec<Trip>, TripkeeperError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_USER)
            .bind(user_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_id_and_user(
        &self,
        id: TripId,
        user_id: &UserId,
    ) -> Result<Option<Trip>, TripkeeperError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID_AND_USER)
            .bind(id.to_string())
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn insert(&self, trip: Trip) -> Result<Trip, TripkeeperError> {
        let columns = DetailColumns::encode(&trip.details)?;

        sqlx::query(INSERT)
            .bind(trip.id.to_string())
            .bind(trip.user_id.as_str())
            .bind(&trip.details.name)
            .bind(&trip.details.description)
            .bind(&columns.start_date)
            .bind(&columns.end_date)
            .bind(trip.details.status.as_str())
            .bind(trip.details.is_public)
            .bind(&columns.tags)
            .bind(&columns.waypoints)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(trip)
    }

    async fn replace(
        &self,
        id: TripId,
        user_id: &UserId,
        details: TripDetails,
    ) -> Result<Trip, TripkeeperError> {
        let columns = DetailColumns::encode(&details)?;

        let result = sqlx::query(UPDATE)
            .bind(&details.name)
            .bind(&details.description)
            .bind(&columns.start_date)
            .bind(&columns.end_date)
            .bind(details.status.as_str())
            .bind(details.is_public)
            .bind(&columns.tags)
            .bind(&columns.waypoints)
            .bind(id.to_string())
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError::trip(id).into());
        }
        Ok(Trip::new(id, user_id.clone(), details))
    }

    async fn remove(&self, id: TripId, user_id: &UserId) -> Result<bool, TripkeeperError> {
        let result = sqlx::query(DELETE_BY_ID_AND_USER)
            .bind(id.to_string())
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use chrono::{TimeZone, Utc};
    use tripkeeper_domain::waypoint::Waypoint;

    async fn setup() -> SqliteTripRepository {
        let db = Config::in_memory().build().await.unwrap();
        SqliteTripRepository::new(db.pool().clone())
    }

    fn owner() -> UserId {
        UserId::new("foo-user").unwrap()
    }

    fn details(name: &str) -> TripDetails {
        TripDetails {
            name: name.to_string(),
            description: "From the south to the north".to_string(),
            start_date: Some(Utc.with_ymd_and_hms(2025, 8, 6, 0, 0, 0).unwrap()),
            end_date: Some(Utc.with_ymd_and_hms(2025, 8, 26, 0, 0, 0).unwrap()),
            status: TripStatus::Planned,
            is_public: true,
            tags: ["greece", "car"].into_iter().map(String::from).collect(),
            waypoints: vec![
                Waypoint::create("Athens", 37.98, 23.72),
                Waypoint::create("Thessaloniki", 40.64, 22.94),
            ],
        }
    }

    fn test_trip(name: &str) -> Trip {
        Trip::new(TripId::new(), owner(), details(name))
    }

    #[tokio::test]
    async fn should_insert_and_retrieve_trip_when_owned() {
        let repo = setup().await;
        let trip = test_trip("Greece trip");
        let id = trip.id;

        repo.insert(trip.clone()).await.unwrap();

        let fetched = repo.find_by_id_and_user(id, &owner()).await.unwrap();
        assert_eq!(fetched, Some(trip));
    }

    #[tokio::test]
    async fn should_store_trip_without_dates() {
        let repo = setup().await;
        let mut trip = test_trip("Balkan Trip");
        trip.details.start_date = None;
        trip.details.end_date = None;
        trip.details.tags.clear();
        trip.details.waypoints.clear();
        repo.insert(trip.clone()).await.unwrap();

        let fetched = repo.find_by_id_and_user(trip.id, &owner()).await.unwrap();
        assert_eq!(fetched, Some(trip));
    }

    #[tokio::test]
    async fn should_return_none_when_trip_not_found() {
        let repo = setup().await;
        let result = repo
            .find_by_id_and_user(TripId::new(), &owner())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_return_none_when_trip_owned_by_someone_else() {
        let repo = setup().await;
        let trip = test_trip("Greece trip");
        repo.insert(trip.clone()).await.unwrap();

        let other = UserId::new("bar-user").unwrap();
        let result = repo.find_by_id_and_user(trip.id, &other).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_user_trips_in_insertion_order() {
        let repo = setup().await;
        repo.insert(test_trip("Zagreb")).await.unwrap();
        repo.insert(Trip::new(
            TripId::new(),
            UserId::new("bar-user").unwrap(),
            details("Elsewhere"),
        ))
        .await
        .unwrap();
        repo.insert(test_trip("Athens")).await.unwrap();

        let all = repo.find_all_by_user(&owner()).await.unwrap();
        let names: Vec<&str> = all.iter().map(|t| t.details.name.as_str()).collect();
        assert_eq!(names, ["Zagreb", "Athens"]);
    }

    #[tokio::test]
    async fn should_replace_details_when_owned() {
        let repo = setup().await;
        let trip = test_trip("Greece trip");
        repo.insert(trip.clone()).await.unwrap();

        let mut updated = trip.details.clone();
        updated.name = "Updated name".to_string();
        updated.status = TripStatus::Active;
        updated.waypoints.reverse();
        let saved = repo.replace(trip.id, &owner(), updated).await.unwrap();

        let fetched = repo.find_by_id_and_user(trip.id, &owner()).await.unwrap();
        assert_eq!(fetched, Some(saved.clone()));
        assert_eq!(saved.details.name, "Updated name");
        assert_eq!(saved.details.waypoints[0].name, "Thessaloniki");
    }

    #[tokio::test]
    async fn should_report_not_found_when_replacing_foreign_trip() {
        let repo = setup().await;
        let trip = test_trip("Greece trip");
        repo.insert(trip.clone()).await.unwrap();

        let other = UserId::new("bar-user").unwrap();
        let result = repo.replace(trip.id, &other, details("hijacked")).await;
        assert!(matches!(result, Err(TripkeeperError::NotFound(_))));

        let fetched = repo.find_by_id_and_user(trip.id, &owner()).await.unwrap();
        assert_eq!(fetched, Some(trip));
    }

    #[tokio::test]
    async fn should_remove_trip_when_owned() {
        let repo = setup().await;
        let trip = test_trip("Greece trip");
        repo.insert(trip.clone()).await.unwrap();

        assert!(repo.remove(trip.id, &owner()).await.unwrap());
        assert!(!repo.remove(trip.id, &owner()).await.unwrap());

        let result = repo.find_by_id_and_user(trip.id, &owner()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_not_remove_foreign_trip() {
        let repo = setup().await;
        let trip = test_trip("Greece trip");
        repo.insert(trip.clone()).await.unwrap();

        let other = UserId::new("bar-user").unwrap();
        assert!(!repo.remove(trip.id, &other).await.unwrap());
        assert!(repo.find_by_id_and_user(trip.id, &owner()).await.unwrap().is_some());
    }
}
