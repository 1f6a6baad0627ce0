//! Integration tests for the location use cases.
//!
//! These tests drive `LocationService` against the in-memory repository
//! and verify persistence, pagination, filtering, and not-found handling.

use common::LocationStatus;
use domain::{Coordinates, DomainError, LocationInput, LocationQuery, LocationService};
use location_store::{InMemoryLocationRepository, LocationRepository, ObjectId, RepositoryError};

/// Helper to create a test location service
fn create_service() -> LocationService<InMemoryLocationRepository> {
    LocationService::new(InMemoryLocationRepository::new())
}

fn input(vehicle_id: &str, status: LocationStatus, speed: u32) -> LocationInput {
    LocationInput {
        vehicle_id: vehicle_id.to_string(),
        coordinates: Coordinates::new("-23.55052", "-46.633308"),
        status,
        speed,
    }
}

mod create_and_get {
    use super::*;

    #[tokio::test]
    async fn created_location_can_be_read_back() {
        let service = create_service();

        let created = service
            .create(input("ABC1234", LocationStatus::Moving, 80))
            .await
            .unwrap();
        assert!(!created.id().is_empty());

        let loaded = service.get(created.id()).await.unwrap();
        assert_eq!(loaded.id(), created.id());
        assert_eq!(loaded.vehicle_id, "ABC1234");
        assert_eq!(loaded.status, LocationStatus::Moving);
        assert_eq!(loaded.speed, 80);
        assert_eq!(loaded.coordinates, Coordinates::new("-23.55052", "-46.633308"));
        assert_eq!(loaded.timestamp, created.timestamp);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let service = create_service();

        let err = service.get(&ObjectId::new().to_hex()).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(
            err,
            DomainError::Repository(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn malformed_id_is_not_found() {
        let service = create_service();

        let err = service.get("12345").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(
            err,
            DomainError::Repository(RepositoryError::InvalidId(_))
        ));
    }
}

mod list {
    use super::*;

    #[tokio::test]
    async fn pages_return_distinct_records() {
        let service = create_service();
        for speed in [10, 20, 30] {
            service
                .create(input("ABC1234", LocationStatus::Moving, speed))
                .await
                .unwrap();
        }

        let first = service
            .list(LocationQuery::new().page(Some(1), Some(1)))
            .await
            .unwrap();
        let second = service
            .list(LocationQuery::new().page(Some(2), Some(1)))
            .await
            .unwrap();

        assert_eq!(first.locations.len(), 1);
        assert_eq!(second.locations.len(), 1);
        assert_ne!(first.locations[0].id(), second.locations[0].id());
        assert_eq!(second.pagination.page(), 2);
        assert_eq!(second.pagination.limit(), 1);
    }

    #[tokio::test]
    async fn status_filter_returns_only_matching() {
        let service = create_service();
        service
            .create(input("ABC1234", LocationStatus::Moving, 50))
            .await
            .unwrap();
        service
            .create(input("XYZ5678", LocationStatus::Stopped, 0))
            .await
            .unwrap();

        let page = service
            .list(LocationQuery::new().status(LocationStatus::Stopped))
            .await
            .unwrap();

        assert!(page.success);
        assert_eq!(page.locations.len(), 1);
        assert_eq!(page.locations[0].vehicle_id, "XYZ5678");
    }

    #[tokio::test]
    async fn vehicle_filter_returns_only_matching() {
        let service = create_service();
        service
            .create(input("ABC1234", LocationStatus::Moving, 50))
            .await
            .unwrap();
        service
            .create(input("XYZ5678", LocationStatus::Moving, 60))
            .await
            .unwrap();

        let page = service
            .list(LocationQuery::new().vehicle_id("ABC1234"))
            .await
            .unwrap();

        assert_eq!(page.locations.len(), 1);
        assert_eq!(page.locations[0].speed, 50);
    }

    #[tokio::test]
    async fn empty_result_is_not_successful() {
        let service = create_service();

        let page = service.list(LocationQuery::new()).await.unwrap();
        assert!(!page.success);
        assert!(page.locations.is_empty());
        assert_eq!(page.pagination.page(), 1);
        assert_eq!(page.pagination.limit(), 10);
    }
}

mod update_and_delete {
    use super::*;

    #[tokio::test]
    async fn update_replaces_whole_record() {
        let service = create_service();
        let created = service
            .create(input("ABC1234", LocationStatus::Moving, 80))
            .await
            .unwrap();

        let updated = service
            .update(created.id(), input("ABC1234", LocationStatus::Stopped, 0))
            .await
            .unwrap();
        assert!(updated);

        let loaded = service.get(created.id()).await.unwrap();
        assert_eq!(loaded.status, LocationStatus::Stopped);
        assert_eq!(loaded.speed, 0);
        assert!(loaded.timestamp >= created.timestamp);
    }

    #[tokio::test]
    async fn update_unknown_id_modifies_nothing() {
        let service = create_service();

        let updated = service
            .update(
                &ObjectId::new().to_hex(),
                input("ABC1234", LocationStatus::Moving, 1),
            )
            .await
            .unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let service = create_service();
        let created = service
            .create(input("ABC1234", LocationStatus::Offline, 0))
            .await
            .unwrap();

        assert!(service.delete(created.id()).await.unwrap());
        assert!(!service.delete(created.id()).await.unwrap());
        assert_eq!(service.repository().location_count().await, 0);
    }

    #[tokio::test]
    async fn malformed_id_on_delete_is_not_found() {
        let service = create_service();

        let err = service.delete("nope").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn repository_is_reachable() {
        let service = create_service();
        assert!(service.repository().ping().await.is_ok());
    }
}
