//! Franchise service-area resolution.
//!
//! A query point is matched against every active franchise polygon with a
//! ray-casting parity test. Matches are priced by great-circle distance
//! from the point to the polygon's first vertex; that reference point is a
//! compatibility contract with existing franchise pricing, do not swap it
//! for a centroid or nearest-edge distance.

use rust_decimal::prelude::ToPrimitive;
use sea_orm::EntityTrait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::franchise::{self, Entity as FranchiseEntity};
use crate::errors::ServiceError;
use crate::models::GeoPoint;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// One franchise whose service polygon contains the query point.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FranchiseMatch {
    pub franchise_id: Uuid,
    pub name: String,
    pub distance_km: f64,
    pub overage_charge: f64,
}

/// Ray-casting parity test over an ordered polygon ring. The ring is
/// implicitly closed; fewer than three vertices can never contain a point.
pub fn point_in_polygon(point: GeoPoint, ring: &[GeoPoint]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        let crosses = (a.lat > point.lat) != (b.lat > point.lat)
            && point.lng < (b.lng - a.lng) * (point.lat - a.lat) / (b.lat - a.lat) + a.lng;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Great-circle distance in kilometers (haversine).
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Delivery overage for a given distance: free inside the radius, then
/// charged per extra kilometer.
pub fn overage_charge(distance_km: f64, free_radius_km: f64, charge_per_extra_km: f64) -> f64 {
    if distance_km <= free_radius_km {
        0.0
    } else {
        (distance_km - free_radius_km) * charge_per_extra_km
    }
}

#[derive(Clone)]
pub struct GeofenceService {
    db_pool: Arc<DbPool>,
}

impl GeofenceService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Resolves every active franchise whose polygon contains the point.
    /// Overlapping service areas are all returned; the caller decides
    /// precedence. An empty result is an error, not an empty list.
    #[instrument(skip(self), fields(lat = lat, lng = lng))]
    pub async fn resolve(&self, lat: f64, lng: f64) -> Result<Vec<FranchiseMatch>, ServiceError> {
        let point = GeoPoint::new(lat, lng);
        let franchises = FranchiseEntity::find().all(&*self.db_pool).await?;

        let mut matches = Vec::new();
        for model in franchises.into_iter().filter(|f| f.is_active) {
            let ring = match parse_ring(&model) {
                Ok(ring) => ring,
                Err(err) => {
                    warn!(franchise_id = %model.id, error = %err, "Skipping franchise with malformed polygon");
                    continue;
                }
            };

            if !point_in_polygon(point, &ring) {
                continue;
            }

            let distance_km = haversine_km(point, ring[0]);
            let charge = overage_charge(
                distance_km,
                model.free_delivery_radius_km.to_f64().unwrap_or(0.0),
                model.charge_per_extra_km.to_f64().unwrap_or(0.0),
            );

            matches.push(FranchiseMatch {
                franchise_id: model.id,
                name: model.name,
                distance_km,
                overage_charge: charge,
            });
        }

        if matches.is_empty() {
            return Err(ServiceError::NoFranchiseAvailable);
        }

        info!(match_count = matches.len(), "Resolved franchises for location");
        Ok(matches)
    }
}

fn parse_ring(model: &franchise::Model) -> Result<Vec<GeoPoint>, ServiceError> {
    let ring: Vec<GeoPoint> = serde_json::from_value(model.polygon.clone())
        .map_err(|e| ServiceError::InternalError(format!("Malformed polygon: {}", e)))?;
    if ring.len() < 3 {
        return Err(ServiceError::InternalError(
            "Polygon has fewer than three vertices".to_string(),
        ));
    }
    Ok(ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(12.90, 77.55),
            GeoPoint::new(12.90, 77.65),
            GeoPoint::new(13.00, 77.65),
            GeoPoint::new(13.00, 77.55),
        ]
    }

    #[test]
    fn contains_interior_point() {
        assert!(point_in_polygon(GeoPoint::new(12.95, 77.60), &square()));
    }

    #[test]
    fn excludes_exterior_point() {
        assert!(!point_in_polygon(GeoPoint::new(12.80, 77.60), &square()));
        assert!(!point_in_polygon(GeoPoint::new(12.95, 77.70), &square()));
    }

    #[test]
    fn degenerate_ring_contains_nothing() {
        let segment = vec![GeoPoint::new(12.9, 77.5), GeoPoint::new(13.0, 77.6)];
        assert!(!point_in_polygon(GeoPoint::new(12.95, 77.55), &segment));
    }

    #[test]
    fn concave_polygon_notch_is_outside() {
        // A "U" shape: the notch between the prongs is not inside.
        let ring = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 4.0),
            GeoPoint::new(3.0, 4.0),
            GeoPoint::new(3.0, 3.0),
            GeoPoint::new(1.0, 3.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(3.0, 1.0),
            GeoPoint::new(3.0, 0.0),
        ];
        assert!(point_in_polygon(GeoPoint::new(0.5, 2.0), &ring));
        assert!(!point_in_polygon(GeoPoint::new(2.0, 2.0), &ring));
    }

    #[test]
    fn haversine_matches_known_distance() {
        // Bengaluru to Chennai, roughly 290 km.
        let blr = GeoPoint::new(12.9716, 77.5946);
        let maa = GeoPoint::new(13.0827, 80.2707);
        let d = haversine_km(blr, maa);
        assert!((d - 290.0).abs() < 5.0, "got {}", d);
    }

    #[test]
    fn haversine_is_zero_for_identical_points() {
        let p = GeoPoint::new(12.9716, 77.5946);
        assert!(haversine_km(p, p) < 1e-9);
    }

    #[test]
    fn no_charge_inside_free_radius() {
        assert_eq!(overage_charge(4.9, 5.0, 10.0), 0.0);
        assert_eq!(overage_charge(5.0, 5.0, 10.0), 0.0);
    }

    #[test]
    fn overage_is_linear_beyond_free_radius() {
        let charge = overage_charge(8.5, 5.0, 10.0);
        assert!((charge - 35.0).abs() < 1e-9);
    }
}
