//! Walking-route lookup against the OpenRouteService directions API.

use common::{FootpathError, GeoPoint, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;

const WALKING_PROFILE: &str = "foot-walking";

/// Computes a walking path between two points.
///
/// The planner is generic over this so tests can script responses without a
/// network.
pub trait Directions {
    fn walking_route(
        &self,
        start: GeoPoint,
        end: GeoPoint,
    ) -> impl Future<Output = Result<Vec<GeoPoint>>> + Send;
}

/// Request body per the service contract: exactly two coordinates,
/// longitude first, start then end.
#[derive(Debug, Serialize)]
struct DirectionsRequest {
    coordinates: [[f64; 2]; 2],
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Vec<[f64; 2]>,
}

#[derive(Clone)]
pub struct OrsClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OrsClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key,
        }
    }

    fn directions_url(&self) -> String {
        format!(
            "{}/v2/directions/{}/geojson",
            self.base_url.trim_end_matches('/'),
            WALKING_PROFILE
        )
    }
}

impl Directions for OrsClient {
    async fn walking_route(&self, start: GeoPoint, end: GeoPoint) -> Result<Vec<GeoPoint>> {
        let body = DirectionsRequest {
            coordinates: [start.lng_lat(), end.lng_lat()],
        };

        let response = self
            .http
            .post(self.directions_url())
            .header(AUTHORIZATION, self.api_key.as_str())
            .json(&body)
            .send()
            .await?;

        // The service reports errors with a non-2xx status; don't try to
        // parse those bodies as geometry.
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await?;
            return Err(FootpathError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let collection = response.json::<FeatureCollection>().await?;
        line_string(collection)
    }
}

/// Extracts the route path from a GeoJSON feature collection.
fn line_string(collection: FeatureCollection) -> Result<Vec<GeoPoint>> {
    let feature = collection
        .features
        .into_iter()
        .next()
        .ok_or_else(|| FootpathError::Geometry("empty feature collection".to_string()))?;

    if feature.geometry.kind != "LineString" {
        return Err(FootpathError::Geometry(format!(
            "unexpected geometry type: {}",
            feature.geometry.kind
        )));
    }
    if feature.geometry.coordinates.len() < 2 {
        return Err(FootpathError::Geometry(
            "route has fewer than two points".to_string(),
        ));
    }

    Ok(feature
        .geometry
        .coordinates
        .into_iter()
        .map(GeoPoint::from_lng_lat)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_is_lng_lat_start_then_end() {
        let body = DirectionsRequest {
            coordinates: [
                GeoPoint::new(27.570, -99.432).lng_lat(),
                GeoPoint::new(27.572, -99.430).lng_lat(),
            ],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "coordinates": [[-99.432, 27.570], [-99.430, 27.572]] })
        );
    }

    #[test]
    fn line_string_extracts_route_points() {
        let collection: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "summary": { "distance": 312.7 } },
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[-99.432, 27.570], [-99.431, 27.571], [-99.430, 27.572]]
                }
            }]
        }))
        .unwrap();

        let route = line_string(collection).unwrap();
        assert_eq!(route.len(), 3);
        assert_eq!(route[0], GeoPoint::new(27.570, -99.432));
        assert_eq!(route[2], GeoPoint::new(27.572, -99.430));
    }

    #[test]
    fn empty_collection_is_a_geometry_error() {
        let collection: FeatureCollection =
            serde_json::from_value(json!({ "features": [] })).unwrap();
        assert!(matches!(
            line_string(collection),
            Err(FootpathError::Geometry(_))
        ));
    }

    #[test]
    fn non_line_geometry_is_rejected() {
        let collection: FeatureCollection = serde_json::from_value(json!({
            "features": [{
                "geometry": { "type": "Point", "coordinates": [[-99.432, 27.570]] }
            }]
        }))
        .unwrap();
        assert!(matches!(
            line_string(collection),
            Err(FootpathError::Geometry(_))
        ));
    }

    #[test]
    fn directions_url_joins_base_and_profile() {
        let client = OrsClient::new(
            "https://api.openrouteservice.org/".to_string(),
            "key".to_string(),
        );
        assert_eq!(
            client.directions_url(),
            "https://api.openrouteservice.org/v2/directions/foot-walking/geojson"
        );
    }
}
