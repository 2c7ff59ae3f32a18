use log::debug;
use ord_subset::OrdSubsetIterExt;

use crate::haversine::haversine_distance;
use crate::point::{NamedPoint, Point};

cfg_if! {
    if #[cfg(feature = "rayon")] {
        use rayon::slice;
        use rayon::prelude::*;

        fn opt_par_iter<T: Sync>(x: &[T]) -> slice::Iter<T> {
            x.par_iter()
        }

    } else {
        use std::slice;

        fn opt_par_iter<T>(x: &[T]) -> slice::Iter<T> {
            x.iter()
        }
    }
}

/// A point ranked by its distance to the observer. `distance_km` is the
/// great-circle distance floored to whole kilometers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RankedPoint {
    pub name: String,
    pub distance_km: u32,
}

struct Observer {
    latitude: f64,
    longitude: f64,
}

impl Point for Observer {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Ranks `points` nearest-first from the observer coordinate.
///
/// Distances are floored to whole kilometers before ordering, not rounded.
/// The sort is stable: points with equal floored distance keep their
/// relative input order. The input slice is never mutated.
///
/// No coordinate validation happens here. A non-finite distance floors
/// through Rust's saturating float-to-int cast (`NaN` becomes `0`), so
/// callers are expected to validate coordinates upstream, e.g. by
/// constructing points via [`crate::PointOfInterest::new`].
pub fn rank<T: NamedPoint>(latitude: f64, longitude: f64, points: &[T]) -> Vec<RankedPoint> {
    debug!("Ranking {} points from ({}, {})", points.len(), latitude, longitude);

    let observer = Observer { latitude, longitude };

    let mut ranked: Vec<RankedPoint> = opt_par_iter(points)
        .map(|point| RankedPoint {
            name: point.name().to_string(),
            distance_km: haversine_distance(&observer, point).floor() as u32,
        })
        .collect();

    ranked.sort_by_key(|point| point.distance_km);

    ranked
}

/// Returns the single closest point to the observer coordinate, by raw
/// (unfloored) distance. Points with a non-finite distance are never
/// selected; `None` on empty input.
pub fn nearest<T: NamedPoint>(latitude: f64, longitude: f64, points: &[T]) -> Option<RankedPoint> {
    let observer = Observer { latitude, longitude };

    points
        .iter()
        .map(|point| (point, haversine_distance(&observer, point)))
        .ord_subset_min_by_key(|&(_, distance)| distance)
        .map(|(point, distance)| RankedPoint {
            name: point.name().to_string(),
            distance_km: distance.floor() as u32,
        })
}
