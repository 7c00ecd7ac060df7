// crates/pakcities-core/src/distance.rs

//! Great-circle distance on a spherical Earth.

use crate::config::DistanceUnit;
use crate::error::Result;
use crate::validators::validate_coordinates;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const KM_TO_MILES: f64 = 0.621371;

/// Distance between two points given in degrees, reported in `unit`.
///
/// Both pairs are validated before any arithmetic runs.
///
/// # Example
///
/// ```
/// use pakcities_core::distance::haversine_distance;
/// use pakcities_core::DistanceUnit;
///
/// // One degree of latitude is roughly 111 km.
/// let d = haversine_distance(0.0, 0.0, 1.0, 0.0, DistanceUnit::Kilometers).unwrap();
/// assert!((d - 111.19).abs() < 0.1);
/// ```
pub fn haversine_distance(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    unit: DistanceUnit,
) -> Result<f64> {
    validate_coordinates(lat1, lon1)?;
    validate_coordinates(lat2, lon2)?;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Ok(convert_distance(EARTH_RADIUS_KM * c, unit))
}

/// Converts a distance in kilometers to `unit`.
#[inline]
pub fn convert_distance(distance_km: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometers => distance_km,
        DistanceUnit::Miles => distance_km * KM_TO_MILES,
    }
}

/// Same as [`convert_distance`] but takes the unit by name.
///
/// Unknown names fail with [`crate::PakCitiesError::InvalidArgument`].
pub fn convert_distance_named(distance_km: f64, unit: &str) -> Result<f64> {
    Ok(convert_distance(distance_km, unit.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PakCitiesError;

    const KARACHI: (f64, f64) = (24.8608, 67.0104);
    const LAHORE: (f64, f64) = (31.558, 74.3507);

    #[test]
    fn same_point_is_zero() {
        for (lat, lon) in [(0.0, 0.0), KARACHI, (90.0, 180.0), (-45.5, -120.25)] {
            for unit in [DistanceUnit::Kilometers, DistanceUnit::Miles] {
                let d = haversine_distance(lat, lon, lat, lon, unit).unwrap();
                assert!(d.abs() < 0.1, "{lat},{lon}: {d}");
            }
        }
    }

    #[test]
    fn karachi_to_lahore_is_about_a_thousand_km() {
        let d = haversine_distance(
            KARACHI.0,
            KARACHI.1,
            LAHORE.0,
            LAHORE.1,
            DistanceUnit::Kilometers,
        )
        .unwrap();
        assert!((d - 1000.0).abs() < 150.0, "{d}");
    }

    #[test]
    fn miles_scale_from_km() {
        let km = haversine_distance(
            KARACHI.0,
            KARACHI.1,
            LAHORE.0,
            LAHORE.1,
            DistanceUnit::Kilometers,
        )
        .unwrap();
        let miles =
            haversine_distance(KARACHI.0, KARACHI.1, LAHORE.0, LAHORE.1, DistanceUnit::Miles)
                .unwrap();
        assert!(km > miles);
        assert!((miles - km * KM_TO_MILES).abs() < 1e-9);
    }

    #[test]
    fn antipodal_points_are_half_the_circumference() {
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        for lat in (-90..=90).map(f64::from) {
            for lon in (-18..=18).map(|l| f64::from(l) * 10.0) {
                let anti_lon = if lon > 0.0 { lon - 180.0 } else { lon + 180.0 };
                let d = haversine_distance(lat, lon, -lat, anti_lon, DistanceUnit::Kilometers)
                    .unwrap();
                assert!(d.is_finite(), "({lat}, {lon}) -> {d}");
                assert!((d - half).abs() < 1.0, "({lat}, {lon}) -> {d}");
            }
        }

        let d = haversine_distance(-82.0, -180.0, 82.0, 0.0, DistanceUnit::Kilometers).unwrap();
        assert!((d - half).abs() < 1.0, "{d}");
    }

    #[test]
    fn validates_both_points() {
        let err = haversine_distance(91.0, 0.0, 0.0, 0.0, DistanceUnit::Kilometers).unwrap_err();
        assert!(matches!(err, PakCitiesError::InvalidCoordinates(_)));

        let err = haversine_distance(0.0, 0.0, 0.0, 181.0, DistanceUnit::Kilometers).unwrap_err();
        assert!(matches!(err, PakCitiesError::InvalidCoordinates(_)));
    }

    #[test]
    fn named_conversion() {
        assert_eq!(convert_distance_named(10.0, "km").unwrap(), 10.0);
        assert!((convert_distance_named(10.0, "miles").unwrap() - 6.21371).abs() < 1e-9);
        assert!(matches!(
            convert_distance_named(10.0, "furlongs"),
            Err(PakCitiesError::InvalidArgument(_))
        ));
    }
}
