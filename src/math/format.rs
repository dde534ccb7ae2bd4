use serde::{Deserialize, Serialize};

/// Text rendered in place of a magnitude that is NaN or infinite.
pub const PLACEHOLDER: &str = "—";

const METERS_PER_KILOMETER: f64 = 1_000.0;
const SQUARE_METERS_PER_SQUARE_KILOMETER: f64 = 1_000_000.0;
const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Display policy for area labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaUnits {
    /// Square meters below one square kilometer, square kilometers above.
    #[default]
    Metric,
    /// Hectares with two decimals at every scale.
    Hectares,
}

impl AreaUnits {
    /// Formats an area given in square meters under this policy.
    #[must_use]
    pub fn format(self, square_meters: f64) -> String {
        if !square_meters.is_finite() {
            return PLACEHOLDER.to_owned();
        }
        match self {
            Self::Metric if square_meters < SQUARE_METERS_PER_SQUARE_KILOMETER => {
                format!("{square_meters:.1} m²")
            }
            Self::Metric => format!(
                "{:.4} km²",
                square_meters / SQUARE_METERS_PER_SQUARE_KILOMETER
            ),
            Self::Hectares => format!("{:.2} ha", square_meters / SQUARE_METERS_PER_HECTARE),
        }
    }
}

/// Formats a distance: meters with one decimal below a kilometer, kilometers
/// with three decimals otherwise.
#[must_use]
pub fn format_distance(meters: f64) -> String {
    if !meters.is_finite() {
        return PLACEHOLDER.to_owned();
    }
    if meters < METERS_PER_KILOMETER {
        format!("{meters:.1} m")
    } else {
        format!("{:.3} km", meters / METERS_PER_KILOMETER)
    }
}

/// Formats an area with the default [`AreaUnits::Metric`] policy.
#[must_use]
pub fn format_area(square_meters: f64) -> String {
    AreaUnits::Metric.format(square_meters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_units() {
        assert_eq!(format_distance(0.0), "0.0 m");
        assert_eq!(format_distance(12.34), "12.3 m");
        assert_eq!(format_distance(999.94), "999.9 m");
        assert_eq!(format_distance(1000.0), "1.000 km");
        assert_eq!(format_distance(8392.6), "8.393 km");
    }

    #[test]
    fn metric_area_units() {
        assert_eq!(format_area(0.0), "0.0 m²");
        assert_eq!(format_area(12_345.67), "12345.7 m²");
        assert_eq!(format_area(1_000_000.0), "1.0000 km²");
        assert_eq!(format_area(2_500_000.0), "2.5000 km²");
    }

    #[test]
    fn hectare_area_units() {
        assert_eq!(AreaUnits::Hectares.format(12_345.0), "1.23 ha");
        assert_eq!(AreaUnits::Hectares.format(2_500_000.0), "250.00 ha");
    }

    #[test]
    fn non_finite_renders_placeholder() {
        assert_eq!(format_distance(f64::NAN), PLACEHOLDER);
        assert_eq!(format_distance(f64::INFINITY), PLACEHOLDER);
        assert_eq!(format_area(f64::NAN), PLACEHOLDER);
        assert_eq!(AreaUnits::Hectares.format(f64::NEG_INFINITY), PLACEHOLDER);
    }

    #[test]
    fn area_units_serialize_snake_case() {
        assert_eq!(serde_json::to_string(&AreaUnits::Hectares).unwrap_or_default(), "\"hectares\"");
    }
}
