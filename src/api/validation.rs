use axum::extract::{Path, rejection::PathRejection};

use super::{ApiError, PlanetRequest};
use crate::models::PlanetFields;

pub fn validate_finite(field: &str, value: f64) -> Result<f64, ApiError> {
    if !value.is_finite() {
        return Err(ApiError::validation(format!(
            "Invalid {field}: must be a finite number"
        )));
    }
    Ok(value)
}

pub fn validate_planet_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|e| ApiError::validation(format!("Invalid planet id: {}", e.body_text())))
}

pub fn planet_fields(request: PlanetRequest) -> Result<PlanetFields, ApiError> {
    Ok(PlanetFields {
        mass: validate_finite("mass", request.mass)?,
        radius: validate_finite("radius", request.radius)?,
        distance: validate_finite("distance", request.distance)?,
        p_name: request.p_name,
        p_type: request.p_type,
        home_star: request.home_star,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(mass: f64) -> PlanetRequest {
        PlanetRequest {
            p_name: "Mars".to_string(),
            p_type: "Class T".to_string(),
            home_star: "Sol".to_string(),
            mass,
            radius: 3389.0,
            distance: 2.27e9,
        }
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("mass", 0.0).is_ok());
        assert!(validate_finite("mass", -1.5e300).is_ok());
        assert!(validate_finite("mass", f64::NAN).is_err());
        assert!(validate_finite("mass", f64::INFINITY).is_err());
    }

    #[test]
    fn test_planet_fields() {
        let fields = planet_fields(request(6.39e23)).unwrap();
        assert_eq!(fields.p_name, "Mars");
        assert_eq!(fields.mass, 6.39e23);

        assert!(planet_fields(request(f64::NEG_INFINITY)).is_err());
    }
}
