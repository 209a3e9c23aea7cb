use serde::{Deserialize, Serialize};

/// Status body used by every non-read endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub f_name: String,
    pub l_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct PlanetRequest {
    pub p_name: String,
    pub p_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}

// Fields are spelled out instead of flattening `PlanetRequest`: flattened
// numbers cannot be parsed out of form-encoded bodies.
#[derive(Debug, Deserialize)]
pub struct UpdatePlanetRequest {
    pub p_id: i32,
    pub p_name: String,
    pub p_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}

impl UpdatePlanetRequest {
    #[must_use]
    pub fn into_parts(self) -> (i32, PlanetRequest) {
        (
            self.p_id,
            PlanetRequest {
                p_name: self.p_name,
                p_type: self.p_type,
                home_star: self.home_star,
                mass: self.mass,
                radius: self.radius,
                distance: self.distance,
            },
        )
    }
}
