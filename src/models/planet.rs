use serde::{Deserialize, Serialize};

/// A stored planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub p_id: i32,
    #[serde(flatten)]
    pub fields: PlanetFields,
}

/// The mutable attributes of a planet, used for both create and full-replace
/// update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetFields {
    pub p_name: String,
    pub p_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}

impl PlanetFields {
    #[must_use]
    pub fn new(
        p_name: impl Into<String>,
        p_type: impl Into<String>,
        home_star: impl Into<String>,
        mass: f64,
        radius: f64,
        distance: f64,
    ) -> Self {
        Self {
            p_name: p_name.into(),
            p_type: p_type.into(),
            home_star: home_star.into(),
            mass,
            radius,
            distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_serializes_flat() {
        let planet = Planet {
            p_id: 7,
            fields: PlanetFields::new("Mars", "Class T", "Sol", 6.39e23, 3389.0, 2.27e9),
        };

        let json = serde_json::to_value(&planet).unwrap();
        assert_eq!(json["p_id"], 7);
        assert_eq!(json["p_name"], "Mars");
        assert_eq!(json["home_star"], "Sol");
        assert_eq!(json["mass"].as_f64(), Some(6.39e23));
        assert!(json.get("fields").is_none());
    }
}
