use crate::models::{NewUser, PlanetFields};

/// Planets inserted by `db-seed`.
#[must_use]
pub fn planets() -> Vec<PlanetFields> {
    vec![
        PlanetFields::new("Mercury", "Class D", "Sol", 3.285e23, 2439.0, 4.8e6),
        PlanetFields::new("Mars", "Class T", "Sol", 6.39e23, 3389.0, 2.27e9),
        PlanetFields::new("Jupiter", "Class G", "Sol", 1.898e27, 69991.0, 7.45e11),
    ]
}

/// Users inserted by `db-seed`.
#[must_use]
pub fn users() -> Vec<NewUser> {
    vec![NewUser {
        f_name: "Ramesh".to_string(),
        l_name: "Chennithala".to_string(),
        email: "ramesh.chenni@gmail.com".to_string(),
        password: "ramesh".to_string(),
    }]
}
