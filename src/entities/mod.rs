pub mod prelude;

pub mod planets;
pub mod users;
