pub mod planet;
pub mod user;

pub use planet::{Planet, PlanetFields};
pub use user::{NewUser, User};
