pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Gender, UserProfile};
pub use ports::{ProfileRepository, ProfileService};
pub use value_objects::CreateProfileInput;
