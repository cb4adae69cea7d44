pub mod ports;
pub mod schema;
pub mod value_objects;

pub use ports::*;
pub use schema::ResponseSchema;
pub use value_objects::*;
