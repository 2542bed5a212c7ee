pub mod complaint;
pub mod coordinates;
pub mod detection;
pub mod location;
pub mod profile;
pub mod severity;
