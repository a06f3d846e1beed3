pub mod photo;
pub mod types;

pub use photo::{Manifest, ManifestEnvelope, Photo, PhotoCamera, PhotoPage, PhotoRover};
pub use types::{CameraOption, CameraSelection, ROVER_FACTS, Rover, RoverFacts};
