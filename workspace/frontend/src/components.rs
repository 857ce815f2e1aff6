pub mod dashboard;
pub mod gallery;
pub mod hotspots;
pub mod layout;
pub mod trends;
