pub mod classrooms;

pub mod competences;

pub mod response;

pub use classrooms::configure_classroom_routes;
pub use competences::configure_competence_routes;
