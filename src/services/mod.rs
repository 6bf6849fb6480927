pub mod classrooms;
pub mod competences;

pub use classrooms::ClassroomService;
pub use competences::CompetenceService;
