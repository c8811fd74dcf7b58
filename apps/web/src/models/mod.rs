pub mod resume;
pub mod skill;
