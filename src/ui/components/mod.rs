pub mod controls;
pub mod dashboard;
pub mod typing_area;
