pub mod current;
pub mod lookup;
pub mod monthly;
pub mod setup;
pub mod ui;
