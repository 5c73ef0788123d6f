pub mod creation;
pub mod morph;
