pub mod library;
pub mod playlist;
pub mod recent;
