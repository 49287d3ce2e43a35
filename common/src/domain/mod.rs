pub mod activity;
pub mod catalog;
pub mod directory;

pub use activity::Activity;
pub use directory::{ActivityDirectory, DirectoryError};
