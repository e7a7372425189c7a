mod directory;

pub use directory::load_directory;
