pub mod repositories;

pub use repositories::file_profile_repository::FileProfileRepository;
