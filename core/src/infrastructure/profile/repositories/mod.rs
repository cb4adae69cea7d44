pub mod file_profile_repository;
