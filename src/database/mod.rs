pub mod activities_repo;
pub mod seed_repo;
