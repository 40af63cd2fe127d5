pub mod profile_generator;
