pub mod create_profile;
pub mod edit_profile;
pub mod home;
pub mod login;
pub mod map;
pub mod not_found;
pub mod profile;
pub mod track;
pub mod upload;
