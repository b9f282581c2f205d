pub mod board;
pub mod profiles;
