pub mod extract;
pub mod parse;
pub mod password;
