pub mod token;
pub mod utils;

pub use token::TokenStore;
