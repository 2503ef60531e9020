pub mod types;
pub mod validator;
pub mod parser;

pub use types::*;
pub use validator::*;
pub use parser::*;
