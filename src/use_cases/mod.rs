pub mod check_login;


pub use check_login::{CredentialHeaders, LoginChecker};
