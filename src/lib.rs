pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{LoginError, LoginErrorKind, SessionCredentials, UserInfo};
pub use frameworks::server::{run, run_with_config};
pub use use_cases::LoginChecker;
