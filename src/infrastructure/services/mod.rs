//! Use-case implementations over the guardian repository

mod add_guardian;
mod authentication;
mod forget_password;
mod reset_password;

pub use add_guardian::DbAddGuardian;
pub use authentication::DbAuthentication;
pub use forget_password::{DbForgetPassword, ForgetPasswordTokenGenerator};
pub use reset_password::DbResetPassword;
