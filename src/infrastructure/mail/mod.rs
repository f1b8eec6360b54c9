//! Mail delivery implementations

mod log;
mod smtp;

pub use log::LogEmailService;
pub use smtp::SmtpEmailService;

use url::Url;

/// Build the link a guardian follows to choose a new password
///
/// Query parameters already present on `base` are kept.
pub fn reset_link(base: &Url, email: &str, token: &str) -> String {
    let mut link = base.clone();
    link.query_pairs_mut()
        .append_pair("email", email)
        .append_pair("token", token);
    link.into()
}
