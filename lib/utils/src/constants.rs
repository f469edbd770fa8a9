use std::time::Duration;

pub const SITE_NAME: &str = "Inkline";

pub const MAX_AUTHOR_NAME_LENGTH: usize = 80;
pub const MAX_AUTHOR_EMAIL_LENGTH: usize = 254;
pub const MAX_COMMENT_LENGTH: usize = 2000;
pub const MAX_CONTACT_MESSAGE_LENGTH: usize = 5000;

pub const TOAST_DISMISS_DELAY: Duration = Duration::from_secs(4);

pub const LOGO_ICON_PATH: &str = "/svg/quill.svg";
