// Contact points for the referral line. The page hands these off to the OS
// dialer/mail client via tel:/mailto: links and never observes the outcome.

pub const PHONE_NUMBER: &str = "+923015996903";
pub const PHONE_DISPLAY: &str = "+92 301 5996903";
pub const CONTACT_EMAIL: &str = "ghulamshabeer.marketing@gmail.com";

pub fn tel_href() -> String {
    format!("tel:{}", PHONE_NUMBER)
}

pub fn mailto_href() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_number_is_e164() {
        assert!(PHONE_NUMBER.starts_with('+'));
        assert!(PHONE_NUMBER[1..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn hrefs_use_the_platform_link_conventions() {
        assert_eq!(tel_href(), format!("tel:{}", PHONE_NUMBER));
        assert_eq!(mailto_href(), format!("mailto:{}", CONTACT_EMAIL));
        assert!(!tel_href().contains(' '));
        assert!(CONTACT_EMAIL.contains('@'));
    }
}
