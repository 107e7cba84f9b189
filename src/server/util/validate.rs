//! Field validators for boundary input.
//!
//! Each validator is pure: it takes the raw value, returns the normalized value on
//! success or a client-facing reason on failure, and never touches the database.

pub const EMAIL_MAX_LEN: usize = 254;
pub const EMAIL_LOCAL_MAX_LEN: usize = 64;
pub const USERNAME_MAX_LEN: usize = 50;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 128;
pub const PAGE_LIMIT_MAX: u64 = 100;
pub const PAGE_LIMIT_DEFAULT: u64 = 100;
/// Largest offset the database driver can bind (signed 64-bit).
pub const PAGE_OFFSET_MAX: u64 = i64::MAX as u64;

/// Validates an email address, returning it trimmed and lowercased.
///
/// Accepts `local@domain` where the local part is non-empty and free of whitespace, and
/// the domain consists of at least two dot-separated labels made of ASCII letters,
/// digits and inner hyphens.
pub fn email(raw: &str) -> Result<String, String> {
    let email = raw.trim().to_lowercase();

    if email.is_empty() {
        return Err("must not be empty".to_string());
    }
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err(format!("must be at most {} characters", EMAIL_MAX_LEN));
    }

    let invalid = || "must be a valid email address".to_string();

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || local.chars().count() > EMAIL_LOCAL_MAX_LEN
        || local.contains('@')
        || local.chars().any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_domain_label(label)) {
        return Err(invalid());
    }

    Ok(email)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Validates a username, returning it trimmed.
pub fn username(raw: &str) -> Result<String, String> {
    let username = raw.trim();

    if username.is_empty() {
        return Err("must not be empty".to_string());
    }
    if username.chars().count() > USERNAME_MAX_LEN {
        return Err(format!("must be at most {} characters", USERNAME_MAX_LEN));
    }
    if username.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err("must not contain whitespace".to_string());
    }

    Ok(username.to_string())
}

/// Validates a plaintext password. The value is returned untouched.
pub fn password(raw: &str) -> Result<String, String> {
    let len = raw.chars().count();

    if len < PASSWORD_MIN_LEN {
        return Err(format!("must be at least {} characters", PASSWORD_MIN_LEN));
    }
    if len > PASSWORD_MAX_LEN {
        return Err(format!("must be at most {} characters", PASSWORD_MAX_LEN));
    }

    Ok(raw.to_string())
}

/// Validates a page size, applying the default when absent.
pub fn page_limit(raw: Option<u64>) -> Result<u64, String> {
    match raw {
        None => Ok(PAGE_LIMIT_DEFAULT),
        Some(limit) if (1..=PAGE_LIMIT_MAX).contains(&limit) => Ok(limit),
        Some(_) => Err(format!("must be between 1 and {}", PAGE_LIMIT_MAX)),
    }
}

/// Validates a page offset, defaulting to the first user when absent.
pub fn page_offset(raw: Option<u64>) -> Result<u64, String> {
    match raw {
        None => Ok(0),
        Some(offset) if offset <= PAGE_OFFSET_MAX => Ok(offset),
        Some(_) => Err(format!("must be at most {}", PAGE_OFFSET_MAX)),
    }
}
