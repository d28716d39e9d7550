//! Utility functions

/// Masks the local part of an email for log output, e.g. `jo***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let keep = if local.chars().count() <= 2 { 1 } else { 2 };
            let prefix: String = local.chars().take(keep).collect();
            format!("{}***@{}", prefix, domain)
        }
        _ => "***".to_string(),
    }
}
