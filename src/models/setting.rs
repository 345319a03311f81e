/// Placeholder fallback credentials served when no setting is stored.
/// Not a security contract; the admin panel overwrites these on first use.
pub fn default_for(key: &str) -> Option<&'static str> {
    match key {
        "adminUsername" => Some("admin"),
        "adminPassword" => Some("admin123"),
        _ => None,
    }
}
