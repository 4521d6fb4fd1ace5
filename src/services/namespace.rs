//! Bag/key namespacing.

/// Delimiter between a bag and a short key.
pub const KEY_DELIMITER: char = ':';

/// Combine a bag and a short key into the fully-qualified lookup key.
///
/// No character validation is performed.
///
/// ```
/// use stackcfg::services::namespace::namespace;
///
/// assert_eq!(namespace("ecs", "cpu"), "ecs:cpu");
/// ```
pub fn namespace(bag: &str, key: &str) -> String {
    format!("{bag}{KEY_DELIMITER}{key}")
}
