//! Port for the host deployment engine context.

use crate::domain::models::RawValue;

/// Read-only view of the host program's run context.
///
/// The host deployment engine owns the project name, the stack name and the
/// key/value store populated from its own CLI. The resolver only queries it.
///
/// # Examples
///
/// ```
/// use stackcfg::domain::ports::AmbientContext;
/// use stackcfg::infrastructure::ambient::StaticContext;
///
/// let context = StaticContext::new("web", "prod-ks123").with_value("ec2:region", "us-east-1");
/// assert_eq!(context.stack(), "prod-ks123");
/// assert!(context.lookup("ec2:region").is_some());
/// ```
pub trait AmbientContext: Send + Sync {
    /// Project name, used as the bag when a facade is built without one.
    fn project(&self) -> &str;

    /// Stack name in `{stage}{separator}{tenant}` form.
    fn stack(&self) -> &str;

    /// Look up a fully-qualified key in the CLI-provided store.
    fn lookup(&self, full_key: &str) -> Option<RawValue>;
}
