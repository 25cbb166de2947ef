//! Deployment base path handling.
///
/// When `PUBLIC_URL` is set at compile time (e.g. `/play` for GitHub
/// Pages), the router is anchored under that prefix. Local builds
/// without `PUBLIC_URL` fall back to the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{router_base, router_base_with_base};

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            router_base_with_base("/play/"),
            Some(String::from("/play"))
        );
    }
}
