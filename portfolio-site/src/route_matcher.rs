use lazy_static::lazy_static;
use regex::Regex;

/// Path prefixes (without the leading `/`) the gate never sees.
pub const EXCLUDED_PREFIXES: &[&str] = &["api", "static", "favicon.ico"];

lazy_static! {
    static ref STATIC_ASSET: Regex =
        Regex::new(r"(?i)\.(?:png|jpe?g|gif|svg|webp|avif|ico|bmp)$").unwrap();
}

/// Decides which request paths are subject to the access gate.
#[derive(Clone, Debug)]
pub struct RouteMatcher {
    excluded: Vec<String>,
}

impl RouteMatcher {
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    /// False for API routes, framework asset routes and the favicon.
    ///
    /// Prefixes match right after the leading slash, so `/apidocs` is
    /// excluded along with `/api/health`.
    pub fn is_gated(&self, path: &str) -> bool {
        let rest = path.strip_prefix('/').unwrap_or(path);
        !self.excluded.iter().any(|prefix| rest.starts_with(prefix.as_str()))
    }

    pub fn is_static_asset(&self, path: &str) -> bool {
        STATIC_ASSET.is_match(path)
    }
}

impl Default for RouteMatcher {
    fn default() -> Self {
        Self::new(EXCLUDED_PREFIXES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_gated() {
        let routes = RouteMatcher::default();
        assert!(routes.is_gated("/"));
        assert!(routes.is_gated("/about"));
        assert!(routes.is_gated("/images/photo.png"));
    }

    #[test]
    fn excluded_prefixes_skip_the_gate() {
        let routes = RouteMatcher::default();
        assert!(!routes.is_gated("/api/health"));
        assert!(!routes.is_gated("/apidocs"));
        assert!(!routes.is_gated("/static/site.css"));
        assert!(!routes.is_gated("/favicon.ico"));
    }

    #[test]
    fn image_extensions_are_static_assets() {
        let routes = RouteMatcher::default();
        for path in [
            "/hero.png",
            "/a/b/c.JPG",
            "/photo.jpeg",
            "/anim.gif",
            "/logo.svg",
            "/x.webp",
            "/x.avif",
            "/icon.ico",
            "/old.bmp",
        ] {
            assert!(routes.is_static_asset(path), "{path}");
        }
        for path in ["/", "/index.html", "/png", "/file.png.txt", "/script.js"] {
            assert!(!routes.is_static_asset(path), "{path}");
        }
    }

    #[test]
    fn custom_exclusions() {
        let routes = RouteMatcher::new(["health"]);
        assert!(!routes.is_gated("/healthz"));
        assert!(routes.is_gated("/api/health"));
    }
}
