use url::{Origin, Position, Url};

use crate::error::NavError;

/// Where an href points, relative to the current document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HrefKind {
    /// In-page `#fragment` link.
    Anchor,
    /// Same origin. Holds path, query and fragment with the origin stripped.
    Internal(String),
    External,
}

/// The current document location, used for same-origin checks.
#[derive(Debug, Clone)]
pub struct Location {
    url: Url,
    origin: Origin,
}

impl Location {
    pub fn parse(url: &str) -> Result<Self, NavError> {
        let parsed = Url::parse(url).map_err(|source| NavError::InvalidLocation {
            url: url.to_string(),
            source,
        })?;
        let origin = parsed.origin();
        if !origin.is_tuple() {
            return Err(NavError::OpaqueOrigin(url.to_string()));
        }
        Ok(Self { url: parsed, origin })
    }

    pub fn origin(&self) -> String {
        self.origin.ascii_serialization()
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn classify(&self, href: &str) -> HrefKind {
        if href.starts_with('#') {
            return HrefKind::Anchor;
        }
        // `/\host` and `/<tab>/host` are protocol-relative, so nothing skips the join.
        match self.url.join(href) {
            Ok(target) if target.origin() == self.origin => {
                HrefKind::Internal(target[Position::BeforePath..].to_string())
            }
            _ => HrefKind::External,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> Location {
        Location::parse("http://localhost:3000/app/page").unwrap()
    }

    #[test]
    fn origin_serialization() {
        assert_eq!(loc().origin(), "http://localhost:3000");
    }

    #[test]
    fn rejects_bad_locations() {
        assert!(matches!(
            Location::parse("not a url"),
            Err(NavError::InvalidLocation { .. })
        ));
        assert!(matches!(
            Location::parse("data:text/plain,hi"),
            Err(NavError::OpaqueOrigin(_))
        ));
    }

    #[test]
    fn classify_hrefs() {
        let l = loc();
        assert_eq!(l.classify("#here"), HrefKind::Anchor);
        assert_eq!(l.classify("/foo"), HrefKind::Internal("/foo".into()));
        assert_eq!(
            l.classify("http://localhost:3000/foo?x=y#top"),
            HrefKind::Internal("/foo?x=y#top".into())
        );
        assert_eq!(l.classify("other"), HrefKind::Internal("/app/other".into()));
        assert_eq!(l.classify("http://domain.does.not.exist/foo"), HrefKind::External);
        assert_eq!(l.classify("https://localhost:3000/foo"), HrefKind::External);
        assert_eq!(l.classify("//localhost:4000/foo"), HrefKind::External);
        assert_eq!(l.classify("mailto:me@example.com"), HrefKind::External);
    }

    #[test]
    fn slash_lookalikes_resolve_to_their_host() {
        let l = loc();
        assert_eq!(l.classify("/\\evil.example/x"), HrefKind::External);
        assert_eq!(l.classify("/\t/evil.example/x"), HrefKind::External);
        assert_eq!(l.classify("/\\localhost:3000/x"), HrefKind::Internal("/x".into()));
    }

    #[test]
    fn root_relative_paths_are_normalized() {
        let l = loc();
        assert_eq!(l.classify("/a/../b?q=1"), HrefKind::Internal("/b?q=1".into()));
    }

    #[test]
    fn default_port_matches_same_origin() {
        let l = Location::parse("https://example.com/").unwrap();
        assert_eq!(
            l.classify("https://example.com:443/a"),
            HrefKind::Internal("/a".into())
        );
    }
}
