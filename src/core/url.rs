//! URL path type for generated route paths.
//!
//! - Input boundary: decoded segments (route keys, literal template text)
//! - Internal representation: Always encoded, one segment at a time
//! - Output boundary: join onto a base URL

use std::sync::Arc;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Characters escaped inside a single path segment.
///
/// Everything outside RFC 3986 `pchar` is encoded, plus `/` so that a route
/// key can never introduce an extra segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Encoded root-relative URL path
///
/// Invariants:
/// - Each segment is percent-encoded on its own
/// - Always starts with `/`
/// - Never ends with `/` unless it is the root
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Build from decoded segments. Empty segments are skipped.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut path = String::new();
        for segment in segments {
            let segment = segment.as_ref();
            if segment.is_empty() {
                continue;
            }
            path.push('/');
            path.extend(utf8_percent_encode(segment, SEGMENT));
        }
        if path.is_empty() {
            path.push('/');
        }
        Self(Arc::from(path))
    }

    /// Get the encoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decoded segments, without the leading slash.
    pub fn segments(&self) -> Vec<String> {
        self.0
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
            .collect()
    }

    /// Check if this is the site root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// Join onto a base URL, keeping the base's own path.
    ///
    /// `http://example.com/app` + `/users/1` -> `http://example.com/app/users/1`
    pub fn join_onto(&self, base: &url::Url) -> Result<url::Url, url::ParseError> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        // `./` keeps a leading `name:` segment from parsing as a scheme
        base.join(&format!("./{}", self.0.trim_start_matches('/')))
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self(Arc::from("/"))
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_segments() {
        assert_eq!(UrlPath::from_segments(["users", "1"]), "/users/1");
        assert_eq!(UrlPath::from_segments(["users", "", "edit"]), "/users/edit");
        assert_eq!(UrlPath::from_segments(Vec::<String>::new()), "/");
    }

    #[test]
    fn test_encodes_space() {
        let url = UrlPath::from_segments(["users", "Clifford James"]);
        assert_eq!(url.as_str(), "/users/Clifford%20James");
    }

    #[test]
    fn test_encodes_slash_inside_segment() {
        let url = UrlPath::from_segments(["tags", "a/b"]);
        assert_eq!(url.as_str(), "/tags/a%2Fb");
        assert_eq!(url.segments(), vec!["tags", "a/b"]);
    }

    #[test]
    fn test_encodes_chinese() {
        let url = UrlPath::from_segments(["posts", "中文"]);
        assert_eq!(url.as_str(), "/posts/%E4%B8%AD%E6%96%87");
    }

    #[test]
    fn test_join_onto_root() {
        let base = url::Url::parse("http://localhost").unwrap();
        let url = UrlPath::from_segments(["users", "1"]);
        assert_eq!(url.join_onto(&base).unwrap().as_str(), "http://localhost/users/1");
    }

    #[test]
    fn test_join_onto_prefixed_base() {
        let base = url::Url::parse("https://example.com/app").unwrap();
        let url = UrlPath::from_segments(["users", "1", "edit"]);
        assert_eq!(
            url.join_onto(&base).unwrap().as_str(),
            "https://example.com/app/users/1/edit"
        );
    }

    #[test]
    fn test_join_keeps_encoding() {
        let base = url::Url::parse("http://localhost").unwrap();
        let url = UrlPath::from_segments(["users", "Clifford James"]);
        assert_eq!(
            url.join_onto(&base).unwrap().as_str(),
            "http://localhost/users/Clifford%20James"
        );
    }

    #[test]
    fn test_join_colon_segment_is_not_a_scheme() {
        let base = url::Url::parse("http://localhost").unwrap();
        let url = UrlPath::from_segments(["mailto:me", "1"]);
        assert_eq!(
            url.join_onto(&base).unwrap().as_str(),
            "http://localhost/mailto:me/1"
        );
    }

    #[test]
    fn test_join_onto_root_path() {
        let base = url::Url::parse("http://localhost/").unwrap();
        assert_eq!(
            UrlPath::default().join_onto(&base).unwrap().as_str(),
            "http://localhost/"
        );
    }
}
