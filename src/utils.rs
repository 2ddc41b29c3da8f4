use crate::error::Result;
use url::Url;

/// Resolve an announcement link against the site base URL
///
/// Absolute links are returned unchanged; relative ones are joined onto `base`.
pub fn resolve_link(base: &str, link: &str) -> Result<String> {
    let base = Url::parse(base)?;
    Ok(base.join(link)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_link() {
        let resolved = resolve_link("https://gov.wales", "/new-funding-announced").unwrap();
        assert_eq!(resolved, "https://gov.wales/new-funding-announced");
    }

    #[test]
    fn test_resolve_absolute_link() {
        let resolved =
            resolve_link("https://gov.wales", "https://www.example.org/notice").unwrap();
        assert_eq!(resolved, "https://www.example.org/notice");
    }

    #[test]
    fn test_invalid_base() {
        assert!(resolve_link("not a url", "/page").is_err());
    }
}
