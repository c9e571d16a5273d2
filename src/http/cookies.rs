use std::fs;
use std::path::Path;

use crate::errors::FetchError;

const HTTP_ONLY_PREFIX: &str = "#HttpOnly_";
const NETSCAPE_FIELDS: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct Cookie {
    pub domain: String,
    pub name: String,
    pub value: String,
}

/// Cookies exported from a browser in Netscape `cookies.txt` format.
///
/// Expiry is ignored: an exported session cookie is still worth sending,
/// and the server answers 403 once it is stale.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    cookies: Vec<Cookie>,
}

impl CookieJar {
    pub fn load(path: &Path) -> Result<Self, FetchError> {
        if !path.exists() {
            return Err(FetchError::MissingCookies(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let cookies = content.lines().filter_map(parse_line).collect();
        Self { cookies }
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// `Cookie` header value for a request to `host`
    pub fn header_for(&self, host: &str) -> Option<String> {
        let pairs: Vec<String> = self
            .cookies
            .iter()
            .filter(|cookie| domain_matches(host, &cookie.domain))
            .map(|cookie| format!("{}={}", cookie.name, cookie.value))
            .collect();

        if pairs.is_empty() {
            None
        } else {
            Some(pairs.join("; "))
        }
    }
}

fn parse_line(line: &str) -> Option<Cookie> {
    let line = line.trim_end_matches('\r');

    let line = match line.strip_prefix(HTTP_ONLY_PREFIX) {
        Some(rest) => rest,
        None if line.starts_with('#') || line.trim().is_empty() => return None,
        None => line,
    };

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < NETSCAPE_FIELDS {
        return None;
    }

    Some(Cookie {
        domain: fields[0].to_string(),
        name: fields[5].to_string(),
        value: fields[6].to_string(),
    })
}

fn domain_matches(host: &str, domain: &str) -> bool {
    let domain = domain.trim_start_matches('.').to_ascii_lowercase();
    let host = host.to_ascii_lowercase();

    host == domain || host.ends_with(&format!(".{}", domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# Netscape HTTP Cookie File\n\
        # This is a generated file!\n\
        \n\
        .tracker.gg\tTRUE\t/\tTRUE\t1767225600\tsession\tabc123\n\
        #HttpOnly_api.tracker.gg\tFALSE\t/\tTRUE\t0\tcf_clearance\txyz\r\n\
        .example.com\tTRUE\t/\tFALSE\t0\tother\tnope\n\
        broken line without tabs\n";

    #[test]
    fn test_parse_skips_comments_and_keeps_http_only() {
        let jar = CookieJar::parse(SAMPLE);

        assert_eq!(jar.len(), 3);
    }

    #[test]
    fn test_header_only_includes_matching_domains() {
        let jar = CookieJar::parse(SAMPLE);

        let header = jar.header_for("api.tracker.gg").unwrap();

        assert_eq!(header, "session=abc123; cf_clearance=xyz");
    }

    #[test]
    fn test_no_header_for_unrelated_host() {
        let jar = CookieJar::parse(SAMPLE);

        assert!(jar.header_for("docs.google.com").is_none());
        assert!(jar.header_for("nottracker.gg").is_none());
    }

    #[test]
    fn test_missing_file_is_typed_error() {
        let path = std::env::temp_dir().join("campaign_tools_no_such_cookies.txt");

        let err = CookieJar::load(&path).unwrap_err();

        assert!(err.is_missing_cookies());
    }
}
