use crate::libs::catalog::Tool;
use url::Url;

/// Extracts a comparable host from a URL string.
///
/// Hosts are lowercased and a leading `www.` is stripped. Strings without a
/// scheme get one retry with `https://` prefixed, since catalog entries are
/// often saved as bare domains like `figma.com`. Anything that still fails
/// to parse yields `None` and can never match.
pub fn normalize_host(raw: &str) -> Option<String> {
    let parsed = match Url::parse(raw) {
        Ok(url) if url.host_str().is_some() => url,
        _ => Url::parse(&format!("https://{}", raw)).ok()?,
    };
    let host = parsed.host_str()?.to_ascii_lowercase();
    let trimmed = host.strip_prefix("www.").unwrap_or(&host);
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

/// True when two normalized hosts refer to the same site.
///
/// Equal hosts match, and so does a subdomain relationship in either
/// direction: `app.figma.com` matches a tool saved as `figma.com`, and a
/// tool saved as `app.figma.com` matches a visit to `figma.com`. The dot
/// boundary keeps `myfigma.com` from matching `figma.com`.
pub fn domains_match(a: &str, b: &str) -> bool {
    a == b || a.ends_with(&format!(".{}", b)) || b.ends_with(&format!(".{}", a))
}

/// Finds the first catalog tool whose domain matches the visited URL.
///
/// Catalog order decides ties, so overlapping tool domains resolve the same
/// way every time.
pub fn matching_tool<'a>(tools: &'a [Tool], visited_url: &str) -> Option<&'a Tool> {
    let visited = normalize_host(visited_url)?;
    tools.iter().find(|tool| match normalize_host(&tool.url) {
        Some(tool_host) => domains_match(&visited, &tool_host),
        None => false,
    })
}
