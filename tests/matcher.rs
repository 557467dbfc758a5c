#[cfg(test)]
mod tests {
    use tusk::engine::matcher::{domains_match, matching_tool, normalize_host};
    use tusk::libs::catalog::Tool;

    fn tool(id: &str, url: &str) -> Tool {
        Tool {
            id: id.to_string(),
            name: id.to_string(),
            url: url.to_string(),
            category: "test".to_string(),
            times_used: 0,
            last_used_at: None,
            usage_history: Vec::new(),
        }
    }

    #[test]
    fn test_normalize_host_lowercases_and_strips_www() {
        assert_eq!(normalize_host("https://WWW.Figma.COM/files"), Some("figma.com".to_string()));
        assert_eq!(normalize_host("https://App.Figma.com"), Some("app.figma.com".to_string()));
    }

    #[test]
    fn test_normalize_host_accepts_bare_domains() {
        // Catalog entries are often saved without a scheme
        assert_eq!(normalize_host("figma.com"), Some("figma.com".to_string()));
        assert_eq!(normalize_host("www.figma.com"), Some("figma.com".to_string()));
        assert_eq!(normalize_host("figma.com/pricing"), Some("figma.com".to_string()));
    }

    #[test]
    fn test_normalize_host_handles_ports_and_paths() {
        assert_eq!(normalize_host("https://app.example.com:8443/dashboard?tab=1"), Some("app.example.com".to_string()));
        // "localhost:3000" parses as a scheme without the retry, not a host
        assert_eq!(normalize_host("localhost:3000"), Some("localhost".to_string()));
    }

    #[test]
    fn test_normalize_host_rejects_garbage() {
        assert_eq!(normalize_host(""), None);
        assert_eq!(normalize_host("   "), None);
        assert_eq!(normalize_host("not a url at all"), None);
        assert_eq!(normalize_host("://"), None);
    }

    #[test]
    fn test_domains_match_equal_hosts() {
        assert!(domains_match("figma.com", "figma.com"));
        assert!(!domains_match("figma.com", "notion.so"));
    }

    #[test]
    fn test_domains_match_subdomains_both_directions() {
        assert!(domains_match("app.figma.com", "figma.com"));
        assert!(domains_match("figma.com", "app.figma.com"));
        assert!(domains_match("deep.app.figma.com", "figma.com"));
    }

    #[test]
    fn test_domains_match_requires_dot_boundary() {
        assert!(!domains_match("myfigma.com", "figma.com"));
        assert!(!domains_match("figma.com", "myfigma.com"));
    }

    #[test]
    fn test_matching_tool_finds_subdomain_visit() {
        let tools = vec![tool("t1", "figma.com"), tool("t2", "notion.so")];
        let matched = matching_tool(&tools, "https://app.figma.com/files/recent").unwrap();
        assert_eq!(matched.id, "t1");
    }

    #[test]
    fn test_matching_tool_first_catalog_entry_wins() {
        // Overlapping domains resolve by catalog order
        let tools = vec![tool("t1", "app.figma.com"), tool("t2", "figma.com")];
        let matched = matching_tool(&tools, "https://figma.com").unwrap();
        assert_eq!(matched.id, "t1");
    }

    #[test]
    fn test_matching_tool_skips_unparseable_tool_urls() {
        let tools = vec![tool("t1", ""), tool("t2", "figma.com")];
        let matched = matching_tool(&tools, "https://www.figma.com").unwrap();
        assert_eq!(matched.id, "t2");
    }

    #[test]
    fn test_matching_tool_none_for_unmatched_or_invalid() {
        let tools = vec![tool("t1", "figma.com")];
        assert!(matching_tool(&tools, "https://github.com").is_none());
        assert!(matching_tool(&tools, "not a url at all").is_none());
        assert!(matching_tool(&[], "https://figma.com").is_none());
    }
}
