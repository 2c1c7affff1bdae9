//! Static route table mapping URL paths to page views.

/// Descriptor for one navigable page.
///
/// Routes are defined at compile time and never change. `key` identifies the
/// page in application state, `module` names the view module materialized on
/// first navigation, and `tag` is the styling hook carried by the rendered
/// page container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    /// View module materialized when the route is first visited.
    pub module: &'static str,
    /// Path the route's navigation link points at.
    pub href: &'static str,
    /// Page key stored in application state.
    pub key: &'static str,
    /// Human-readable title, shown in navigation and the document title.
    pub title: &'static str,
    /// Tag-like class applied to the page container.
    pub tag: &'static str,
}

/// Ordered route table. The first entry is the default route that `/`
/// resolves to.
pub static ROUTES: [Route; 3] = [
    Route {
        module: "views::view_one",
        href: "/view1",
        key: "view1",
        title: "View One",
        tag: "view-one",
    },
    Route {
        module: "views::view_two",
        href: "/view2",
        key: "view2",
        title: "View Two",
        tag: "view-two",
    },
    Route {
        module: "views::view_three",
        href: "/view3",
        key: "view3",
        title: "View Three",
        tag: "view-three",
    },
];

/// Fallback for page keys that match no entry in [`ROUTES`].
pub static ROUTE_NOT_FOUND: Route = Route {
    module: "views::not_found",
    href: "/view404",
    key: "view404",
    title: "Not Found",
    tag: "view-not-found",
};

/// All routes that render a page container, the not-found route last.
pub fn all() -> impl Iterator<Item = &'static Route> {
    ROUTES.iter().chain(std::iter::once(&ROUTE_NOT_FOUND))
}

/// Extract the page key from a URL path.
///
/// `/` means the default route; any other path is taken verbatim with the
/// leading slash stripped. No further normalization happens here, so
/// `/view2/` or `/a/b` produce keys that resolve to the not-found route.
pub fn page_from_path(path: &str) -> &str {
    if path == "/" {
        ROUTES[0].key
    } else {
        path.strip_prefix('/').unwrap_or(path)
    }
}

/// Look up a route by page key.
pub fn find(key: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.key == key)
}

/// Look up a route by page key, falling back to [`ROUTE_NOT_FOUND`].
pub fn resolve(key: &str) -> &'static Route {
    find(key).unwrap_or(&ROUTE_NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path_root_is_default() {
        assert_eq!(page_from_path("/"), "view1");
    }

    #[test]
    fn test_page_from_path_strips_leading_slash() {
        assert_eq!(page_from_path("/view2"), "view2");
        assert_eq!(page_from_path("/view404"), "view404");
    }

    #[test]
    fn test_page_from_path_keeps_nested_segments() {
        // Nested or trailing-slash paths stay intact and later resolve to
        // the not-found route.
        assert_eq!(page_from_path("/view2/"), "view2/");
        assert_eq!(page_from_path("/a/b"), "a/b");
    }

    #[test]
    fn test_find_known_keys() {
        assert_eq!(find("view1").map(|r| r.title), Some("View One"));
        assert_eq!(find("view3").map(|r| r.href), Some("/view3"));
        assert_eq!(find("view404"), None);
        assert_eq!(find(""), None);
    }

    #[test]
    fn test_resolve_falls_back_to_not_found() {
        assert_eq!(resolve("view2").key, "view2");
        assert_eq!(resolve("nope").key, "view404");
        assert_eq!(resolve("view2/").key, "view404");
        assert_eq!(resolve("").key, "view404");
    }

    #[test]
    fn test_route_table_is_consistent() {
        for route in all() {
            assert_eq!(route.href, format!("/{}", route.key));
            assert!(!route.title.is_empty());
            assert!(!route.module.is_empty());
            assert!(!route.tag.is_empty());
        }

        let mut keys: Vec<_> = all().map(|r| r.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ROUTES.len() + 1);

        assert_eq!(all().last().map(|r| r.key), Some("view404"));
    }
}
