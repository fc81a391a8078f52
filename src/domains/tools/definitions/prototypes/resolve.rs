//! Prototype selection: which id a detail lookup should fetch.

use tracing::debug;

use super::model::ListingItem;
use crate::domains::tools::ToolError;

/// How a detail lookup identifies its prototype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<'a> {
    /// Fetch this id directly.
    Id(&'a str),
    /// Resolve this name against the listing first.
    Name(&'a str),
}

/// Pick the selector from optional `id` and `name` arguments.
///
/// Empty strings count as absent, and a present `id` wins over `name`.
pub fn select<'a>(id: Option<&'a str>, name: Option<&'a str>) -> Result<Selector<'a>, ToolError> {
    match (
        id.filter(|s| !s.is_empty()),
        name.filter(|s| !s.is_empty()),
    ) {
        (Some(id), _) => Ok(Selector::Id(id)),
        (None, Some(name)) => Ok(Selector::Name(name)),
        (None, None) => Err(ToolError::usage("Provide either 'id' or 'name'.")),
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Find the id of the first item whose name matches `name`.
///
/// Matching ignores case and surrounding whitespace. When nothing matches the
/// error lists every name seen, in listing order. Duplicate names are not
/// reported; the earliest one wins.
pub fn resolve_id_by_name(name: &str, items: &[ListingItem]) -> Result<String, ToolError> {
    let target = normalize(name);
    let mut candidates = Vec::with_capacity(items.len());

    for item in items {
        if normalize(&item.name) == target {
            debug!("Resolved {:?} to id {}", name, item.id);
            return Ok(item.id.clone());
        }
        candidates.push(item.name.clone());
    }

    Err(ToolError::NotFound {
        name: name.to_string(),
        candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::model::ListingRequest;

    fn item(id: &str, name: &str) -> ListingItem {
        ListingItem {
            id: id.to_string(),
            name: name.to_string(),
            request: ListingRequest::default(),
        }
    }

    #[test]
    fn test_select_prefers_id() {
        assert_eq!(select(Some("p1"), Some("Login")).unwrap(), Selector::Id("p1"));
    }

    #[test]
    fn test_select_falls_back_to_name() {
        assert_eq!(select(Some(""), Some("Login")).unwrap(), Selector::Name("Login"));
        assert_eq!(select(None, Some("Login")).unwrap(), Selector::Name("Login"));
    }

    #[test]
    fn test_select_requires_one_selector() {
        let err = select(Some(""), None).unwrap_err();
        assert!(matches!(err, ToolError::Usage(_)));
        assert_eq!(err.to_string(), "Provide either 'id' or 'name'.");
    }

    #[test]
    fn test_resolve_ignores_case_and_whitespace() {
        let items = vec![item("p0", "beta"), item("p1", "alpha")];
        assert_eq!(resolve_id_by_name(" Alpha ", &items).unwrap(), "p1");
    }

    #[test]
    fn test_resolve_trims_upstream_names() {
        let items = vec![item("p1", "  Login\t")];
        assert_eq!(resolve_id_by_name("login", &items).unwrap(), "p1");
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let items = vec![item("first", "Login"), item("second", "LOGIN")];
        assert_eq!(resolve_id_by_name("login", &items).unwrap(), "first");
    }

    #[test]
    fn test_resolve_failure_lists_every_candidate() {
        let items = vec![item("p1", "Login"), item("p2", "Signup"), item("p3", "Reset")];
        let err = resolve_id_by_name("Logout", &items).unwrap_err();
        match &err {
            ToolError::NotFound { candidates, .. } => {
                assert_eq!(candidates, &vec!["Login", "Signup", "Reset"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        let msg = err.to_string();
        let positions: Vec<_> = ["Login", "Signup", "Reset"]
            .iter()
            .map(|n| msg.find(n).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_resolve_against_empty_listing() {
        let err = resolve_id_by_name("Login", &[]).unwrap_err();
        assert!(err.to_string().contains("Available: []"));
    }
}
