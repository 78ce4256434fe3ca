/// Combines a bare repository name with an owner into `OWNER/REPO` form.
///
/// Names that are already qualified (contain a `/`) pass through unchanged,
/// as do empty names and names with no owner to apply.
pub fn qualify(owner: &str, repo: &str) -> String {
    if repo.is_empty() || repo.contains('/') || owner.is_empty() {
        return repo.to_string();
    }
    format!("{owner}/{repo}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_repo_gets_owner_prefix() {
        assert_eq!(qualify("acme-corp", "widgets"), "acme-corp/widgets");
    }

    #[test]
    fn qualified_repo_is_unchanged() {
        assert_eq!(qualify("acme-corp", "alice/widgets"), "alice/widgets");
        assert_eq!(qualify("", "alice/widgets"), "alice/widgets");
    }

    #[test]
    fn empty_repo_is_unchanged() {
        assert_eq!(qualify("acme-corp", ""), "");
    }

    #[test]
    fn empty_owner_leaves_repo_bare() {
        assert_eq!(qualify("", "widgets"), "widgets");
    }

    #[test]
    fn qualify_is_idempotent() {
        let once = qualify("acme-corp", "widgets");
        assert_eq!(qualify("acme-corp", &once), once);
    }

    #[test]
    fn logins_are_not_normalized() {
        assert_eq!(qualify("Acme-Corp", "Widgets"), "Acme-Corp/Widgets");
    }
}
