use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Organizations fetched per page.
pub const PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub login: String,
}

/// The authenticated user's login merged with every organization they belong
/// to. The user is always the first entry, and `total_count` is the
/// remote-reported organization count plus one for that entry.
#[derive(Debug, Serialize)]
pub struct OrganizationList {
    pub organizations: Vec<Organization>,
    pub total_count: usize,
    pub user: String,
}

impl OrganizationList {
    pub fn contains(&self, login: &str) -> bool {
        self.organizations.iter().any(|org| org.login == login)
    }

    pub fn logins(&self) -> Vec<String> {
        self.organizations
            .iter()
            .map(|org| org.login.clone())
            .collect()
    }

    /// Summary line shown above the list.
    pub fn header(&self) -> String {
        if self.total_count == 0 {
            return format!("There are no organizations associated with @{}", self.user);
        }
        format!(
            "Showing {} of {}",
            self.organizations.len(),
            pluralize(self.total_count, "organization")
        )
    }
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// One page of the remote organizations connection.
#[derive(Debug)]
pub struct OrgPage {
    pub total_count: usize,
    pub nodes: Vec<Organization>,
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// Transport seam for the organization listing: resolve the authenticated
/// login, then fetch one page at a time.
pub trait OrganizationsApi {
    fn current_login(&self) -> impl std::future::Future<Output = Result<String>> + Send;
    fn organization_page(
        &self,
        login: &str,
        limit: u32,
        after: Option<&str>,
    ) -> impl std::future::Future<Output = Result<OrgPage>> + Send;
}

pub struct OrganizationLister<A> {
    api: A,
}

impl<A: OrganizationsApi> OrganizationLister<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetches the complete organization list for the authenticated user.
    ///
    /// The user's own login is injected as the first entry, pages are
    /// appended strictly in the order received, and any page failure aborts
    /// the whole listing.
    pub async fn list_all(&self) -> Result<OrganizationList> {
        let user = self.api.current_login().await?;

        let mut list = OrganizationList {
            organizations: vec![Organization {
                login: user.clone(),
            }],
            total_count: 0,
            user,
        };

        let mut cursor: Option<String> = None;
        loop {
            let page = self
                .api
                .organization_page(&list.user, PAGE_SIZE, cursor.as_deref())
                .await?;

            // Computed once, from the first page.
            if list.total_count == 0 {
                list.total_count = page.total_count + 1;
            }

            list.organizations.extend(page.nodes);

            if page.has_next_page {
                cursor = page.end_cursor;
            } else {
                break;
            }
        }

        Ok(list)
    }
}
