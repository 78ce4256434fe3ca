use crate::error::{OwnerError, Result};
use crate::orgs::{OrgPage, Organization, OrganizationsApi};
use octocrab::Octocrab;
use serde::Deserialize;

const ORGANIZATIONS_QUERY: &str = r#"query OrganizationList($login: String!, $limit: Int!, $endCursor: String) {
    user(login: $login) {
        organizations(first: $limit, after: $endCursor) {
            totalCount
            nodes {
                login
            }
            pageInfo {
                hasNextPage
                endCursor
            }
        }
    }
}"#;

pub struct GithubClient {
    octocrab: Octocrab,
    verbose: bool,
}

#[derive(Debug, Deserialize)]
pub struct AuthenticatedUser {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct RateLimit {
    pub resources: RateLimitResources,
}

#[derive(Debug, Deserialize)]
pub struct RateLimitResources {
    pub core: RateLimitResource,
}

#[derive(Debug, Deserialize)]
pub struct RateLimitResource {
    pub limit: u64,
    pub remaining: u64,
    pub reset: i64,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<QueryData>,
    #[serde(default)]
    errors: Vec<GraphQlErrorItem>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorItem {
    message: String,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
struct UserNode {
    organizations: OrganizationConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrganizationConnection {
    total_count: usize,
    nodes: Vec<Organization>,
    page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}

impl GithubClient {
    /// Builds a client. Without a token, remote calls will fail; local-only
    /// flows never issue any.
    pub fn new(token: Option<&str>, api_url: Option<&str>, verbose: bool) -> Result<Self> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }
        if let Some(url) = api_url {
            builder = builder
                .base_uri(url)
                .map_err(|e| OwnerError::Fetch(e.to_string()))?;
        }
        let octocrab = builder
            .build()
            .map_err(|e| OwnerError::Fetch(e.to_string()))?;
        Ok(Self { octocrab, verbose })
    }

    pub async fn get_rate_limit(&self) -> Result<RateLimit> {
        let rate_limit: RateLimit = self
            .octocrab
            .get("/rate_limit", None::<&()>)
            .await
            .map_err(|e| OwnerError::Fetch(e.to_string()))?;
        Ok(rate_limit)
    }

    pub async fn check_rate_limit_if_verbose(&self) {
        if !self.verbose {
            return;
        }
        match self.get_rate_limit().await {
            Ok(rl) => {
                let core = &rl.resources.core;
                eprintln!(
                    "Rate limit: {}/{} remaining (resets at {})",
                    core.remaining,
                    core.limit,
                    chrono::DateTime::from_timestamp(core.reset, 0)
                        .map(|dt| dt.format("%H:%M:%S UTC").to_string())
                        .unwrap_or_else(|| core.reset.to_string())
                );
            }
            Err(e) => eprintln!("Could not check rate limit: {e}"),
        }
    }
}

impl OrganizationsApi for GithubClient {
    async fn current_login(&self) -> Result<String> {
        let user: AuthenticatedUser = self
            .octocrab
            .get("/user", None::<&()>)
            .await
            .map_err(|e| OwnerError::AuthResolution(e.to_string()))?;
        Ok(user.login)
    }

    async fn organization_page(
        &self,
        login: &str,
        limit: u32,
        after: Option<&str>,
    ) -> Result<OrgPage> {
        let mut variables = serde_json::json!({
            "login": login,
            "limit": limit,
        });
        if let Some(cursor) = after {
            variables["endCursor"] = serde_json::Value::String(cursor.to_string());
        }
        let payload = serde_json::json!({
            "query": ORGANIZATIONS_QUERY,
            "variables": variables,
        });

        let response: GraphQlResponse = self
            .octocrab
            .post("/graphql", Some(&payload))
            .await
            .map_err(|e| OwnerError::Fetch(e.to_string()))?;

        if let Some(error) = response.errors.first() {
            return Err(OwnerError::Fetch(error.message.clone()));
        }

        let user = response
            .data
            .and_then(|data| data.user)
            .ok_or_else(|| OwnerError::Fetch(format!("no such user: {login}")))?;

        let connection = user.organizations;
        Ok(OrgPage {
            total_count: connection.total_count,
            nodes: connection.nodes,
            has_next_page: connection.page_info.has_next_page,
            end_cursor: connection.page_info.end_cursor,
        })
    }
}
