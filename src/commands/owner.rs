use crate::config::{FileOwnerStore, OwnerStore};
use crate::display;
use crate::error::Result;
use crate::github::GithubClient;
use crate::orgs::{OrganizationList, OrganizationLister};
use crate::resolver::{OwnerRequest, OwnerResolver, Presenter, Resolution};

/// Terminal-backed presenter: plain lines on stdout, selection via inquire.
struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }

    fn select(&mut self, prompt: &str, default: &str, choices: &[String]) -> Result<usize> {
        let start = choices.iter().position(|c| c == default).unwrap_or(0);
        let choice = inquire::Select::new(prompt, choices.to_vec())
            .with_starting_cursor(start)
            .raw_prompt()?;
        Ok(choice.index)
    }
}

pub async fn run(
    owner: &Option<String>,
    list: bool,
    select: bool,
    unset: bool,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let request = OwnerRequest::from_args(owner.clone(), list, select, unset)?;

    let store = FileOwnerStore::load()?;
    let current_default = store.get();

    // Local-only modes run without a token and without any remote calls.
    let token = if request.needs_remote() {
        Some(store.token()?)
    } else {
        None
    };
    let client = GithubClient::new(token.as_deref(), store.api_url(), verbose)?;
    if request.needs_remote() {
        client.check_rate_limit_if_verbose().await;
    }

    let mut resolver = OwnerResolver::new(OrganizationLister::new(client), store);
    let mut presenter = ConsolePresenter;

    match resolver.run(request, &mut presenter).await? {
        Resolution::Done => {}
        Resolution::Listed(orgs) => {
            display::output(json, &orgs, |data| {
                render_org_list(data, current_default.as_deref());
            });
        }
    }

    Ok(())
}

fn render_org_list(orgs: &OrganizationList, current_default: Option<&str>) {
    println!("\n{}\n", orgs.header());

    if orgs.organizations.is_empty() {
        return;
    }

    let mut table = display::new_table(&["Owner", ""]);
    for org in &orgs.organizations {
        let note = if Some(org.login.as_str()) == current_default {
            "default"
        } else if org.login == orgs.user {
            "you"
        } else {
            ""
        };
        table.add_row(vec![org.login.as_str(), note]);
    }
    println!("{table}");
}
