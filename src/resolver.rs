use crate::config::OwnerStore;
use crate::error::{OwnerError, Result};
use crate::orgs::{OrganizationList, OrganizationLister, OrganizationsApi};

/// The operation selected by the caller. Exactly one mode is active per
/// invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerRequest {
    /// Report the stored default owner.
    Get,
    /// Validate the given owner against the fetched list and persist it.
    Set(String),
    /// Clear the stored default owner.
    Unset,
    /// Return the full organization list for presentation.
    List,
    /// Pick the default owner interactively, then persist it.
    Select,
}

impl OwnerRequest {
    /// Translates CLI arguments into a request, rejecting conflicting
    /// combinations before any collaborator is constructed.
    pub fn from_args(
        owner: Option<String>,
        list: bool,
        select: bool,
        unset: bool,
    ) -> Result<Self> {
        let flags = [list, select, unset].into_iter().filter(|f| *f).count();
        if flags > 1 {
            return Err(OwnerError::ArgumentConflict(
                "--list, --select, and --unset are mutually exclusive".into(),
            ));
        }
        if owner.is_some() && flags > 0 {
            return Err(OwnerError::ArgumentConflict(
                "an owner argument cannot be combined with --list, --select, or --unset".into(),
            ));
        }

        Ok(match (owner, list, select, unset) {
            (Some(owner), ..) => Self::Set(owner),
            (None, true, ..) => Self::List,
            (None, _, true, _) => Self::Select,
            (None, _, _, true) => Self::Unset,
            _ => Self::Get,
        })
    }

    /// Whether this mode requires a freshly fetched organization list.
    /// `Get` and `Unset` only touch the local store.
    pub fn needs_remote(&self) -> bool {
        matches!(self, Self::Set(_) | Self::List | Self::Select)
    }
}

/// Presentation capability supplied by the caller. `select` must return an
/// index into `choices`.
pub trait Presenter {
    fn write_line(&mut self, text: &str);
    fn select(&mut self, prompt: &str, default: &str, choices: &[String]) -> Result<usize>;
}

/// What the caller still has to render after a request completes.
#[derive(Debug)]
pub enum Resolution {
    /// All output already went through the presenter.
    Done,
    /// The fetched list, for the caller to format.
    Listed(OrganizationList),
}

pub struct OwnerResolver<A, S> {
    lister: OrganizationLister<A>,
    store: S,
}

impl<A: OrganizationsApi, S: OwnerStore> OwnerResolver<A, S> {
    pub fn new(lister: OrganizationLister<A>, store: S) -> Self {
        Self { lister, store }
    }

    pub async fn run(
        &mut self,
        request: OwnerRequest,
        presenter: &mut impl Presenter,
    ) -> Result<Resolution> {
        match request {
            OwnerRequest::Get => {
                match self.store.get() {
                    Some(owner) => presenter.write_line(&format!("Default owner: {owner}")),
                    None => presenter.write_line("No default owner set"),
                }
                Ok(Resolution::Done)
            }
            OwnerRequest::Set(owner) => {
                let list = self.lister.list_all().await?;
                self.persist_validated(&owner, &list, presenter)?;
                Ok(Resolution::Done)
            }
            OwnerRequest::Unset => {
                self.store.set("");
                self.store.write()?;
                presenter.write_line("Default owner unset");
                Ok(Resolution::Done)
            }
            OwnerRequest::List => {
                let list = self.lister.list_all().await?;
                Ok(Resolution::Listed(list))
            }
            OwnerRequest::Select => {
                let list = self.lister.list_all().await?;
                let choices = list.logins();
                let index =
                    presenter.select("Select a default owner", &list.user, &choices)?;
                let owner = choices[index].clone();
                self.persist_validated(&owner, &list, presenter)?;
                Ok(Resolution::Done)
            }
        }
    }

    /// The Set transition: an unknown owner is an informational outcome, not
    /// an error; a known owner is persisted before success is reported.
    fn persist_validated(
        &mut self,
        owner: &str,
        list: &OrganizationList,
        presenter: &mut impl Presenter,
    ) -> Result<()> {
        if !list.contains(owner) {
            presenter.write_line(&format!("Owner {owner} not found"));
            return Ok(());
        }

        self.store.set(owner);
        self.store.write()?;
        presenter.write_line(&format!("Default owner set to {owner}"));
        Ok(())
    }
}
