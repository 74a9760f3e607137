//! Option lists for the credential and server URL selections.

use crate::app::services::option_list_builder::{
    build_credential_options, build_server_url_options,
};
use crate::domain::{ListOption, ProjectScope};
use crate::ports::{CredentialStore, HostConnectionRegistry};

/// Which selection list to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionList {
    Credentials,
    ServerUrls,
}

/// Build the requested option list.
pub fn execute<C, H>(
    credentials: &C,
    hosts: &H,
    list: OptionList,
    scope: &ProjectScope,
    selected: Option<&str>,
) -> Vec<ListOption>
where
    C: CredentialStore,
    H: HostConnectionRegistry,
{
    match list {
        OptionList::Credentials => build_credential_options(credentials, scope, selected),
        OptionList::ServerUrls => build_server_url_options(hosts, selected),
    }
}
