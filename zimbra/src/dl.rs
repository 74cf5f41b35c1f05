use crate::{
    soap::{Attr, Content, ContentRef},
    AuthToken, Client, Error, Result,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A distribution list as reported by the admin service: identity, attribute
/// settings flattened to a map, and the current membership.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionList {
    pub id: String,
    pub name: String,
    pub settings: HashMap<String, String>,
    pub members: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GetResponse {
    #[serde(default)]
    dl: Vec<Dl>,
}

#[derive(Debug, Deserialize)]
struct Dl {
    id: String,
    name: String,
    #[serde(default)]
    a: Vec<Attr>,
    #[serde(default)]
    dlm: Vec<Content>,
}

impl From<Dl> for DistributionList {
    fn from(dl: Dl) -> Self {
        Self {
            id: dl.id,
            name: dl.name,
            settings: dl
                .a
                .into_iter()
                .map(|attr| (attr.n, attr.content))
                .collect(),
            members: dl.dlm.into_iter().map(|member| member.content).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GetRequest<'a> {
    dl: DlBy<'a>,
}

#[derive(Debug, Serialize)]
struct DlBy<'a> {
    by: &'static str,
    #[serde(rename = "_content")]
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct MemberRequest<'a> {
    id: &'a str,
    dlm: ContentRef<'a>,
}

/// Look up a distribution list by name. A list with no `dlm` elements comes
/// back with empty membership.
pub async fn get_by_name(
    client: &Client,
    token: &AuthToken,
    name: &str,
) -> Result<DistributionList> {
    let request = GetRequest {
        dl: DlBy {
            by: "name",
            content: name,
        },
    };
    let response: GetResponse = client
        .send(Some(token), "GetDistributionListRequest", &request)
        .await?;
    response
        .dl
        .into_iter()
        .next()
        .map(DistributionList::from)
        .ok_or_else(|| Error::unexpected("GetDistributionListResponse carried no dl"))
}

/// Add a single member to the given list id. One member per round trip.
pub async fn add_member(
    client: &Client,
    token: &AuthToken,
    id: &str,
    member: &str,
) -> Result {
    let request = MemberRequest {
        id,
        dlm: ContentRef { content: member },
    };
    let _: serde_json::Value = client
        .send(Some(token), "AddDistributionListMemberRequest", &request)
        .await?;
    Ok(())
}

/// Remove a single member from the given list id.
pub async fn remove_member(
    client: &Client,
    token: &AuthToken,
    id: &str,
    member: &str,
) -> Result {
    let request = MemberRequest {
        id,
        dlm: ContentRef { content: member },
    };
    let _: serde_json::Value = client
        .send(Some(token), "RemoveDistributionListMemberRequest", &request)
        .await?;
    Ok(())
}
