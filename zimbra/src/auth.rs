use crate::{soap::Content, AuthToken, Client, Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    account: AccountBy<'a>,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct AccountBy<'a> {
    by: &'static str,
    #[serde(rename = "_content")]
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(rename = "authToken", default)]
    auth_token: Vec<Content>,
}

/// Exchange admin credentials for a session token. A single attempt:
/// rejected credentials or an unreachable endpoint fail the call and the
/// caller is expected to abort the run.
pub async fn authenticate(client: &Client, name: &str, password: &str) -> Result<AuthToken> {
    let request = AuthRequest {
        account: AccountBy {
            by: "name",
            content: name,
        },
        password,
    };
    let response: AuthResponse = client.send(None, "AuthRequest", &request).await?;
    let token = response
        .auth_token
        .into_iter()
        .next()
        .ok_or_else(|| Error::unexpected("AuthResponse carried no authToken"))?;
    Ok(AuthToken::new(token.content))
}
