use httpmock::prelude::*;
use serde_json::json;

const SOAP_PATH: &str = "/service/admin/soap";

fn client(server: &MockServer) -> zimbra::Client {
    zimbra::Client::new(&server.url(SOAP_PATH)).expect("client")
}

#[tokio::test]
async fn authenticate_returns_token() {
    let server = MockServer::start();
    let auth = server.mock(|when, then| {
        when.method(POST)
            .path(SOAP_PATH)
            .body_contains("AuthRequest")
            .body_contains("admin@example.net");
        then.status(200).json_body(json!({
            "Header": { "context": { "_jsns": "urn:zimbra" } },
            "Body": {
                "AuthResponse": {
                    "authToken": [{ "_content": "0_sessiontoken" }],
                    "lifetime": 43_200_000,
                    "_jsns": "urn:zimbraAdmin"
                }
            }
        }));
    });

    let client = client(&server);
    let token = zimbra::auth::authenticate(&client, "admin@example.net", "secret")
        .await
        .expect("token");
    assert_eq!(token.as_str(), "0_sessiontoken");
    auth.assert();
}

#[tokio::test]
async fn rejected_credentials_fault() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(SOAP_PATH).body_contains("AuthRequest");
        then.status(500).json_body(json!({
            "Body": {
                "Fault": {
                    "Code": { "Value": "soap:Sender" },
                    "Reason": { "Text": "authentication failed for [admin@example.net]" },
                    "Detail": {
                        "Error": { "Code": "account.AUTH_FAILED", "_jsns": "urn:zimbra" }
                    }
                }
            }
        }));
    });

    let client = client(&server);
    let err = zimbra::auth::authenticate(&client, "admin@example.net", "wrong")
        .await
        .expect_err("fault");
    assert!(err.is_fault());
    assert!(err.to_string().contains("account.AUTH_FAILED"));
    assert!(err.to_string().contains("authentication failed"));
}

#[tokio::test]
async fn get_by_name_flattens_list() {
    let server = MockServer::start();
    let get = server.mock(|when, then| {
        when.method(POST)
            .path(SOAP_PATH)
            .body_contains("GetDistributionListRequest")
            .body_contains("0_sessiontoken")
            .body_contains("soap@example.net");
        then.status(200).json_body(json!({
            "Body": {
                "GetDistributionListResponse": {
                    "dl": [{
                        "id": "50cbb237-1342-427c-bc7e-f1f3533ce147",
                        "name": "soap@example.net",
                        "dynamic": false,
                        "a": [
                            { "n": "zimbraMailStatus", "_content": "enabled" },
                            { "n": "uid", "_content": "soap" }
                        ],
                        "dlm": [
                            { "_content": "alice@example.net" },
                            { "_content": "bob@example.net" }
                        ]
                    }],
                    "_jsns": "urn:zimbraAdmin"
                }
            }
        }));
    });

    let client = client(&server);
    let token = zimbra::AuthToken::new("0_sessiontoken");
    let dl = zimbra::dl::get_by_name(&client, &token, "soap@example.net")
        .await
        .expect("list");
    assert_eq!(dl.id, "50cbb237-1342-427c-bc7e-f1f3533ce147");
    assert_eq!(
        dl.settings.get("zimbraMailStatus").map(String::as_str),
        Some("enabled")
    );
    assert_eq!(dl.members, vec!["alice@example.net", "bob@example.net"]);
    get.assert();
}

#[tokio::test]
async fn unknown_list_fault() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path(SOAP_PATH)
            .body_contains("GetDistributionListRequest");
        then.status(500).json_body(json!({
            "Body": {
                "Fault": {
                    "Code": { "Value": "soap:Sender" },
                    "Reason": { "Text": "no such distribution list: nosuch@example.net" },
                    "Detail": {
                        "Error": { "Code": "account.NO_SUCH_DISTRIBUTION_LIST" }
                    }
                }
            }
        }));
    });

    let client = client(&server);
    let token = zimbra::AuthToken::new("0_sessiontoken");
    let err = zimbra::dl::get_by_name(&client, &token, "nosuch@example.net")
        .await
        .expect_err("fault");
    assert!(err.to_string().contains("account.NO_SUCH_DISTRIBUTION_LIST"));
}

#[tokio::test]
async fn add_and_remove_member() {
    let server = MockServer::start();
    let add = server.mock(|when, then| {
        when.method(POST)
            .path(SOAP_PATH)
            .body_contains("AddDistributionListMemberRequest")
            .body_contains("carol@example.net");
        then.status(200).json_body(json!({
            "Body": { "AddDistributionListMemberResponse": { "_jsns": "urn:zimbraAdmin" } }
        }));
    });
    let remove = server.mock(|when, then| {
        when.method(POST)
            .path(SOAP_PATH)
            .body_contains("RemoveDistributionListMemberRequest")
            .body_contains("dave@example.net");
        then.status(200).json_body(json!({
            "Body": { "RemoveDistributionListMemberResponse": { "_jsns": "urn:zimbraAdmin" } }
        }));
    });

    let client = client(&server);
    let token = zimbra::AuthToken::new("0_sessiontoken");
    zimbra::dl::add_member(&client, &token, "abc", "carol@example.net")
        .await
        .expect("add");
    zimbra::dl::remove_member(&client, &token, "abc", "dave@example.net")
        .await
        .expect("remove");
    add.assert();
    remove.assert();
}

#[tokio::test]
async fn non_soap_error_body_maps_to_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(SOAP_PATH);
        then.status(404).body("not found");
    });

    let client = client(&server);
    let err = zimbra::auth::authenticate(&client, "admin@example.net", "secret")
        .await
        .expect_err("status error");
    assert!(!err.is_fault());
    assert!(err.to_string().contains("404"));
}
