//! Client/server exchange over a real localhost listener.

use std::time::Duration;

use gorpc::{method_hash, validated, Client, Error, HandlerResult, Server};
use gorpc_testsuite::{AuthRequest, AuthResponse};

const KNOWN_ID: u64 = 42;

fn success_response() -> AuthResponse {
    AuthResponse {
        id: KNOWN_ID,
        name: "Ferris".to_owned(),
        email: "ferris@example.com".to_owned(),
    }
}

async fn auth_handler(req: AuthRequest) -> HandlerResult<AuthResponse> {
    if req.id == KNOWN_ID {
        Ok(success_response())
    } else {
        Err(Error::new(451, "FOOBAR").into())
    }
}

/// Spawns a server for the auth method and returns its base address.
async fn spawn_server(with_validation: bool) -> String {
    let mut server = Server::new(-1);

    if with_validation {
        server.register(validated(auth_handler));
    } else {
        server.register(auth_handler);
    }

    let port = server.port();
    tokio::spawn(server.serve());

    // give the listener a moment to bind
    tokio::time::sleep(Duration::from_millis(100)).await;

    format!("http://127.0.0.1:{port}")
}

#[tokio::test(flavor = "multi_thread")]
async fn happy_path_roundtrip() {
    let addr = spawn_server(false).await;
    let client = Client::<AuthRequest, AuthResponse>::new(&addr);

    let res = client
        .call(&AuthRequest {
            id: KNOWN_ID,
            password: "password".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(res, success_response());
}

#[tokio::test(flavor = "multi_thread")]
async fn typed_handler_errors_are_relayed_verbatim() {
    let addr = spawn_server(false).await;
    let client = Client::<AuthRequest, AuthResponse>::new(&addr);

    let err = client
        .call(&AuthRequest {
            id: 1,
            password: "password".to_owned(),
        })
        .await
        .unwrap_err();

    match err {
        gorpc::ClientError::Status { status, text } => {
            assert_eq!(status.as_u16(), 451);
            assert_eq!(text, "FOOBAR");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn unregistered_methods_are_not_found() {
    let addr = spawn_server(false).await;

    // a (Req, Res) pair nobody registered
    let client = Client::<AuthResponse, AuthRequest>::new(&addr);
    let err = client.call(&success_response()).await.unwrap_err();

    match err {
        gorpc::ClientError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn request_gates_reply_with_distinct_status_codes() {
    let addr = spawn_server(false).await;
    let hash = method_hash::<AuthRequest, AuthResponse>();
    let url = format!("{addr}/{hash}");
    let http = reqwest::Client::new();

    let body = goc::encode(&AuthRequest {
        id: KNOWN_ID,
        password: "password".to_owned(),
    })
    .unwrap();

    // wrong HTTP method
    let status = http.get(&url).send().await.unwrap().status();
    assert_eq!(status.as_u16(), 405);

    // wrong content type
    let status = http
        .post(&url)
        .header("content-type", "application/json")
        .header("accept", gorpc::MIME_TYPE)
        .header(gorpc::HEADER_METHOD_HASH, hash.as_str())
        .body(body.clone())
        .send()
        .await
        .unwrap()
        .status();
    assert_eq!(status.as_u16(), 415);

    // wrong accept
    let status = http
        .post(&url)
        .header("content-type", gorpc::MIME_TYPE)
        .header("accept", "application/json")
        .header(gorpc::HEADER_METHOD_HASH, hash.as_str())
        .body(body.clone())
        .send()
        .await
        .unwrap()
        .status();
    assert_eq!(status.as_u16(), 406);

    // missing method hash header
    let status = http
        .post(&url)
        .header("content-type", gorpc::MIME_TYPE)
        .header("accept", gorpc::MIME_TYPE)
        .body(body.clone())
        .send()
        .await
        .unwrap()
        .status();
    assert_eq!(status.as_u16(), 400);

    // mismatched method hash header
    let status = http
        .post(&url)
        .header("content-type", gorpc::MIME_TYPE)
        .header("accept", gorpc::MIME_TYPE)
        .header(gorpc::HEADER_METHOD_HASH, "00000000000000000000000000000000")
        .body(body.clone())
        .send()
        .await
        .unwrap()
        .status();
    assert_eq!(status.as_u16(), 403);

    // undecodable body
    let status = http
        .post(&url)
        .header("content-type", gorpc::MIME_TYPE)
        .header("accept", gorpc::MIME_TYPE)
        .header(gorpc::HEADER_METHOD_HASH, hash.as_str())
        .body(vec![0x01])
        .send()
        .await
        .unwrap()
        .status();
    assert_eq!(status.as_u16(), 400);
}

#[tokio::test(flavor = "multi_thread")]
async fn success_responses_carry_the_goc_headers() {
    let addr = spawn_server(false).await;
    let hash = method_hash::<AuthRequest, AuthResponse>();
    let url = format!("{addr}/{hash}");

    let body = goc::encode(&AuthRequest {
        id: KNOWN_ID,
        password: "password".to_owned(),
    })
    .unwrap();

    let response = reqwest::Client::new()
        .post(&url)
        .header("content-type", gorpc::MIME_TYPE)
        .header("accept", gorpc::MIME_TYPE)
        .header(gorpc::HEADER_METHOD_HASH, hash.as_str())
        .body(body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let headers = response.headers();
    assert_eq!(headers.get("content-type").unwrap(), gorpc::MIME_TYPE);
    assert_eq!(headers.get(gorpc::HEADER_METHOD_HASH).unwrap(), hash.as_str());
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");

    let payload = response.bytes().await.unwrap();
    assert_eq!(goc::decode::<AuthResponse>(&payload).unwrap(), success_response());
}

#[tokio::test(flavor = "multi_thread")]
async fn validated_handlers_reject_invalid_requests() {
    let addr = spawn_server(true).await;
    let client = Client::<AuthRequest, AuthResponse>::new(&addr);

    // an empty password fails the request validator server-side
    let err = client
        .call(&AuthRequest {
            id: KNOWN_ID,
            password: String::new(),
        })
        .await
        .unwrap_err();

    match err {
        gorpc::ClientError::Status { status, text } => {
            assert_eq!(status.as_u16(), 500);
            assert!(text.contains("invalid request"));
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn client_side_validation_fails_before_sending() {
    // no server needed: the request never leaves the client
    let client = Client::<AuthRequest, AuthResponse>::new("http://127.0.0.1:1");

    let err = client
        .call_validated(&AuthRequest {
            id: KNOWN_ID,
            password: String::new(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, gorpc::ClientError::InvalidRequest(_)));
}
