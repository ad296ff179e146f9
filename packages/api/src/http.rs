use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use store::{SyncError, SyncGateway, UserDraft, UserPatch, UserRecord};

const LIST_PATH: [&str; 3] = ["api", "users", "getuser"];
const CREATE_PATH: [&str; 3] = ["api", "users", "adduser"];
/// Updates address `getuser/{id}`.
const UPDATE_PATH: [&str; 3] = LIST_PATH;

/// `SyncGateway` backed by the user service's REST endpoints.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    base: Url,
}

impl HttpGateway {
    /// Create a gateway for the service rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a gateway that reuses an existing client.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let base = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("not a hierarchical url".to_string()));
        }
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", base.scheme())));
        }
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Join path segments onto the base, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

fn transport(e: reqwest::Error) -> SyncError {
    SyncError::Transport(e.to_string())
}

/// Check the status and decode a JSON body.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, SyncError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SyncError::Status {
            status: status.as_u16(),
            body,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| SyncError::Decode(e.to_string()))
}

impl SyncGateway for HttpGateway {
    async fn list(&self) -> Result<Vec<UserRecord>, SyncError> {
        let url = self.endpoint(&LIST_PATH);
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(transport)?;
        read_json(response).await
    }

    async fn create(&self, draft: &UserDraft) -> Result<UserRecord, SyncError> {
        let url = self.endpoint(&CREATE_PATH);
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    async fn update(&self, id: &str, patch: &UserPatch) -> Result<UserRecord, SyncError> {
        let mut segments: Vec<&str> = UPDATE_PATH.to_vec();
        segments.push(id);
        let url = self.endpoint(&segments);
        tracing::debug!("PATCH {}", url);
        let response = self
            .client
            .patch(url)
            .json(patch)
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn test_endpoints() {
        let gateway = HttpGateway::new("https://users.example.com").unwrap();
        assert_eq!(
            gateway.endpoint(&LIST_PATH).as_str(),
            "https://users.example.com/api/users/getuser"
        );
        assert_eq!(
            gateway.endpoint(&CREATE_PATH).as_str(),
            "https://users.example.com/api/users/adduser"
        );
    }

    #[test]
    fn test_endpoints_under_prefix_and_trailing_slash() {
        let gateway = HttpGateway::new("http://localhost:5000/svc/").unwrap();
        assert_eq!(
            gateway.endpoint(&LIST_PATH).as_str(),
            "http://localhost:5000/svc/api/users/getuser"
        );
    }

    #[test]
    fn test_update_id_is_encoded() {
        let gateway = HttpGateway::new("https://users.example.com").unwrap();
        let mut segments = UPDATE_PATH.to_vec();
        segments.push("a/b c");
        let url = gateway.endpoint(&segments);
        assert_eq!(
            url.as_str(),
            "https://users.example.com/api/users/getuser/a%2Fb%20c"
        );
    }

    #[test]
    fn test_rejects_bad_base_urls() {
        assert!(matches!(
            HttpGateway::new("not a url"),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
        assert!(HttpGateway::new("mailto:ops@example.com").is_err());
        assert!(HttpGateway::new("ftp://example.com").is_err());
    }

    /// What the loopback server saw.
    struct Captured {
        line: String,
        body: String,
    }

    fn content_length(head: &str) -> usize {
        head.lines()
            .filter_map(|l| l.split_once(':'))
            .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, v)| v.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Serve one canned HTTP response and hand back the request it answered.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            let head_end = loop {
                if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break request.len();
                }
                request.extend_from_slice(&buf[..n]);
            };
            let head = String::from_utf8_lossy(&request[..head_end]).to_string();
            let wanted = head_end + content_length(&head);
            while request.len() < wanted {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            Captured {
                line: head.lines().next().unwrap_or_default().to_string(),
                body: String::from_utf8_lossy(&request[head_end..]).to_string(),
            }
        });
        (base, handle)
    }

    #[tokio::test]
    async fn test_list_decodes_records() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"_id":"1","name":"A","email":"a@x.com","mobile":"1","__v":0}]"#,
        )
        .await;
        let gateway = HttpGateway::new(&base).unwrap();

        let records = gateway.list().await.unwrap();
        assert_eq!(records, vec![UserRecord::new("1", "A", "a@x.com", "1")]);
        let seen = server.await.unwrap();
        assert_eq!(seen.line, "GET /api/users/getuser HTTP/1.1");
        assert!(seen.body.is_empty());
    }

    #[tokio::test]
    async fn test_create_posts_draft() {
        let (base, server) = serve_once(
            "201 Created",
            r#"{"_id":"64f0","name":"A","email":"a@x.com","mobile":"1","__v":0}"#,
        )
        .await;
        let gateway = HttpGateway::new(&base).unwrap();

        let record = gateway
            .create(&UserDraft::new("A", "a@x.com", "1"))
            .await
            .unwrap();
        assert_eq!(record, UserRecord::new("64f0", "A", "a@x.com", "1"));

        let seen = server.await.unwrap();
        assert_eq!(seen.line, "POST /api/users/adduser HTTP/1.1");
        let body: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "A", "email": "a@x.com", "mobile": "1"})
        );
    }

    #[tokio::test]
    async fn test_update_patches_encoded_id() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"_id":"a b","name":"B","email":"a@x.com","mobile":"1"}"#,
        )
        .await;
        let gateway = HttpGateway::new(&base).unwrap();

        let record = gateway.update("a b", &UserPatch::name("B")).await.unwrap();
        assert_eq!(record, UserRecord::new("a b", "B", "a@x.com", "1"));

        let seen = server.await.unwrap();
        assert_eq!(seen.line, "PATCH /api/users/getuser/a%20b HTTP/1.1");
        assert_eq!(seen.body, r#"{"name":"B"}"#);
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let (base, server) = serve_once("500 Internal Server Error", r#"{"error":"db down"}"#).await;
        let gateway = HttpGateway::new(&base).unwrap();

        let err = gateway.list().await.unwrap_err();
        assert_eq!(
            err,
            SyncError::Status {
                status: 500,
                body: r#"{"error":"db down"}"#.to_string()
            }
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_bad_body_is_decode_error() {
        let (base, server) = serve_once("200 OK", r#"{"not":"a list"}"#).await;
        let gateway = HttpGateway::new(&base).unwrap();

        let err = gateway.list().await.unwrap_err();
        assert!(matches!(err, SyncError::Decode(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let gateway = HttpGateway::new(&base).unwrap();
        let err = gateway.list().await.unwrap_err();
        assert!(err.is_transport());
    }
}
