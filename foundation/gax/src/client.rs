use std::sync::Arc;

use reqwest::Response;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use token_source::TokenSource;

use crate::error::{Error, ErrorWrapper};

/// The request function shared by every resource client of a service.
///
/// Resource clients build a [`RequestBuilder`] against [`HttpClient::endpoint`] and hand it to one
/// of the `send` methods, which attach the credentials and decode the response.
#[derive(Debug, Clone)]
pub struct HttpClient {
    ts: Option<Arc<dyn TokenSource>>,
    endpoint: String,
    http: Client,
    user_agent: String,
    debug: bool,
}

impl HttpClient {
    /// `endpoint` is the service root including the version path, for example
    /// `https://cloudsupport.googleapis.com/v2`. Requests are sent without credentials when `ts` is `None`.
    pub fn new(ts: Option<Arc<dyn TokenSource>>, endpoint: &str, http: Client) -> Self {
        Self {
            ts,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http,
            user_agent: "google-cloud-rust".to_string(),
            debug: false,
        }
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Logs every response body before decoding it.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    async fn with_headers(&self, builder: RequestBuilder) -> Result<RequestBuilder, Error> {
        let builder = builder
            .header("X-Goog-Api-Client", "rust")
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str());
        match &self.ts {
            Some(ts) => {
                let token = ts.token().await.map_err(Error::TokenSource)?;
                Ok(builder.header(reqwest::header::AUTHORIZATION, token))
            }
            None => Ok(builder),
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, Error> {
        let request = self.with_headers(builder).await?;
        let response = request.send().await?;
        tracing::trace!("{} {}", response.status(), response.url());
        check_response_status(response).await
    }

    /// Sends the request and decodes the JSON response body.
    pub async fn send<T>(&self, builder: RequestBuilder) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.execute(builder).await?;
        if self.debug {
            let text = response.text().await?;
            tracing::info!("{}", text);
            Ok(serde_json::from_str(text.as_str())?)
        } else {
            Ok(response.json().await?)
        }
    }

    /// Sends the request and discards the response body. Used for methods returning `Empty`.
    pub async fn send_get_empty(&self, builder: RequestBuilder) -> Result<(), Error> {
        let response = self.execute(builder).await?;
        if self.debug {
            tracing::info!("{}", response.text().await?);
        }
        Ok(())
    }

    /// Sends the request and returns the raw response body. Used for `alt=media` downloads.
    pub async fn send_get_bytes(&self, builder: RequestBuilder) -> Result<Vec<u8>, Error> {
        let response = self.execute(builder).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Checks whether an HTTP response is successful and returns it, or returns an error.
pub(crate) async fn check_response_status(response: Response) -> Result<Response, Error> {
    // Check the status code, returning the response if it is not an error.
    let error = match response.error_for_status_ref() {
        Ok(_) => return Ok(response),
        Err(error) => error,
    };

    // try to extract a response error, falling back to the status error if it can not be parsed.
    let result = response
        .json::<ErrorWrapper>()
        .await
        .map(|wrapper| Error::Response(wrapper.error))
        .unwrap_or(Error::HttpClient(error));
    tracing::debug!("request failed: {}", result);
    Err(result)
}

#[cfg(test)]
pub(crate) mod test {
    use std::sync::Arc;

    use httpmock::prelude::*;
    use serde_json::json;

    use token_source::TokenSource;

    use crate::client::HttpClient;
    use crate::error::Error;
    use crate::status::Code;

    #[ctor::ctor]
    fn init() {
        let filter = tracing_subscriber::filter::EnvFilter::from_default_env()
            .add_directive("google_cloud_gax=trace".parse().unwrap());
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    #[derive(Debug)]
    pub struct StaticTokenSource;

    #[async_trait::async_trait]
    impl TokenSource for StaticTokenSource {
        async fn token(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            Ok("Bearer test-token".to_string())
        }
    }

    #[derive(Debug)]
    struct FailingTokenSource;

    #[async_trait::async_trait]
    impl TokenSource for FailingTokenSource {
        async fn token(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            Err("no credentials".into())
        }
    }

    fn http() -> reqwest_middleware::ClientWithMiddleware {
        reqwest_middleware::ClientBuilder::new(reqwest::Client::new()).build()
    }

    #[derive(serde::Deserialize, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Resource {
        display_name: String,
    }

    #[tokio::test]
    async fn test_send_with_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/resources/a")
                    .header("authorization", "Bearer test-token")
                    .header("x-goog-api-client", "rust")
                    .header("user-agent", "google-cloud-test");
                then.status(200).json_body(json!({"displayName": "a"}));
            })
            .await;

        let client = HttpClient::new(Some(Arc::new(StaticTokenSource)), &server.url("/v1/"), http())
            .with_user_agent("google-cloud-test");
        assert_eq!(client.endpoint(), server.url("/v1"));
        let builder = client.http().get(format!("{}/resources/a", client.endpoint()));
        let resource: Resource = client.send(builder).await.unwrap();
        mock.assert_async().await;
        assert_eq!(resource.display_name, "a");
    }

    #[tokio::test]
    async fn test_send_debug() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/resources/b");
                then.status(200).json_body(json!({"displayName": "b"}));
            })
            .await;
        let client = HttpClient::new(None, &server.url("/v1"), http()).with_debug(true);
        let builder = client.http().get(format!("{}/resources/b", client.endpoint()));
        let resource: Resource = client.send(builder).await.unwrap();
        assert_eq!(resource.display_name, "b");
    }

    #[tokio::test]
    async fn test_send_error_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/resources/missing");
                then.status(404).json_body(json!({
                    "error": {
                        "code": 404,
                        "message": "Resource not found",
                        "status": "NOT_FOUND"
                    }
                }));
            })
            .await;
        let client = HttpClient::new(None, &server.url("/v1"), http());
        let builder = client.http().get(format!("{}/resources/missing", client.endpoint()));
        let err = client.send::<Resource>(builder).await.unwrap_err();
        match &err {
            Error::Response(response) => {
                assert_eq!(response.code, 404);
                assert_eq!(response.message, "Resource not found");
            }
            _ => unreachable!("unexpected error {err:?}"),
        }
        assert_eq!(err.status(), Some(Code::NotFound));
    }

    #[tokio::test]
    async fn test_send_unparsable_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/v1/resources/c");
                then.status(502).body("bad gateway");
            })
            .await;
        let client = HttpClient::new(None, &server.url("/v1"), http());
        let builder = client.http().delete(format!("{}/resources/c", client.endpoint()));
        let err = client.send_get_empty(builder).await.unwrap_err();
        assert!(matches!(err, Error::HttpClient(_)));
        assert_eq!(err.http_status_code(), Some(502));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_send_get_bytes() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/media/d").query_param("alt", "media");
                then.status(200).body(vec![0u8, 1, 2, 255]);
            })
            .await;
        let client = HttpClient::new(None, &server.url("/v1"), http());
        let builder = client
            .http()
            .get(format!("{}/media/d", client.endpoint()))
            .query(&[("alt", "media")]);
        let bytes = client.send_get_bytes(builder).await.unwrap();
        assert_eq!(bytes, vec![0u8, 1, 2, 255]);
    }

    #[tokio::test]
    async fn test_token_source_error() {
        let client = HttpClient::new(Some(Arc::new(FailingTokenSource)), "http://localhost:1/v1", http());
        let builder = client.http().get(format!("{}/resources/e", client.endpoint()));
        let err = client.send_get_empty(builder).await.unwrap_err();
        assert!(matches!(err, Error::TokenSource(_)));
    }
}
