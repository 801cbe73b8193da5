//! API errors and their user-facing messages

use log::{debug, error, warn};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::messages;
use crate::error::Result;
use crate::ui::Dialogs;

/// A failed API call, optionally holding the server's response
#[derive(Debug)]
pub struct ApiError {
    message: String,
    status: Option<u16>,
    response: Option<reqwest::Response>,
}

impl ApiError {
    /// Error without a response (transport failure, client-side problem)
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            response: None,
        }
    }

    /// Error for a non-success response; the body is read later
    pub fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        Self {
            message: format!("Request to {} failed", response.url()),
            status: Some(status),
            response: Some(response),
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }

    pub fn into_response(self) -> Option<reqwest::Response> {
        self.response
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (status {})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::new(format!("HTTP request failed: {}", err))
    }
}

/// Error body shape returned by the backend
#[derive(Deserialize, Debug, Default)]
struct ErrorBody {
    #[serde(default)]
    detail: Value,
}

/// Report an API error to the user
///
/// Logs the error, then shows exactly one notification. Without a response
/// the default message is shown right away and `None` is returned. With a
/// response the body is parsed on a spawned task and the task handle is
/// returned. Outside a tokio runtime the body cannot be read, so the default
/// message is shown right away instead.
pub fn handle_api_error(
    dialogs: Arc<dyn Dialogs>,
    error: ApiError,
    default_message: Option<&str>,
) -> Option<JoinHandle<()>> {
    error!("API Error: {}", error);

    let default_message = default_message
        .unwrap_or(messages::DEFAULT_API_ERROR)
        .to_string();

    let Some(response) = error.into_response() else {
        dialogs.notify(&default_message);
        return None;
    };

    let Ok(runtime) = Handle::try_current() else {
        warn!("No async runtime to read the error body, showing default message");
        dialogs.notify(&default_message);
        return None;
    };

    Some(runtime.spawn(async move {
        let message = message_from_response(response)
            .await
            .unwrap_or(default_message);
        dialogs.notify(&message);
    }))
}

/// Extract the user-facing detail from an error response, if any
pub async fn message_from_response(response: reqwest::Response) -> Option<String> {
    match read_error_body(response).await {
        Ok(body) => detail_message(&body.detail),
        Err(e) => {
            debug!("Could not parse error body: {}", e);
            None
        }
    }
}

async fn read_error_body(response: reqwest::Response) -> Result<ErrorBody> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

/// Render a `detail` value; falsy values yield `None`
///
/// Validation failures arrive as a list of `{"msg": ...}` objects and are
/// joined into one line.
fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if msgs.is_empty() {
                Some(detail.to_string())
            } else {
                Some(msgs.join("; "))
            }
        }
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dialogs::testing::RecordingDialogs;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn failing_response(
        mock_server: &MockServer,
        template: ResponseTemplate,
    ) -> reqwest::Response {
        Mock::given(method("GET"))
            .and(path("/backups/1"))
            .respond_with(template)
            .mount(mock_server)
            .await;

        reqwest::get(format!("{}/backups/1", mock_server.uri()))
            .await
            .unwrap()
    }

    async fn report(template: ResponseTemplate, default_message: Option<&str>) -> Vec<String> {
        let mock_server = MockServer::start().await;
        let dialogs = Arc::new(RecordingDialogs::default());
        let error = ApiError::from_response(failing_response(&mock_server, template).await);

        let handle = handle_api_error(dialogs.clone(), error, default_message)
            .expect("response present, parse task expected");
        handle.await.unwrap();
        dialogs.notifications()
    }

    #[test]
    fn test_without_response_notifies_immediately() {
        let dialogs = Arc::new(RecordingDialogs::default());
        let handle =
            handle_api_error(dialogs.clone(), ApiError::new("connection refused"), None);

        assert!(handle.is_none());
        assert_eq!(
            dialogs.notifications(),
            vec!["Произошла ошибка при выполнении запроса"]
        );
    }

    #[test]
    fn test_without_response_uses_override() {
        let dialogs = Arc::new(RecordingDialogs::default());
        handle_api_error(
            dialogs.clone(),
            ApiError::new("timeout"),
            Some("Не удалось создать резервную копию"),
        );
        assert_eq!(
            dialogs.notifications(),
            vec!["Не удалось создать резервную копию"]
        );
    }

    #[test]
    fn test_response_outside_runtime_uses_default() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (mock_server, response) = runtime.block_on(async {
            let mock_server = MockServer::start().await;
            let template = ResponseTemplate::new(400).set_body_json(json!({"detail": "X"}));
            let response = failing_response(&mock_server, template).await;
            (mock_server, response)
        });

        let dialogs = Arc::new(RecordingDialogs::default());
        let handle = handle_api_error(dialogs.clone(), ApiError::from_response(response), None);

        assert!(handle.is_none());
        assert_eq!(
            dialogs.notifications(),
            vec!["Произошла ошибка при выполнении запроса"]
        );
        runtime.block_on(async move { drop(mock_server) });
    }

    #[tokio::test]
    async fn test_detail_is_shown() {
        let notes = report(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Таблица не найдена"})),
            None,
        )
        .await;
        assert_eq!(notes, vec!["Таблица не найдена"]);
    }

    #[tokio::test]
    async fn test_missing_detail_falls_back() {
        let notes = report(
            ResponseTemplate::new(500).set_body_json(json!({})),
            Some("Сбой"),
        )
        .await;
        assert_eq!(notes, vec!["Сбой"]);
    }

    #[tokio::test]
    async fn test_malformed_body_falls_back() {
        let notes = report(
            ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"),
            None,
        )
        .await;
        assert_eq!(notes, vec!["Произошла ошибка при выполнении запроса"]);
    }

    #[tokio::test]
    async fn test_empty_body_falls_back() {
        let notes = report(ResponseTemplate::new(503), None).await;
        assert_eq!(notes, vec!["Произошла ошибка при выполнении запроса"]);
    }

    #[tokio::test]
    async fn test_validation_detail_is_joined() {
        let body = json!({
            "detail": [
                {"loc": ["body", "name"], "msg": "field required", "type": "value_error.missing"},
                {"loc": ["body", "cron"], "msg": "invalid schedule", "type": "value_error"}
            ]
        });
        let notes = report(ResponseTemplate::new(422).set_body_json(body), None).await;
        assert_eq!(notes, vec!["field required; invalid schedule"]);
    }

    #[tokio::test]
    async fn test_from_response_keeps_status() {
        let mock_server = MockServer::start().await;
        let response = failing_response(&mock_server, ResponseTemplate::new(404)).await;
        let error = ApiError::from_response(response);
        assert_eq!(error.status(), Some(404));
        assert!(error.has_response());
        assert!(error.to_string().contains("404"));
    }

    #[test]
    fn test_detail_message_falsy_values() {
        assert_eq!(detail_message(&Value::Null), None);
        assert_eq!(detail_message(&json!(false)), None);
        assert_eq!(detail_message(&json!("")), None);
        assert_eq!(detail_message(&json!(0)), None);
    }

    #[test]
    fn test_detail_message_other_values() {
        assert_eq!(detail_message(&json!("X")), Some("X".to_string()));
        assert_eq!(detail_message(&json!(42)), Some("42".to_string()));
        assert_eq!(
            detail_message(&json!({"code": 1})),
            Some("{\"code\":1}".to_string())
        );
    }

    #[test]
    fn test_api_error_without_response() {
        let error = ApiError::new("offline");
        assert!(!error.has_response());
        assert_eq!(error.status(), None);
        assert_eq!(error.to_string(), "offline");
    }
}
