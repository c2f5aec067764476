use serde::{Deserialize, Serialize};

/// A single paste dump summary as returned by the search endpoints.
///
/// The service assigns the id; `tags` and `time` are only present on some
/// dumps. `time` is kept as the service-native string and never parsed.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Dump {
    pub id: String,
    pub tags: Option<String>,
    pub time: Option<String>,
}

/// Envelope for the four search-style endpoints.
///
/// The service reports failure in the body rather than the HTTP status:
/// a non-zero `error` means the request failed and `data` must be ignored.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchResponse {
    pub search: Option<String>,
    pub count: Option<u64>,
    #[serde(default)]
    pub data: Vec<Dump>,
    #[serde(default)]
    pub error: i64,
    pub error_info: Option<String>,
}

/// Envelope for the content-fetch endpoint, carrying the raw dump body.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ContentResponse {
    pub id: Option<String>,
    #[serde(default)]
    pub data: String,
    pub time: Option<String>,
    #[serde(default)]
    pub error: i64,
    pub error_info: Option<String>,
}

fn remote_message(error: i64, error_info: Option<String>) -> String {
    error_info.unwrap_or_else(|| format!("remote service returned error code {error}"))
}

impl SearchResponse {
    /// Extract the dump list, or the remote error message when `error != 0`.
    pub fn into_dumps(self) -> Result<Vec<Dump>, String> {
        if self.error != 0 {
            return Err(remote_message(self.error, self.error_info));
        }
        Ok(self.data)
    }
}

impl ContentResponse {
    /// Extract the raw dump content, or the remote error message.
    pub fn into_content(self) -> Result<String, String> {
        if self.error != 0 {
            return Err(remote_message(self.error, self.error_info));
        }
        Ok(self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_success() {
        let body = r#"{"search":"abc","count":1,"data":[{"id":"abc"}],"error":0}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        let dumps = response.into_dumps().unwrap();
        assert_eq!(dumps.len(), 1);
        assert_eq!(dumps[0].id, "abc");
        assert_eq!(dumps[0].tags, None);
        assert_eq!(dumps[0].time, None);
    }

    #[test]
    fn test_search_response_remote_error() {
        let body = r#"{"error":1,"error_info":"not found"}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        let err = response.into_dumps().unwrap_err();
        assert_eq!(err, "not found");
    }

    #[test]
    fn test_search_response_error_without_info() {
        let body = r#"{"error":7}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        let err = response.into_dumps().unwrap_err();
        assert!(err.contains('7'));
    }

    #[test]
    fn test_search_response_full_record() {
        let body = r#"{
            "search": "example.com",
            "count": 2,
            "data": [
                {"id": "Ab12Cd34", "tags": "email,password", "time": "2018-05-12 09:30:11"},
                {"id": "Ef56Gh78", "time": "2018-05-13 10:00:00"}
            ],
            "error": 0,
            "error_info": null
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.search.as_deref(), Some("example.com"));
        assert_eq!(response.count, Some(2));
        let dumps = response.into_dumps().unwrap();
        assert_eq!(dumps[0].tags.as_deref(), Some("email,password"));
        assert_eq!(dumps[1].id, "Ef56Gh78");
    }

    #[test]
    fn test_content_response_success() {
        let body = r#"{"id":"abc","data":"user:pass","time":"2018-05-12","error":0}"#;
        let response: ContentResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.into_content().unwrap(), "user:pass");
    }

    #[test]
    fn test_content_response_remote_error() {
        let body = r#"{"error":1,"error_info":"dump not found"}"#;
        let response: ContentResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.into_content().unwrap_err(), "dump not found");
    }
}
