use crate::error::VanError;

use reqwest::{Method, Response as HttpResponse};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

impl crate::EasyVan {
    // Internal helper to consume a response and deserialize its JSON body.
    pub(crate) async fn _send_and_process_response<R: DeserializeOwned + Send + 'static>(
        &self,
        response: HttpResponse,
        _endpoint_context: &str, // for logging/error context
    ) -> Result<R, VanError> {
        let status = response.status();
        let response_url = response.url().to_string();

        // Get the body as text first so failures can log the exact payload.
        let response_text = response.text().await.map_err(VanError::ReqwestError)?;

        if status.is_success() {
            if response_text.is_empty() || response_text == "{}" {
                // Allow `()` as a valid response type for 204 No Content or
                // empty `{}` bodies.
                if std::any::TypeId::of::<R>() == std::any::TypeId::of::<()>() {
                    return serde_json::from_str("null").map_err(VanError::JsonError);
                }
            }
            serde_json::from_str::<R>(&response_text).map_err(|e| {
                log::error!(
                    "JSON deserialization failed for successful response from '{}'. Status: {}. Error: {}. Body: {}",
                    response_url,
                    status,
                    e,
                    &response_text
                );
                VanError::JsonDeserializationFailed(format!(
                    "Failed to deserialize successful response from '{}': {}. Body: {}",
                    response_url, e, &response_text
                ))
            })
        } else {
            log::warn!(
                "Request failed with status {} from '{}'. Body: {}",
                status,
                response_url,
                &response_text
            );
            Err(VanError::from_response(status.as_u16(), &response_text))
        }
    }

    // Public HTTP method wrappers
    pub async fn get<R: DeserializeOwned + Send + 'static>(
        &self,
        endpoint: &str,
    ) -> Result<R, VanError> {
        self._request(Method::GET, endpoint, None::<&Value>, false, None)
            .await
    }

    pub async fn post<T: Serialize + Send + Sync, R: DeserializeOwned + Send + 'static>(
        &self,
        endpoint: &str,
        data: &T,
    ) -> Result<R, VanError> {
        self._request(Method::POST, endpoint, Some(data), false, None)
            .await
    }

    pub async fn put<T: Serialize + Send + Sync, R: DeserializeOwned + Send + 'static>(
        &self,
        endpoint: &str,
        data: &T,
    ) -> Result<R, VanError> {
        self._request(Method::PUT, endpoint, Some(data), false, None)
            .await
    }

    pub async fn delete<R: DeserializeOwned + Send + 'static>(
        &self,
        endpoint: &str,
    ) -> Result<R, VanError> {
        self._request(Method::DELETE, endpoint, None::<&Value>, false, None)
            .await
    }
}
