// src/payment.rs

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::VanError;
use crate::EasyVan;

/// Result of automatic slip verification, mirroring the backend's Slip2Go
/// response.
#[derive(Debug, Deserialize, Clone)]
pub struct SlipVerification {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<SlipTransfer>,
}

/// The verified transfer, as extracted from the slip image.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SlipTransfer {
    pub trans_ref: String,
    #[serde(default)]
    pub trans_date: Option<String>,
    #[serde(default)]
    pub trans_time: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub sender: Option<HashMap<String, Value>>,
    #[serde(default)]
    pub receiver: Option<HashMap<String, Value>>,
}

/// Payment operations: slip upload/verification and the PromptPay QR
/// helper. Obtained via [`EasyVan::payments`].
pub struct PaymentHandle<'a> {
    client: &'a EasyVan,
}

impl<'a> PaymentHandle<'a> {
    pub fn new(client: &'a EasyVan) -> Self {
        PaymentHandle { client }
    }

    /// Uploads a payment slip image for a booking and asks the backend to
    /// verify it.
    ///
    /// The backend forwards the image to its slip-OCR collaborator; a slip
    /// that cannot be matched to the booking amount comes back with
    /// `success == false` and a user-facing `message` rather than an error.
    ///
    /// # Arguments
    ///
    /// * `booking_id`: The booking the payment belongs to.
    /// * `file_name`: Name for the uploaded file (e.g., `"slip.jpg"`).
    /// * `data`: Raw image bytes.
    /// * `mime_type`: Image MIME type (`"image/jpeg"`, `"image/png"`).
    pub async fn verify_slip(
        &self,
        booking_id: i64,
        file_name: &str,
        data: Vec<u8>,
        mime_type: &str,
    ) -> Result<SlipVerification, VanError> {
        let endpoint = format!("payments/verify-slip/{}", booking_id);
        let full_url = self.client._endpoint_url(&endpoint)?;

        let part = Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(VanError::ReqwestError)?;
        let form = Form::new().part("file", part);

        let headers = self.client._auth_headers(true, None)?;

        log::debug!("Uploading payment slip: URL={}, file={}", full_url, file_name);

        let response = self
            .client
            .http_client
            .post(full_url)
            .headers(headers)
            .multipart(form)
            .send()
            .await
            .map_err(VanError::ReqwestError)?;

        // Verification failures arrive as 4xx with the same JSON shape, so
        // decode the body before mapping the status.
        let status = response.status();
        let text = response.text().await.map_err(VanError::ReqwestError)?;
        match serde_json::from_str::<SlipVerification>(&text) {
            Ok(verification) => Ok(verification),
            Err(_) if !status.is_success() => {
                Err(VanError::from_response(status.as_u16(), &text))
            }
            Err(e) => Err(VanError::JsonDeserializationFailed(format!(
                "Failed to deserialize slip verification: {}. Body: {}",
                e, text
            ))),
        }
    }
}

/// URL of a PromptPay QR image for the given phone number and amount, as
/// rendered on the payment step.
pub fn promptpay_qr_url(phone_number: &str, amount: f64) -> String {
    format!("https://promptpay.io/{}/{:.2}.png", phone_number, amount)
}
