//! Notification send route: validation and an acknowledgment echo. No
//! completion call, no delivery backend behind it yet.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::errors::{AppError, AppJson};

#[derive(Debug, Deserialize)]
pub struct SendNotificationRequest {
    pub subject: String,
    pub message: String,
}

/// What was accepted for delivery, echoed back to the caller.
#[derive(Debug, Serialize)]
pub struct NotificationReceipt {
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SendNotificationPayload {
    pub message: &'static str,
    pub notification: NotificationReceipt,
}

/// POST /notification/send
///
/// Works with or without a provider credential configured; this route never
/// touches the completion client.
pub async fn handle_send_notification(
    AppJson(request): AppJson<SendNotificationRequest>,
) -> Result<Json<Envelope<SendNotificationPayload>>, AppError> {
    if request.subject.trim().is_empty() {
        return Err(AppError::Validation("subject cannot be empty".to_string()));
    }
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    Ok(Json(Envelope::success(SendNotificationPayload {
        message: "Notification sent successfully",
        notification: NotificationReceipt {
            subject: request.subject,
            message: request.message,
        },
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_echoes_notification() {
        let Json(envelope) = handle_send_notification(AppJson(SendNotificationRequest {
            subject: "Deploy finished".to_string(),
            message: "v2.3.1 is live".to_string(),
        }))
        .await
        .unwrap();

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "Notification sent successfully");
        assert_eq!(value["notification"]["subject"], "Deploy finished");
        assert_eq!(value["notification"]["message"], "v2.3.1 is live");
    }

    #[tokio::test]
    async fn test_send_requires_subject() {
        let result = handle_send_notification(AppJson(SendNotificationRequest {
            subject: " ".to_string(),
            message: "v2.3.1 is live".to_string(),
        }))
        .await;

        match result {
            Err(AppError::Validation(message)) => assert_eq!(message, "subject cannot be empty"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_requires_message() {
        let result = handle_send_notification(AppJson(SendNotificationRequest {
            subject: "Deploy finished".to_string(),
            message: String::new(),
        }))
        .await;

        match result {
            Err(AppError::Validation(message)) => assert_eq!(message, "message cannot be empty"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
