/**
 * Dashboard Handler
 *
 * Handler for GET /dashboard. The route sits behind the auth gate; the
 * handler itself just echoes the identity the gate attached, demonstrating
 * the gate contract. It performs no store access.
 */

use axum::response::Json;
use serde::Serialize;

use crate::middleware::auth::{AuthenticatedUser, CurrentUser};

/// Dashboard response
#[derive(Serialize, Debug)]
pub struct DashboardResponse {
    /// Static welcome message
    pub message: String,
    /// Identity attached by the auth gate
    pub user: AuthenticatedUser,
}

/// Dashboard handler
pub async fn dashboard(CurrentUser(user): CurrentUser) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        message: "Welcome to the dashboard!".to_string(),
        user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_dashboard_echoes_gate_identity() {
        let user_id = Uuid::new_v4();
        let response = dashboard(CurrentUser(AuthenticatedUser { user_id })).await;

        assert_eq!(response.message, "Welcome to the dashboard!");
        assert_eq!(response.user.user_id, user_id);
    }

    #[test]
    fn test_response_serializes_user_id() {
        let user_id = Uuid::new_v4();
        let response = DashboardResponse {
            message: "Welcome to the dashboard!".to_string(),
            user: AuthenticatedUser { user_id },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["user"]["user_id"], user_id.to_string());
    }
}
