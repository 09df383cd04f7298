pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers::handle_assistant;
use crate::auth::handlers::{handle_login, handle_signup};
use crate::outreach::handlers::handle_connect;
use crate::professional::handlers::{
    handle_list_opportunities, handle_post_opportunity, handle_student_recommendations,
};
use crate::state::AppState;
use crate::students::handlers::{handle_matches, handle_onboarding};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/auth/signup", post(handle_signup))
        .route("/api/auth/login", post(handle_login))
        // Student flows
        .route("/api/onboarding", post(handle_onboarding))
        .route("/api/matches", get(handle_matches))
        // Professional flows
        .route(
            "/api/professional/opportunities",
            post(handle_post_opportunity).get(handle_list_opportunities),
        )
        .route(
            "/api/professional/students",
            get(handle_student_recommendations),
        )
        // Shared flows
        .route("/api/assistant", post(handle_assistant))
        .route("/api/email/connect", post(handle_connect))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::extract::FromRef;
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::auth::claims::{Claims, Role};
    use crate::auth::jwt::JwtKeys;

    fn sign_token(state: &AppState, role: Role) -> String {
        JwtKeys::from_ref(state)
            .sign(Uuid::new_v4(), role)
            .expect("sign token")
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_open() {
        let app = build_router(AppState::fake());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn protected_route_without_token_is_401() {
        let app = build_router(AppState::fake());
        let response = app
            .oneshot(Request::get("/api/matches").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "No token provided" })
        );
    }

    #[tokio::test]
    async fn garbage_token_is_403() {
        let app = build_router(AppState::fake());
        let response = app
            .oneshot(
                Request::get("/api/matches")
                    .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Invalid token" })
        );
    }

    #[tokio::test]
    async fn expired_token_is_403() {
        let state = AppState::fake();
        let keys = JwtKeys::from_ref(&state);
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            role: Role::Student,
            iat: (now - 7200) as usize,
            exp: (now - 3600) as usize,
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &keys.encoding,
        )
        .unwrap();

        let app = build_router(state);
        let response = app
            .oneshot(
                Request::get("/api/matches")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn professional_cannot_onboard() {
        let state = AppState::fake();
        let token = sign_token(&state, Role::Professional);
        let app = build_router(state);

        let boundary = "test-boundary";
        let response = app
            .oneshot(
                Request::post("/api/onboarding")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(format!("--{boundary}--\r\n")))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Only students can complete onboarding" })
        );
    }

    #[tokio::test]
    async fn student_cannot_view_recommendations() {
        let state = AppState::fake();
        let token = sign_token(&state, Role::Student);
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::get("/api/professional/students")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Only professionals can view student recommendations" })
        );
    }
}
