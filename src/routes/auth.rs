use std::sync::LazyLock;

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use chrono::{Duration, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::auth::jwt::{encode_token, Claims};
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::models::{notification, User};
use crate::state::SharedState;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub access_token: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn auth_cookie(access_token: &str) -> CookieJar {
    let access = Cookie::build(("access_token", access_token.to_string()))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(30))
        .build();

    CookieJar::new().add(access)
}

fn clear_auth_cookie() -> CookieJar {
    let access = Cookie::build(("access_token", ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build();
    CookieJar::new().add(access)
}

fn generate_reset_token() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    Ok(())
}

pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    if !EMAIL_RE.is_match(&req.email) {
        return Err(AppError::BadRequest(
            "Please provide a valid email address".to_string(),
        ));
    }
    validate_password(&req.password)?;
    if req.first_name.trim().is_empty() || req.last_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "First and last name are required".to_string(),
        ));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let user = db::users::create(
        &state.pool,
        &req.email,
        &pw_hash,
        req.first_name.trim(),
        req.last_name.trim(),
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("Email already in use".to_string())
        }
        _ => AppError::Database(e),
    })?;

    db::notification_settings::create_default(&state.pool, user.id).await?;

    db::notifications::create(
        &state.pool,
        user.id,
        None,
        notification::TYPE_SYSTEM,
        "Welcome to SubTrackr",
        "Thank you for joining! Start tracking your subscriptions today.",
    )
    .await?;

    if let Some(mailer) = state.system_mailer.clone() {
        let email = user.email.clone();
        let first_name = user.first_name.clone();
        let base_url = state.config.base_url.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.send_welcome(&email, &first_name, &base_url).await {
                tracing::error!("Failed to send welcome email: {e}");
            }
        });
    }

    let claims = Claims::new(user.id);
    let access_token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    let jar = auth_cookie(&access_token);
    Ok((jar, Json(AuthResponse { user, access_token })))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    if state.login_limiter.check(&req.email).is_err() {
        return Err(AppError::RateLimited(
            "Too many login attempts. Please try again later.".to_string(),
        ));
    }

    let user = db::users::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    let valid = password::verify(&req.password, &user.password_hash).map_err(AppError::Internal)?;

    if !valid {
        state.login_limiter.record_failure(&req.email);
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let claims = Claims::new(user.id);
    let access_token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    let jar = auth_cookie(&access_token);
    Ok((jar, Json(AuthResponse { user, access_token })))
}

pub async fn logout() -> (CookieJar, Json<MessageResponse>) {
    (
        clear_auth_cookie(),
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
}

pub async fn me(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<User>, AppError> {
    let user = db::users::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}

pub async fn forgot_password(
    State(state): State<SharedState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    // Always answer success so responses don't reveal whether the email
    // belongs to an account.
    let response = Json(MessageResponse {
        message: "If that email is registered, a reset link has been sent.".to_string(),
    });

    let pool = state.pool.clone();
    let mailer = state.system_mailer.clone();
    let base_url = state.config.base_url.clone();

    tokio::spawn(async move {
        if let Ok(Some(user)) = db::users::find_by_email(&pool, &req.email).await {
            let token = generate_reset_token();
            let expires_at = Utc::now() + Duration::hours(1);

            match db::password_resets::create(&pool, user.id, &user.email, &token, expires_at).await
            {
                Ok(_) => {
                    if let Some(mailer) = mailer {
                        let reset_url = format!("{base_url}/reset-password?token={token}");
                        if let Err(e) = mailer.send_password_reset(&user.email, &reset_url).await {
                            tracing::error!("Failed to send password reset email: {e}");
                        }
                    } else {
                        tracing::warn!("System SMTP not configured. Password reset token: {token}");
                    }
                }
                Err(e) => tracing::error!("Failed to store password reset token: {e}"),
            }
        }
    });

    Ok(response)
}

pub async fn reset_password(
    State(state): State<SharedState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    validate_password(&req.new_password)?;

    let reset = db::password_resets::find_valid(&state.pool, &req.token)
        .await?
        .ok_or_else(|| AppError::InvalidToken("Invalid or expired reset token".to_string()))?;

    let pw_hash = password::hash(&req.new_password).map_err(AppError::Internal)?;
    db::users::update_password(&state.pool, reset.user_id, &pw_hash).await?;

    // Tokens are single-use: the row is gone after a successful reset.
    db::password_resets::consume(&state.pool, &req.token).await?;

    Ok(Json(MessageResponse {
        message: "Password reset successfully. You can now log in with your new password."
            .to_string(),
    }))
}
