use axum::Json;

use parley_types::common::User;

use super::ApiUser;

/// GET /api/user/profile
pub async fn profile(ApiUser(user): ApiUser) -> Json<User> {
    Json(user)
}
