//! Route paths.

/// `GET` service liveness and version.
pub const GET_API_HEALTH: &str = "/api/health";
/// `POST` a question, receive an answer.
pub const POST_API_CHAT: &str = "/api/chat";
