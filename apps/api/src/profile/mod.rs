// User profile analysis: themes, audience, tone, and content preferences
// derived from imported profile fields, plus the user CRUD surface.

pub mod analysis;
pub mod handlers;
