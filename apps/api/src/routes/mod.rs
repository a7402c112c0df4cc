pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{auth, career, chat, interview, jobs, learn, progress, quiz, resume};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Auth
        .route("/auth/register", post(auth::handlers::handle_register))
        .route("/auth/login", post(auth::handlers::handle_login))
        // AI chat proxy
        .route("/ai/chat", post(chat::handlers::handle_chat))
        // Resume
        .route("/resume/analyze", post(resume::handlers::handle_analyze))
        // Interview practice
        .route("/interview/question", post(interview::handlers::handle_question))
        .route("/interview/score", post(interview::handlers::handle_score))
        // Quizzes
        .route("/quiz/generate", post(quiz::handlers::handle_generate))
        .route("/quiz/submit", post(quiz::handlers::handle_submit))
        // Career planning
        .route("/career/plan", post(career::handlers::handle_plan))
        .route("/career/skill-gap", post(career::handlers::handle_skill_gap))
        // Learning journey
        .route("/learn/generate", post(learn::handlers::handle_generate))
        .route("/learn/adapt", post(learn::handlers::handle_adapt))
        .route("/learn/resources", post(learn::handlers::handle_resources))
        // Jobs
        .route("/jobs/list", get(jobs::handlers::handle_list))
        .route("/jobs/trends", get(jobs::handlers::handle_trends))
        // Progress
        .route(
            "/progress",
            get(progress::handlers::handle_get).post(progress::handlers::handle_update),
        )
        .with_state(state)
}
