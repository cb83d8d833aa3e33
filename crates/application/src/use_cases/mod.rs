pub mod answer_query;
pub mod resolve_guest;

pub use answer_query::{synthesize, AnswerQueryUseCase, QueryAnswer, ANSWER_TTL_SECS};
pub use resolve_guest::ResolveGuestUseCase;
