/// Produces a canned answer for free-text input. Must never fail.
pub trait Responder: Send + Sync {
    fn respond(&self, question: &str) -> String;
}
