use crate::application::interface::assistant::Responder;
use crate::infra::config::AssistantConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    keywords: Vec<String>,
    response: String,
}

impl KeywordRule {
    pub fn new<I, S>(keywords: I, response: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self {
            keywords,
            response: response.into(),
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Scripted assistant: first rule with a keyword contained in the
/// lower-cased question wins, otherwise the default answer.
#[derive(Debug, Clone)]
pub struct KeywordResponder {
    rules: Vec<KeywordRule>,
    default_response: String,
}

impl KeywordResponder {
    pub fn new(rules: Vec<KeywordRule>, default_response: impl Into<String>) -> Self {
        Self {
            rules,
            default_response: default_response.into(),
        }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        let rules = config
            .rules
            .iter()
            .map(|rule| KeywordRule::new(&rule.keywords, rule.response.clone()))
            .collect();
        Self::new(rules, config.default_response.clone())
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::from_config(&AssistantConfig::default())
    }
}

impl Responder for KeywordResponder {
    fn respond(&self, question: &str) -> String {
        let lowered = question.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.response.clone())
            .unwrap_or_else(|| self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use crate::adapter::assistant::keyword::{KeywordResponder, KeywordRule};
    use crate::application::interface::assistant::Responder;
    use crate::infra::config::AssistantConfig;

    #[fixture]
    fn responder() -> KeywordResponder {
        KeywordResponder::default()
    }

    #[rstest]
    fn test_react_question(responder: KeywordResponder) {
        let answer = responder.respond("Tell me about React hooks");
        assert!(answer.starts_with("React is a powerful library"));
    }

    #[rstest]
    fn test_unmatched_falls_back_to_default(responder: KeywordResponder) {
        let answer = responder.respond("asdfqwerty");
        assert_eq!(answer, AssistantConfig::default().default_response);
    }

    #[rstest]
    fn test_matching_is_case_insensitive(responder: KeywordResponder) {
        assert_eq!(responder.respond("REACT"), responder.respond("react"));
    }

    #[rstest]
    fn test_first_rule_wins(responder: KeywordResponder) {
        let answer = responder.respond("Should I learn JavaScript or React for a job?");
        assert!(answer.starts_with("JavaScript is a versatile"));
    }

    #[rstest]
    #[case("any coding tips?", "For coding practice")]
    #[case("how do I grind LeetCode", "For coding practice")]
    #[case("job hunting advice", "For a successful tech career")]
    #[case("node.js streams", "JavaScript is a versatile")]
    fn test_topic_rules(responder: KeywordResponder, #[case] question: &str, #[case] prefix: &str) {
        assert!(responder.respond(question).starts_with(prefix));
    }

    #[rstest]
    fn test_custom_rules_replace_builtin() {
        let responder = KeywordResponder::new(
            vec![
                KeywordRule::new(["  Rust ", ""], "Ferris approves."),
                KeywordRule::new(["react"], "Custom React answer."),
            ],
            "Nothing to say.",
        );
        assert_eq!(responder.respond("I love RUST"), "Ferris approves.");
        assert_eq!(responder.respond("react?"), "Custom React answer.");
        assert_eq!(responder.respond("javascript"), "Nothing to say.");
    }

    #[rstest]
    fn test_blank_keywords_never_match() {
        let responder = KeywordResponder::new(vec![KeywordRule::new(["", "   "], "oops")], "default");
        assert_eq!(responder.respond("anything"), "default");
    }
}
