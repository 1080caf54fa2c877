//! Prompt templates — the contract between Counsel Desk and the
//! generation endpoint.
//!
//! Both builders are pure: they interpolate their inputs verbatim into a
//! fixed template and never touch I/O. An empty topic is permitted — the
//! endpoint, not this layer, judges prompt quality.

use crate::catalog::{LawArea, LegalTerm};

/// Hard cap on the free-text problem description, counted in characters.
pub const MAX_TOPIC_CHARS: usize = 600;

/// Build the guidance request prompt from the user's problem description
/// and the selected law area.
pub fn build_guidance_prompt(topic: &str, law_area: LawArea) -> String {
    format!(
        "I have a legal question regarding \"{topic}\" in the context of Philippines law. \
         Specifically, I am seeking general legal information, advice and guidance related to \
         {law_area} that may be relevant to my situation. I understand that you are not a \
         licensed attorney and that your response is not legal advice, but I am seeking \
         reliable resources or guidance on my legal issue. Can you also suggest steps I can \
         take to find a licensed attorney who can provide me with legal advice in the \
         Philippines?"
    )
}

/// Build the term-explainer prompt for the selected legal term.
pub fn build_term_prompt(term: LegalTerm) -> String {
    format!(
        "Please explain the legal term \"{term}\" as it is understood under Philippines law. \
         I am looking for a plain-language definition, the context in which the term usually \
         arises, and any closely related concepts I should be aware of. I understand that you \
         are not a licensed attorney and that your response is general legal information, not \
         legal advice."
    )
}

/// Truncate a topic to the first [`MAX_TOPIC_CHARS`] characters, reporting
/// whether truncation occurred. Counts Unicode scalar values so a clamp can
/// never split a multi-byte character.
pub fn clamp_topic(topic: &str) -> (String, bool) {
    let mut chars = topic.char_indices();
    match chars.nth(MAX_TOPIC_CHARS) {
        Some((byte_idx, _)) => (topic[..byte_idx].to_string(), true),
        None => (topic.to_string(), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guidance_prompt_is_pure_and_interpolates_verbatim() {
        let topic = "my employer withheld my 13th month pay";
        let a = build_guidance_prompt(topic, LawArea::LaborLaw);
        let b = build_guidance_prompt(topic, LawArea::LaborLaw);
        assert_eq!(a, b);
        assert!(a.contains(topic));
        assert!(a.contains("Labor Law"));
    }

    #[test]
    fn empty_topic_still_produces_a_well_formed_prompt() {
        let prompt = build_guidance_prompt("", LawArea::default());
        assert!(prompt.contains("\"\""));
        assert!(prompt.contains("Employment Law"));
    }

    #[test]
    fn term_prompt_contains_the_selected_term() {
        let prompt = build_term_prompt(LegalTerm::PsychologicalIncapacity);
        assert!(prompt.contains("Psychological Incapacity"));
    }

    #[test]
    fn clamp_leaves_short_input_untouched() {
        let (text, truncated) = clamp_topic("short question");
        assert_eq!(text, "short question");
        assert!(!truncated);
    }

    #[test]
    fn clamp_keeps_exactly_the_character_limit() {
        let exact: String = "a".repeat(MAX_TOPIC_CHARS);
        let (text, truncated) = clamp_topic(&exact);
        assert_eq!(text.chars().count(), MAX_TOPIC_CHARS);
        assert!(!truncated);

        let over: String = "b".repeat(MAX_TOPIC_CHARS + 50);
        let (text, truncated) = clamp_topic(&over);
        assert!(truncated);
        assert_eq!(text.chars().count(), MAX_TOPIC_CHARS);
        assert_eq!(text, over.chars().take(MAX_TOPIC_CHARS).collect::<String>());
    }

    #[test]
    fn clamp_never_splits_a_multibyte_character() {
        let over: String = "ñ".repeat(MAX_TOPIC_CHARS + 1);
        let (text, truncated) = clamp_topic(&over);
        assert!(truncated);
        assert_eq!(text.chars().count(), MAX_TOPIC_CHARS);
        assert!(text.chars().all(|c| c == 'ñ'));
    }
}
