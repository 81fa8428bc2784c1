//! Local keyword responder used when no chat backend is reachable.
//!
//! The rules are evaluated in order and the first match wins, so muscle specific topics take
//! precedence over general ones.

use crate::{AdviceRecord, MuscleID, advice};

pub const GREETING: &str = "Hi! I'm your running injury advisor. Select a muscle from the body diagram and ask me anything about pain, recovery, or whether you should run tomorrow!";
pub const SELECT_MUSCLE: &str = "To give you the best advice about your pain, please select the affected muscle from the body diagram on the left. Then I can provide specific recovery tips!";
pub const GENERIC_DEFAULT: &str = "I'm here to help with running injuries! Select a muscle from the body diagram, and I can advise on recovery, stretching, and whether it's safe to run.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    RunTomorrow,
    Recovery,
    Stretching,
    Injuries,
    Greeting,
    SelectMuscle,
}

impl Topic {
    /// Formats the reply for this topic.
    ///
    /// Muscle specific topics without advice fall back to the default reply.
    #[must_use]
    pub fn respond(self, advice: Option<&AdviceRecord>) -> String {
        match (self, advice) {
            (Topic::RunTomorrow, Some(advice)) => format!(
                "For your {}, {} I'm {}% confident this is safe advice.",
                advice.name,
                advice.can_run_tomorrow.answer.to_lowercase(),
                *advice.can_run_tomorrow.confidence
            ),
            (Topic::Recovery, Some(advice)) => format!(
                "To help your {} recover:\n\n{}\n\nRemember: {}",
                advice.name,
                advice.recovery.join("\n"),
                advice.can_run_tomorrow.answer
            ),
            (Topic::Stretching, Some(advice)) => format!(
                "Here's what I recommend for your {}:\n\n**Warm-up:**\n{}\n\n**Stretching:**\n{}",
                advice.name,
                advice.warm_up.join("\n"),
                advice.stretching.join("\n")
            ),
            (Topic::Injuries, Some(advice)) => format!(
                "Common injuries for {} include: {}. {} {}",
                advice.name,
                advice.common_injuries.join(", "),
                advice.description,
                advice.can_run_tomorrow.answer
            ),
            (Topic::Greeting, _) => GREETING.to_string(),
            (Topic::SelectMuscle, _) => SELECT_MUSCLE.to_string(),
            (Topic::RunTomorrow | Topic::Recovery | Topic::Stretching | Topic::Injuries, None) => {
                default_reply(None)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Requires {
    Selection,
    NoSelection,
    Anything,
}

#[derive(Debug)]
pub struct Rule {
    pub topic: Topic,
    keywords: &'static [&'static str],
    requires: Requires,
}

impl Rule {
    /// Checks whether the rule applies to an already lowercased message.
    #[must_use]
    pub fn matches(&self, message: &str, selected: Option<MuscleID>) -> bool {
        let applicable = match self.requires {
            Requires::Selection => selected.is_some(),
            Requires::NoSelection => selected.is_none(),
            Requires::Anything => true,
        };
        applicable && self.keywords.iter().any(|k| message.contains(k))
    }
}

pub static RULES: [Rule; 6] = [
    Rule {
        topic: Topic::RunTomorrow,
        keywords: &["run tomorrow", "can i run"],
        requires: Requires::Selection,
    },
    Rule {
        topic: Topic::Recovery,
        keywords: &["recover", "heal"],
        requires: Requires::Selection,
    },
    Rule {
        topic: Topic::Stretching,
        keywords: &["stretch", "warm"],
        requires: Requires::Selection,
    },
    Rule {
        topic: Topic::Injuries,
        keywords: &["injury", "hurt"],
        requires: Requires::Selection,
    },
    Rule {
        topic: Topic::Greeting,
        keywords: &["hello", "hi"],
        requires: Requires::Anything,
    },
    Rule {
        topic: Topic::SelectMuscle,
        keywords: &["pain"],
        requires: Requires::NoSelection,
    },
];

/// Returns the topic of the first matching rule.
#[must_use]
pub fn topic(message: &str, selected: Option<MuscleID>) -> Option<Topic> {
    let message = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&message, selected))
        .map(|rule| rule.topic)
}

/// Produces a reply to a chat message, taking the selected muscle into account.
#[must_use]
pub fn classify(message: &str, selected: Option<MuscleID>) -> String {
    let advice = advice::lookup(selected);
    match topic(message, selected) {
        Some(topic) => topic.respond(advice),
        None => default_reply(advice),
    }
}

fn default_reply(advice: Option<&AdviceRecord>) -> String {
    match advice {
        Some(advice) => format!(
            "Great question about your {}! {} Would you like to know about recovery tips, stretching routines, or whether you can run tomorrow?",
            advice.name, advice.description
        ),
        None => GENERIC_DEFAULT.to_string(),
    }
}
