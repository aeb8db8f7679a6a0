//! Participant ranking and style-sample selection.

use serde::{Deserialize, Serialize};

use super::models::{ParseResult, Participant, SenderMessages};
use crate::config::SelectionConfig;
use crate::error::{ChatvoiceError, Result};

/// A transcript needs at least this many senders to be useful.
pub const MIN_PARTICIPANTS: usize = 2;

/// Length of the participant ranking.
pub const TOP_PARTICIPANTS: usize = 2;

/// Ranks senders by message count, highest first, keeping at most `top`.
///
/// The sort is stable, so senders with equal counts stay in the order they
/// first appeared.
///
/// # Example
///
/// ```rust
/// use chatvoice::core::{SenderMessages, rank_participants};
///
/// let mut map = SenderMessages::new();
/// map.push("Alice", "a");
/// map.push("Bob", "b");
/// map.push("Carol", "c1");
/// map.push("Carol", "c2");
///
/// let ranked = rank_participants(&map, 2);
/// assert_eq!(ranked[0].name, "Carol");
/// assert_eq!(ranked[1].name, "Alice");
/// ```
pub fn rank_participants(messages: &SenderMessages, top: usize) -> Vec<Participant> {
    let mut ranked: Vec<Participant> = messages
        .iter()
        .map(|(name, bodies)| Participant::new(name, bodies.len()))
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(top);
    ranked
}

/// Messages of one participant, ready to be used as style examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSample {
    /// Selected sender
    pub sender: String,
    /// Oldest-first bodies, truncated to the configured maximum
    pub examples: Vec<String>,
    /// Number of messages the sender had before truncation
    pub total: usize,
}

impl StyleSample {
    /// Returns `true` if some messages were cut off.
    pub fn is_truncated(&self) -> bool {
        self.examples.len() < self.total
    }
}

/// Picks the first `max_examples` messages of `name`.
///
/// Any sender with messages can be selected, not only the ranked ones.
pub fn select_style_sample(
    result: &ParseResult,
    name: &str,
    config: &SelectionConfig,
) -> Result<StyleSample> {
    let bodies = result
        .messages_for(name)
        .filter(|bodies| !bodies.is_empty())
        .ok_or_else(|| ChatvoiceError::unknown_participant(name))?;

    let keep = config
        .max_examples
        .map_or(bodies.len(), |max| max.min(bodies.len()));

    Ok(StyleSample {
        sender: name.to_string(),
        examples: bodies[..keep].to_vec(),
        total: bodies.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;

    fn result_with(counts: &[(&str, usize)]) -> ParseResult {
        let messages = counts.iter().flat_map(|&(name, n)| {
            (0..n).map(move |i| Message::new(name, format!("{name} message {i}")))
        });
        ParseResult::from_messages(messages).unwrap()
    }

    #[test]
    fn test_rank_descending() {
        let result = result_with(&[("Alice", 1), ("Bob", 3), ("Carol", 2)]);
        let names: Vec<&str> = result
            .participants()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Bob", "Carol"]);
    }

    #[test]
    fn test_rank_tie_keeps_first_appearance() {
        let result = result_with(&[("Zed", 2), ("Amy", 2), ("Bea", 2)]);
        assert_eq!(
            result.participants(),
            [Participant::new("Zed", 2), Participant::new("Amy", 2)]
        );
    }

    #[test]
    fn test_rank_fewer_than_top() {
        let mut map = SenderMessages::new();
        map.push("Solo", "x");
        assert_eq!(rank_participants(&map, 2), [Participant::new("Solo", 1)]);
        assert!(rank_participants(&SenderMessages::new(), 2).is_empty());
    }

    #[test]
    fn test_style_sample_truncates() {
        let result = result_with(&[("Alice", 5), ("Bob", 1)]);
        let config = SelectionConfig::new().with_max_examples(Some(3));
        let sample = result.style_sample("Alice", &config).unwrap();
        assert_eq!(sample.examples.len(), 3);
        assert_eq!(sample.examples[0], "Alice message 0");
        assert_eq!(sample.total, 5);
        assert!(sample.is_truncated());
    }

    #[test]
    fn test_style_sample_keeps_all() {
        let result = result_with(&[("Alice", 5), ("Bob", 1)]);
        let config = SelectionConfig::new().with_max_examples(None);
        let sample = result.style_sample("Alice", &config).unwrap();
        assert_eq!(sample.examples.len(), 5);
        assert!(!sample.is_truncated());
    }

    #[test]
    fn test_style_sample_default_limit() {
        let result = result_with(&[("Alice", 301), ("Bob", 1)]);
        let sample = result
            .style_sample("Alice", &SelectionConfig::default())
            .unwrap();
        assert_eq!(sample.examples.len(), 300);
        assert_eq!(sample.total, 301);
    }

    #[test]
    fn test_style_sample_unranked_sender() {
        let result = result_with(&[("Alice", 3), ("Bob", 2), ("Carol", 1)]);
        let sample = result
            .style_sample("Carol", &SelectionConfig::default())
            .unwrap();
        assert_eq!(sample.examples, ["Carol message 0"]);
    }

    #[test]
    fn test_style_sample_unknown() {
        let result = result_with(&[("Alice", 1), ("Bob", 1)]);
        let err = result
            .style_sample("Mallory", &SelectionConfig::default())
            .unwrap_err();
        assert!(err.is_unknown_participant());
    }
}
