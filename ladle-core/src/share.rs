//! Sharing a recipe through whatever the platform offers.
//!
//! Platform capabilities (a native share sheet, a clipboard, a terminal)
//! are modelled as an ordered probe list: each capability says whether it
//! is available and, if invoked, how the share ended. The chain always
//! terminates in presenting the text directly, so a share can degrade but
//! never silently fail.

use thiserror::Error;

use crate::form::fmt_minutes;
use crate::types::Recipe;

/// What gets handed to a share capability.
#[derive(Debug, Clone, PartialEq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    /// The text plus the page reference, for capabilities that can only
    /// carry a single string.
    pub fn fallback_text(&self) -> String {
        format!("{}\n\n{}", self.text, self.url)
    }
}

/// How a share attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ShareOutcome {
    /// The native share completed; no further feedback needed.
    Shared,
    /// The user cancelled; treated as a non-error no-op.
    Cancelled,
    /// The text was copied to the clipboard; confirm to the user.
    Copied,
    /// Nothing else worked; the text itself, to be shown directly.
    Presented(String),
}

#[derive(Error, Debug)]
#[error("Share capability failed: {0}")]
pub struct ShareError(pub String);

/// One entry in the capability probe list.
pub trait ShareCapability {
    fn name(&self) -> &'static str;

    /// Whether this capability exists on the current platform.
    fn is_available(&self) -> bool;

    /// Attempt the share. An `Err` moves the probe on to the next
    /// capability; any `Ok` outcome ends the chain.
    fn invoke(&self, payload: &SharePayload) -> Result<ShareOutcome, ShareError>;
}

/// Build the shareable summary for a recipe: title, description, timing,
/// and a page reference.
pub fn share_payload(recipe: &Recipe, page_url: &str) -> SharePayload {
    SharePayload {
        title: recipe.title.clone(),
        text: format!(
            "{}\n\n{}\n\nPrep: {} mins · Cook: {} mins",
            recipe.title,
            recipe.description,
            fmt_minutes(recipe.prep_time),
            fmt_minutes(recipe.cook_time),
        ),
        url: page_url.to_string(),
    }
}

/// Walk the capability list in order: skip unavailable entries, move past
/// failures, and return the first outcome. Falls back to presenting the
/// text directly when nothing else handled it.
pub fn share_via(
    capabilities: &[&dyn ShareCapability],
    payload: &SharePayload,
) -> ShareOutcome {
    for capability in capabilities {
        if !capability.is_available() {
            continue;
        }
        match capability.invoke(payload) {
            Ok(outcome) => return outcome,
            Err(err) => {
                tracing::warn!("share via {} failed: {}", capability.name(), err);
            }
        }
    }
    ShareOutcome::Presented(payload.fallback_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_recipe;
    use serde_json::json;
    use std::cell::Cell;

    struct Fake {
        name: &'static str,
        available: bool,
        result: Option<ShareOutcome>,
        invoked: Cell<bool>,
    }

    impl Fake {
        fn new(name: &'static str, available: bool, result: Option<ShareOutcome>) -> Self {
            Self {
                name,
                available,
                result,
                invoked: Cell::new(false),
            }
        }
    }

    impl ShareCapability for Fake {
        fn name(&self) -> &'static str {
            self.name
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn invoke(&self, _payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
            self.invoked.set(true);
            self.result
                .clone()
                .ok_or_else(|| ShareError("boom".to_string()))
        }
    }

    fn payload() -> SharePayload {
        let recipe = normalize_recipe(json!({
            "id": "a",
            "title": "Toast",
            "description": "Crispy bread.",
            "prepTime": 2,
            "cookTime": 3,
        }));
        share_payload(&recipe, "https://example.test/recipes")
    }

    #[test]
    fn test_share_text_shape() {
        let payload = payload();
        assert_eq!(payload.title, "Toast");
        assert_eq!(payload.text, "Toast\n\nCrispy bread.\n\nPrep: 2 mins · Cook: 3 mins");
        assert_eq!(
            payload.fallback_text(),
            "Toast\n\nCrispy bread.\n\nPrep: 2 mins · Cook: 3 mins\n\nhttps://example.test/recipes"
        );
    }

    #[test]
    fn test_first_available_capability_wins() {
        let native = Fake::new("native", true, Some(ShareOutcome::Shared));
        let clipboard = Fake::new("clipboard", true, Some(ShareOutcome::Copied));

        let outcome = share_via(&[&native, &clipboard], &payload());
        assert_eq!(outcome, ShareOutcome::Shared);
        assert!(!clipboard.invoked.get());
    }

    #[test]
    fn test_unavailable_capabilities_are_skipped_without_invoking() {
        let native = Fake::new("native", false, Some(ShareOutcome::Shared));
        let clipboard = Fake::new("clipboard", true, Some(ShareOutcome::Copied));

        let outcome = share_via(&[&native, &clipboard], &payload());
        assert_eq!(outcome, ShareOutcome::Copied);
        assert!(!native.invoked.get());
    }

    #[test]
    fn test_cancellation_ends_the_chain_silently() {
        let native = Fake::new("native", true, Some(ShareOutcome::Cancelled));
        let clipboard = Fake::new("clipboard", true, Some(ShareOutcome::Copied));

        let outcome = share_via(&[&native, &clipboard], &payload());
        assert_eq!(outcome, ShareOutcome::Cancelled);
        assert!(!clipboard.invoked.get());
    }

    #[test]
    fn test_failures_fall_through_to_the_next_capability() {
        let flaky = Fake::new("flaky", true, None);
        let clipboard = Fake::new("clipboard", true, Some(ShareOutcome::Copied));

        let outcome = share_via(&[&flaky, &clipboard], &payload());
        assert_eq!(outcome, ShareOutcome::Copied);
        assert!(flaky.invoked.get());
    }

    #[test]
    fn test_chain_always_terminates_in_direct_presentation() {
        let p = payload();
        assert_eq!(share_via(&[], &p), ShareOutcome::Presented(p.fallback_text()));

        let broken = Fake::new("broken", true, None);
        assert_eq!(
            share_via(&[&broken], &p),
            ShareOutcome::Presented(p.fallback_text())
        );
    }
}
