//! Scripted keyword-matched assistant.
//!
//! A deliberately simple helper: it matches lowercase substrings against a
//! fixed script and returns canned guidance about the tool. There is no
//! model behind it and no state between turns.

use once_cell::sync::Lazy;

use crate::domain::analytics::{classify, QualityTier, EXCELLENT_SCC_LIMIT, GOOD_SCC_LIMIT};

/// One script rule: fires when the input contains any trigger and, if
/// `requires` is non-empty, any required word as well.
struct ScriptEntry {
    triggers: &'static [&'static str],
    requires: &'static [&'static str],
    reply: String,
}

impl ScriptEntry {
    fn plain(triggers: &'static [&'static str], reply: &str) -> Self {
        Self {
            triggers,
            requires: &[],
            reply: reply.to_string(),
        }
    }

    fn compound(
        triggers: &'static [&'static str],
        requires: &'static [&'static str],
        reply: &str,
    ) -> Self {
        Self {
            triggers,
            requires,
            reply: reply.to_string(),
        }
    }

    fn matches(&self, input: &str) -> bool {
        let triggered = self.triggers.iter().any(|t| input.contains(t));
        let required =
            self.requires.is_empty() || self.requires.iter().any(|r| input.contains(r));
        triggered && required
    }
}

static SCRIPT: Lazy<Vec<ScriptEntry>> = Lazy::new(|| {
    vec![
        ScriptEntry::plain(
            &["hello", "hi ", "good morning", "good afternoon"],
            "Hello! How can I help you today?",
        ),
        ScriptEntry::compound(
            &["register", "add", "new"],
            &["cow", "animal"],
            "To register a new animal: open the Animals tab, choose New Animal, \
             then fill in the name, ear tag, breed, birth date and status.",
        ),
        ScriptEntry::compound(
            &["record", "log", "enter"],
            &["milk", "sample", "analysis", "quality"],
            "To record a quality analysis: open the Record tab, pick the animal \
             and date, then enter volume in liters, fat, protein, lactose, SCC, \
             temperature and pH.",
        ),
        ScriptEntry::plain(
            &["dashboard", "chart", "report"],
            "The dashboard shows active animals, total milk volume, average fat \
             and protein, and overall quality by SCC, with charts of per-animal \
             production and quality over time.",
        ),
        ScriptEntry {
            triggers: &["scc", "somatic", "cell count", "quality"],
            requires: &[],
            reply: format!(
                "SCC is the somatic cell count, a milk quality indicator. Below \
                 {EXCELLENT_SCC_LIMIT:.0} thousand/ml is excellent, between \
                 {EXCELLENT_SCC_LIMIT:.0} and {GOOD_SCC_LIMIT:.0} is good, and \
                 {GOOD_SCC_LIMIT:.0} or above needs attention as it can signal \
                 udder health problems."
            ),
        },
        ScriptEntry::plain(
            &["fat", "protein", "lactose"],
            "Those are the main milk components: fat usually runs 3-5%, protein \
             3-4% and lactose 4-5%. Low values can point to nutrition or health \
             problems.",
        ),
        ScriptEntry::plain(
            &["temperature"],
            "Chilled milk should be held between 2 and 4 degrees Celsius; warmer \
             storage favors bacterial growth.",
        ),
        ScriptEntry::plain(
            &["ph"],
            "Fresh milk pH sits between 6.6 and 6.8. Values outside that range \
             can indicate sour or adulterated milk.",
        ),
        ScriptEntry::plain(
            &["edit", "change", "modify"],
            "To edit an animal, find it in the Animals tab and use the edit \
             action, then save your changes.",
        ),
        ScriptEntry::plain(
            &["delete", "remove"],
            "To remove an animal, use the delete action in the Animals tab. \
             Careful: this also removes every quality sample recorded for it.",
        ),
        ScriptEntry::plain(
            &["help", "how do i", "how to"],
            "I can help with registering animals, recording quality analyses, \
             reading the dashboard, and explaining SCC, fat, protein, \
             temperature and pH. What would you like to know?",
        ),
        ScriptEntry::plain(
            &["thanks", "thank you"],
            "You're welcome! Just ask whenever you need help.",
        ),
    ]
});

const FALLBACK: &str = "Sorry, I didn't catch that. I can help with registering \
     animals, recording milk analyses, the dashboard, or parameters like SCC, \
     fat and protein. What do you need?";

/// Answers one user message from the fixed script.
///
/// Matching is case-insensitive substring search, first rule wins; an
/// unmatched message gets the fallback reply.
pub fn respond(input: &str) -> String {
    let input = input.to_lowercase();
    SCRIPT
        .iter()
        .find(|entry| entry.matches(&input))
        .map(|entry| entry.reply.clone())
        .unwrap_or_else(|| FALLBACK.to_string())
}

/// One-line herd advisory derived from the shared SCC classifier.
pub fn scc_advisory(avg_scc: f64) -> String {
    match classify(avg_scc) {
        QualityTier::Excellent => {
            format!("Average SCC is {avg_scc:.0} thousand/ml: excellent milk quality.")
        }
        QualityTier::Good => format!(
            "Average SCC is {avg_scc:.0} thousand/ml: good, but keep an eye on \
             the trend."
        ),
        QualityTier::Attention => format!(
            "Average SCC is {avg_scc:.0} thousand/ml: needs attention, check \
             the herd for udder health problems."
        ),
    }
}
