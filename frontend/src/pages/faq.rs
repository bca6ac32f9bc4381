use yew::prelude::*;

use crate::components::accordion::{FaqAccordion, FaqEntry};
use crate::components::reveal::Reveal;
use crate::motion::variant::Variant;

fn entry(id: &str, question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

pub fn faq_entries() -> Vec<FaqEntry> {
    vec![
        entry(
            "faq1",
            "Which exams can I prepare for?",
            "Try-outs cover the national university entrance test, civil service exams and the main English proficiency tests. New question banks are added every month.",
        ),
        entry(
            "faq2",
            "How close are the try-outs to the real exam?",
            "Every try-out follows the official blueprint: same sections, same timing and the same scoring rules, so your score is a realistic estimate.",
        ),
        entry(
            "faq3",
            "Can I study on my phone?",
            "Yes. The whole platform works in the browser on phones, tablets and laptops, and your progress syncs between them.",
        ),
        entry(
            "faq4",
            "How do I pay?",
            "Bank transfer, e-wallets and cards are all supported. Packages renew monthly and you can cancel from your profile at any time.",
        ),
        entry(
            "faq5",
            "Is there a refund if I am not satisfied?",
            "If you cancel within seven days of your first payment and have taken fewer than two try-outs, we refund the full amount.",
        ),
    ]
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let entries = use_memo(|_| faq_entries(), ());

    html! {
        <section id="faq" class="faq-section">
            <Reveal>
                <h2>{"Frequently Asked Questions"}</h2>
                <p class="section-subtitle">{"Everything you need to know before your first try-out"}</p>
            </Reveal>
            <Reveal variant={Variant::Fade} delay={0.2}>
                <FaqAccordion entries={(*entries).clone()} initially_open={Some("faq1".to_string())} />
            </Reveal>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn faq_ids_are_unique() {
        let entries = faq_entries();
        let ids: HashSet<_> = entries.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids.len(), entries.len());
        assert!(ids.contains("faq1"));
    }
}
