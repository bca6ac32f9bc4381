//! Height transitions for the FAQ accordion.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    Collapsed,
    Expanded,
}

/// Height change to animate, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightTransition {
    pub from: f64,
    pub to: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccordionItem {
    fold: Fold,
}

impl AccordionItem {
    pub fn new(open: bool) -> Self {
        AccordionItem { fold: if open { Fold::Expanded } else { Fold::Collapsed } }
    }

    pub fn is_open(&self) -> bool {
        self.fold == Fold::Expanded
    }

    /// Flips the item. Expanding always runs from 0 to the content's natural
    /// height and collapsing from that height back to 0, whatever height a
    /// previous toggle was interrupted at.
    pub fn toggle(&mut self, content_height: f64) -> HeightTransition {
        let natural = content_height.max(0.0);
        match self.fold {
            Fold::Collapsed => {
                self.fold = Fold::Expanded;
                HeightTransition { from: 0.0, to: natural }
            }
            Fold::Expanded => {
                self.fold = Fold::Collapsed;
                HeightTransition { from: natural, to: 0.0 }
            }
        }
    }
}

/// Single-open accordion keyed by item id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Accordion {
    open: Option<String>,
}

impl Accordion {
    pub fn with_open(id: impl Into<String>) -> Self {
        Accordion { open: Some(id.into()) }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    /// Opens `id` (closing any other item) or closes it if already open.
    pub fn toggle(&mut self, id: &str) {
        if self.is_open(id) {
            self.open = None;
        } else {
            self.open = Some(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_toggles_never_carry_partial_height() {
        let mut item = AccordionItem::new(false);
        for _ in 0..2 {
            assert_eq!(item.toggle(240.0), HeightTransition { from: 0.0, to: 240.0 });
            assert!(item.is_open());
            assert_eq!(item.toggle(240.0), HeightTransition { from: 240.0, to: 0.0 });
            assert!(!item.is_open());
        }
    }

    #[test]
    fn expand_uses_current_natural_height() {
        let mut item = AccordionItem::new(false);
        assert_eq!(item.toggle(120.0).to, 120.0);
        item.toggle(120.0);
        assert_eq!(item.toggle(180.0), HeightTransition { from: 0.0, to: 180.0 });
    }

    #[test]
    fn accordion_keeps_one_item_open() {
        let mut accordion = Accordion::with_open("faq1");
        assert!(accordion.is_open("faq1"));
        accordion.toggle("faq2");
        assert!(!accordion.is_open("faq1"));
        assert!(accordion.is_open("faq2"));
        accordion.toggle("faq2");
        assert_eq!(accordion, Accordion::default());
    }
}
