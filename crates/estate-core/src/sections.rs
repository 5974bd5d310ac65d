//! Small interaction state for individual page sections.

/// FAQ list where at most one answer is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<String>,
}

impl FaqAccordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `id`, or close it if it is already open.
    pub fn toggle(&mut self, id: &str) {
        if self.open.as_deref() == Some(id) {
            self.open = None;
        } else {
            self.open = Some(id.to_string());
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open.as_deref()
    }
}

/// Tabs of the property details panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PropertyTab {
    #[default]
    Info,
    Description,
    Specifications,
    Map,
}

impl PropertyTab {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyTab::Info => "Property Info",
            PropertyTab::Description => "Description",
            PropertyTab::Specifications => "Specifications",
            PropertyTab::Map => "Location Map",
        }
    }

    /// Tab bar order. Every tab is always offered; the map panel is empty
    /// for a property without map markup.
    pub const ALL: [PropertyTab; 4] = [
        PropertyTab::Info,
        PropertyTab::Description,
        PropertyTab::Specifications,
        PropertyTab::Map,
    ];
}

/// Detail overlay for one selected card.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailModal<T> {
    selected: Option<T>,
}

impl<T> Default for DetailModal<T> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<T> DetailModal<T> {
    pub fn open(&mut self, item: T) {
        self.selected = Some(item);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

/// Default WhatsApp greeting for the floating button.
pub const WHATSAPP_GREETING: &str = "I am interested";

/// One entry of the floating contact menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingAction {
    pub id: &'static str,
    pub label: &'static str,
    pub href: String,
    /// Open in a new tab
    pub external: bool,
}

/// Expandable floating contact menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FloatingMenu {
    expanded: bool,
}

impl FloatingMenu {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// WhatsApp, call and contact-form actions.
    ///
    /// The phone-based actions are only offered when a number is configured.
    pub fn actions(phone_digits: Option<&str>) -> Vec<FloatingAction> {
        let mut actions = Vec::with_capacity(3);
        if let Some(phone) = phone_digits.filter(|p| !p.is_empty()) {
            actions.push(FloatingAction {
                id: "whatsapp",
                label: "WhatsApp",
                href: format!(
                    "https://wa.me/{}?text={}",
                    phone,
                    WHATSAPP_GREETING.replace(' ', "%20")
                ),
                external: true,
            });
            actions.push(FloatingAction {
                id: "phone",
                label: "Call",
                href: format!("tel:+{}", phone),
                external: false,
            });
        }
        actions.push(FloatingAction {
            id: "contact",
            label: "Contact",
            href: "#contact".to_string(),
            external: false,
        });
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accordion_toggles_single_question() {
        let mut faq = FaqAccordion::new();
        faq.toggle("1");
        assert!(faq.is_open("1"));

        faq.toggle("2");
        assert!(!faq.is_open("1"));
        assert!(faq.is_open("2"));

        faq.toggle("2");
        assert_eq!(faq.open_id(), None);
    }

    #[test]
    fn four_tabs_in_order() {
        let labels: Vec<&str> = PropertyTab::ALL.iter().map(PropertyTab::label).collect();
        assert_eq!(
            labels,
            ["Property Info", "Description", "Specifications", "Location Map"]
        );
        assert_eq!(PropertyTab::default(), PropertyTab::ALL[0]);
    }

    #[test]
    fn modal_open_close() {
        let mut modal = DetailModal::default();
        assert!(!modal.is_open());
        modal.open("2 BHK");
        assert_eq!(modal.selected(), Some(&"2 BHK"));
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn floating_actions() {
        let mut menu = FloatingMenu::default();
        menu.toggle();
        assert!(menu.is_expanded());
        menu.collapse();
        assert!(!menu.is_expanded());

        let actions = FloatingMenu::actions(Some("918181817136"));
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0].href, "https://wa.me/918181817136?text=I%20am%20interested");
        assert!(actions[0].external);
        assert_eq!(actions[1].href, "tel:+918181817136");
        assert_eq!(actions[2].href, "#contact");

        let only_contact = FloatingMenu::actions(None);
        assert_eq!(only_contact.len(), 1);
        assert_eq!(only_contact[0].id, "contact");
    }
}
