//! Form field value objects

use crate::state::format::{format_phone, format_venmo, phone_digits};

/// Stable identifier for every input on the RSVP form.
///
/// Variants are declared in form order, so the derived `Ord` doubles as
/// the on-screen position used to find the "first" error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Phone,
    Venmo,
    FridayDinner,
    Notes,
}

impl FieldId {
    /// All fields in form order
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Phone,
        FieldId::Venmo,
        FieldId::FridayDinner,
        FieldId::Notes,
    ];

    /// Name used for the field in the submitted form data
    pub fn form_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Venmo => "venmo",
            Self::FridayDinner => "friday-dinner",
            Self::Notes => "notes",
        }
    }
}

/// Live formatting applied to a text field on every input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMask {
    #[default]
    None,
    Phone,
    Venmo,
}

impl InputMask {
    fn apply(&self, raw: &str) -> String {
        match self {
            Self::None => raw.to_string(),
            Self::Phone => format_phone(raw),
            Self::Venmo => format_venmo(raw),
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Index into the field's options, `None` while nothing is selected
    Choice(Option<usize>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub value: FieldValue,
    pub mask: InputMask,
    pub options: Vec<String>,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(id: FieldId, label: &str, is_multiline: bool) -> Self {
        Self {
            id,
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            mask: InputMask::None,
            options: Vec::new(),
            is_multiline,
        }
    }

    /// Create a single-line text field that reformats its value on input
    pub fn masked(id: FieldId, label: &str, mask: InputMask) -> Self {
        Self {
            mask,
            ..Self::text(id, label, false)
        }
    }

    /// Create a choice field (radio group)
    pub fn choice(id: FieldId, label: &str, options: &[&str]) -> Self {
        Self {
            id,
            label: label.to_string(),
            value: FieldValue::Choice(None),
            mask: InputMask::None,
            options: options.iter().map(|o| o.to_string()).collect(),
            is_multiline: false,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice(_))
    }

    /// Get the text value (returns empty string for choice fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(_) => "",
        }
    }

    /// Get the selected option index (always `None` for text fields)
    pub fn selected(&self) -> Option<usize> {
        match &self.value {
            FieldValue::Choice(selected) => *selected,
            FieldValue::Text(_) => None,
        }
    }

    /// Whether the field holds something worth validating on blur
    pub fn has_value(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => !s.trim().is_empty(),
            FieldValue::Choice(selected) => selected.is_some(),
        }
    }

    /// Append typed or pasted text, then reformat through the field's mask
    pub fn push_str(&mut self, input: &str) {
        let mask = self.mask;
        if let FieldValue::Text(s) = &mut self.value {
            let mut raw = std::mem::take(s);
            raw.push_str(input);
            *s = mask.apply(&raw);
        }
    }

    /// Remove the last character from the field value.
    ///
    /// Phone fields drop their last digit instead, since the mask
    /// would otherwise re-add any separator that was removed.
    pub fn pop_char(&mut self) {
        let mask = self.mask;
        if let FieldValue::Text(s) = &mut self.value {
            match mask {
                InputMask::Phone => {
                    let mut digits = phone_digits(s);
                    digits.pop();
                    *s = format_phone(&digits);
                }
                InputMask::Venmo | InputMask::None => {
                    s.pop();
                }
            }
        }
    }

    /// Select an option by index; out-of-range indexes are ignored
    pub fn select(&mut self, index: usize) {
        let count = self.options.len();
        if let FieldValue::Choice(selected) = &mut self.value {
            if index < count {
                *selected = Some(index);
            }
        }
    }

    /// Move the selection to the next option (wraps around)
    pub fn select_next(&mut self) {
        let count = self.options.len();
        if count == 0 {
            return;
        }
        if let FieldValue::Choice(selected) = &mut self.value {
            *selected = Some(selected.map_or(0, |i| (i + 1) % count));
        }
    }

    /// Move the selection to the previous option (wraps around)
    pub fn select_prev(&mut self) {
        let count = self.options.len();
        if count == 0 {
            return;
        }
        if let FieldValue::Choice(selected) = &mut self.value {
            *selected = Some(match *selected {
                None | Some(0) => count - 1,
                Some(i) => i - 1,
            });
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice(selected) => *selected = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(selected) => selected
                .and_then(|i| self.options.get(i))
                .cloned()
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_field_formats_as_typed() {
        let mut field = FormField::masked(FieldId::Phone, "Phone", InputMask::Phone);
        for c in "5551234567".chars() {
            field.push_str(&c.to_string());
        }
        assert_eq!(field.as_text(), "(555) 123-4567");
    }

    #[test]
    fn test_phone_field_ignores_letters() {
        let mut field = FormField::masked(FieldId::Phone, "Phone", InputMask::Phone);
        field.push_str("55a5-");
        assert_eq!(field.as_text(), "(555) ");
    }

    #[test]
    fn test_phone_backspace_removes_digit_not_separator() {
        let mut field = FormField::masked(FieldId::Phone, "Phone", InputMask::Phone);
        field.push_str("555");
        assert_eq!(field.as_text(), "(555) ");
        field.pop_char();
        assert_eq!(field.as_text(), "55");
    }

    #[test]
    fn test_venmo_field_prefixes_at_sign() {
        let mut field = FormField::masked(FieldId::Venmo, "Venmo", InputMask::Venmo);
        field.push_str("j");
        assert_eq!(field.as_text(), "@j");
        field.push_str("ane");
        assert_eq!(field.as_text(), "@jane");
    }

    #[test]
    fn test_venmo_backspace_to_empty() {
        let mut field = FormField::masked(FieldId::Venmo, "Venmo", InputMask::Venmo);
        field.push_str("j");
        field.pop_char();
        assert_eq!(field.as_text(), "@");
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_plain_text_field_unchanged() {
        let mut field = FormField::text(FieldId::Name, "Name", false);
        field.push_str("Jane (Doe)");
        assert_eq!(field.as_text(), "Jane (Doe)");
        field.pop_char();
        assert_eq!(field.as_text(), "Jane (Doe");
    }

    #[test]
    fn test_choice_selection_wraps() {
        let mut field = FormField::choice(FieldId::FridayDinner, "Dinner", &["Yes", "No"]);
        assert_eq!(field.selected(), None);
        assert!(!field.has_value());

        field.select_next();
        assert_eq!(field.selected(), Some(0));
        field.select_next();
        assert_eq!(field.selected(), Some(1));
        field.select_next();
        assert_eq!(field.selected(), Some(0));
        field.select_prev();
        assert_eq!(field.selected(), Some(1));
        assert_eq!(field.display_value(), "No");
    }

    #[test]
    fn test_choice_select_out_of_range_ignored() {
        let mut field = FormField::choice(FieldId::FridayDinner, "Dinner", &["Yes", "No"]);
        field.select(5);
        assert_eq!(field.selected(), None);
    }

    #[test]
    fn test_choice_ignores_text_input() {
        let mut field = FormField::choice(FieldId::FridayDinner, "Dinner", &["Yes", "No"]);
        field.push_str("x");
        assert_eq!(field.as_text(), "");
        assert_eq!(field.selected(), None);
    }

    #[test]
    fn test_clear_resets_both_kinds() {
        let mut text = FormField::text(FieldId::Notes, "Notes", true);
        text.push_str("vegetarian");
        text.clear();
        assert!(!text.has_value());

        let mut choice = FormField::choice(FieldId::FridayDinner, "Dinner", &["Yes", "No"]);
        choice.select(1);
        choice.clear();
        assert_eq!(choice.selected(), None);
    }

    #[test]
    fn test_whitespace_only_has_no_value() {
        let mut field = FormField::text(FieldId::Name, "Name", false);
        field.push_str("   ");
        assert!(!field.has_value());
    }
}
