//! The RSVP form and the values snapshot taken from it

use super::field::{FieldId, FormField, InputMask};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Answer to the Friday dinner question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DinnerChoice {
    Yes,
    No,
}

impl DinnerChoice {
    pub const ALL: [DinnerChoice; 2] = [DinnerChoice::Yes, DinnerChoice::No];

    /// Value sent in the form data
    pub fn form_value(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Yes, I'll be there",
            Self::No => "No, I can't make it",
        }
    }

    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Snapshot of the form's values, re-derived on every validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RsvpValues {
    pub name: String,
    pub phone: String,
    pub venmo: String,
    pub friday_dinner: Option<DinnerChoice>,
    pub notes: String,
}

impl RsvpValues {
    /// All named fields in form order, as they are submitted.
    ///
    /// An unselected choice is omitted, the same way an unchecked radio
    /// group contributes nothing to form data.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            (FieldId::Name.form_name(), self.name.clone()),
            (FieldId::Phone.form_name(), self.phone.clone()),
            (FieldId::Venmo.form_name(), self.venmo.clone()),
        ];
        if let Some(choice) = self.friday_dinner {
            fields.push((
                FieldId::FridayDinner.form_name(),
                choice.form_value().to_string(),
            ));
        }
        fields.push((FieldId::Notes.form_name(), self.notes.clone()));
        fields
    }
}

/// Index of the submit button row, after the five fields
pub const SUBMIT_ROW: usize = 5;

#[derive(Debug, Clone)]
pub struct RsvpForm {
    pub name: FormField,
    pub phone: FormField,
    pub venmo: FormField,
    pub friday_dinner: FormField,
    pub notes: FormField,
    pub active_field_index: usize,
}

impl RsvpForm {
    pub fn new() -> Self {
        let dinner_labels: Vec<&str> = DinnerChoice::ALL.iter().map(|c| c.label()).collect();
        Self {
            name: FormField::text(FieldId::Name, "Full Name", false),
            phone: FormField::masked(FieldId::Phone, "Phone Number", InputMask::Phone),
            venmo: FormField::masked(FieldId::Venmo, "Venmo Username", InputMask::Venmo),
            friday_dinner: FormField::choice(
                FieldId::FridayDinner,
                "Will you attend Friday dinner?",
                &dinner_labels,
            ),
            notes: FormField::text(FieldId::Notes, "Notes (optional)", true),
            active_field_index: 0,
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Name => &self.name,
            FieldId::Phone => &self.phone,
            FieldId::Venmo => &self.venmo,
            FieldId::FridayDinner => &self.friday_dinner,
            FieldId::Notes => &self.notes,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Phone => &mut self.phone,
            FieldId::Venmo => &mut self.venmo,
            FieldId::FridayDinner => &mut self.friday_dinner,
            FieldId::Notes => &mut self.notes,
        }
    }

    /// The field under focus, `None` when the submit button is focused
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field_index).copied()
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    pub fn focus(&mut self, id: FieldId) {
        if let Some(index) = FieldId::ALL.iter().position(|f| *f == id) {
            self.active_field_index = index;
        }
    }

    /// Read the current values out of the fields
    pub fn snapshot(&self) -> RsvpValues {
        RsvpValues {
            name: self.name.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            venmo: self.venmo.as_text().to_string(),
            friday_dinner: self
                .friday_dinner
                .selected()
                .and_then(DinnerChoice::from_index),
            notes: self.notes.as_text().to_string(),
        }
    }

    /// Empty every field and deselect the choice group
    pub fn reset(&mut self) {
        for id in FieldId::ALL {
            self.field_mut(id).clear();
        }
        self.active_field_index = 0;
    }
}

impl Default for RsvpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RsvpForm {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1 // five fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldId::ALL.get(index).map(|id| self.field(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> RsvpForm {
        let mut form = RsvpForm::new();
        form.name.push_str("Jane Doe");
        form.phone.push_str("5551234567");
        form.venmo.push_str("jane");
        form.friday_dinner.select(0);
        form
    }

    #[test]
    fn test_snapshot_reads_formatted_values() {
        let form = filled_form();
        assert_eq!(
            form.snapshot(),
            RsvpValues {
                name: "Jane Doe".to_string(),
                phone: "(555) 123-4567".to_string(),
                venmo: "@jane".to_string(),
                friday_dinner: Some(DinnerChoice::Yes),
                notes: String::new(),
            }
        );
    }

    #[test]
    fn test_form_fields_in_submission_order() {
        let values = filled_form().snapshot();
        assert_eq!(
            values.form_fields(),
            vec![
                ("name", "Jane Doe".to_string()),
                ("phone", "(555) 123-4567".to_string()),
                ("venmo", "@jane".to_string()),
                ("friday-dinner", "yes".to_string()),
                ("notes", String::new()),
            ]
        );
    }

    #[test]
    fn test_form_fields_omit_unselected_choice() {
        let values = RsvpValues::default();
        let names: Vec<&str> = values.form_fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["name", "phone", "venmo", "notes"]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled_form();
        form.notes.push_str("bringing a friend");
        form.active_field_index = 3;
        form.reset();
        assert_eq!(form.snapshot(), RsvpValues::default());
        assert_eq!(form.active_field(), 0);
    }

    #[test]
    fn test_field_navigation_wraps_through_submit_row() {
        let mut form = RsvpForm::new();
        form.prev_field();
        assert!(form.is_submit_row_active());
        assert_eq!(form.active_field_id(), None);
        form.next_field();
        assert_eq!(form.active_field_id(), Some(FieldId::Name));
    }

    #[test]
    fn test_focus_by_id() {
        let mut form = RsvpForm::new();
        form.focus(FieldId::Venmo);
        assert_eq!(form.active_field(), 2);
        assert_eq!(form.get_field(2).map(|f| f.id), Some(FieldId::Venmo));
    }
}
