// Contact form state: three fields, Tab to move, Enter to submit.
// The actual send happens in the runner through the email client.
use gitfolio_api::ContactMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FromName,
    ReplyTo,
    Message,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
    pub field: usize,
    pub sending: bool,
}

impl ContactForm {
    pub fn current_field(&self) -> ContactField {
        match self.field {
            0 => ContactField::FromName,
            1 => ContactField::ReplyTo,
            _ => ContactField::Message,
        }
    }

    pub fn next_field(&mut self) {
        self.field = (self.field + 1) % 3;
    }

    pub fn previous_field(&mut self) {
        self.field = self.field.checked_sub(1).unwrap_or(2);
    }

    pub fn insert_char(&mut self, c: char) {
        self.active_buffer().push(c);
    }

    pub fn delete_char(&mut self) {
        self.active_buffer().pop();
    }

    fn active_buffer(&mut self) -> &mut String {
        match self.current_field() {
            ContactField::FromName => &mut self.from_name,
            ContactField::ReplyTo => &mut self.reply_to,
            ContactField::Message => &mut self.message,
        }
    }

    /// A submittable form needs somewhere to reply and something to say
    pub fn is_valid(&self) -> bool {
        !self.reply_to.trim().is_empty() && !self.message.trim().is_empty()
    }

    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            from_name: self.from_name.trim().to_string(),
            reply_to: self.reply_to.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycling_wraps() {
        let mut form = ContactForm::default();
        assert_eq!(form.current_field(), ContactField::FromName);

        form.next_field();
        assert_eq!(form.current_field(), ContactField::ReplyTo);
        form.next_field();
        assert_eq!(form.current_field(), ContactField::Message);
        form.next_field();
        assert_eq!(form.current_field(), ContactField::FromName);

        form.previous_field();
        assert_eq!(form.current_field(), ContactField::Message);
    }

    #[test]
    fn test_typing_targets_active_field() {
        let mut form = ContactForm::default();
        form.insert_char('A');
        form.next_field();
        form.insert_char('b');
        form.insert_char('c');
        form.delete_char();

        assert_eq!(form.from_name, "A");
        assert_eq!(form.reply_to, "b");
    }

    #[test]
    fn test_validation_requires_reply_to_and_message() {
        let mut form = ContactForm::default();
        assert!(!form.is_valid());

        form.reply_to = "ada@example.com".to_string();
        assert!(!form.is_valid());

        form.message = "  hello  ".to_string();
        assert!(form.is_valid());

        let msg = form.to_message();
        assert_eq!(msg.message, "hello");
    }
}
