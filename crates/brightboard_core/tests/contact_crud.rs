use brightboard_core::{ConnectionProvider, ContactMessage, ContactMessageService};

fn sample(name: &str, email: &str, body: &str) -> ContactMessage {
    ContactMessage::new(name, email, "31988887777", "Question", body)
}

#[test]
fn save_and_get_roundtrip() {
    let provider = ConnectionProvider::in_memory().unwrap();
    let service = ContactMessageService::new(&provider);

    let saved = service
        .save_message(sample("Visitor", "visitor@example.com", "How do I sign up?"))
        .unwrap();
    assert!(saved.id > 0);
    assert!(saved.created_at > 0);

    let loaded = service.get_message(saved.id).unwrap();
    assert_eq!(loaded, saved);
}

#[test]
fn blank_email_or_body_is_declined_without_insert() {
    let provider = ConnectionProvider::in_memory().unwrap();
    let service = ContactMessageService::new(&provider);

    assert!(service
        .save_message(sample("No Email", "  ", "some body"))
        .is_none());
    assert!(service
        .save_message(sample("No Body", "someone@example.com", ""))
        .is_none());
    assert!(service.list_messages().is_empty());
}

#[test]
fn get_missing_message_returns_none() {
    let provider = ConnectionProvider::in_memory().unwrap();
    let service = ContactMessageService::new(&provider);

    assert!(service.get_message(31337).is_none());
}

#[test]
fn list_returns_most_recent_first() {
    let provider = ConnectionProvider::in_memory().unwrap();
    let service = ContactMessageService::new(&provider);

    for body in ["first", "second", "third"] {
        service
            .save_message(sample("Visitor", "visitor@example.com", body))
            .unwrap();
    }

    let bodies: Vec<String> = service
        .list_messages()
        .into_iter()
        .map(|message| message.body)
        .collect();
    assert_eq!(bodies, ["third", "second", "first"]);
}

#[test]
fn delete_twice_returns_true_then_false() {
    let provider = ConnectionProvider::in_memory().unwrap();
    let service = ContactMessageService::new(&provider);

    let saved = service
        .save_message(sample("Visitor", "visitor@example.com", "bye"))
        .unwrap();
    assert!(service.delete_message(saved.id));
    assert!(!service.delete_message(saved.id));
}
