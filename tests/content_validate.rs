use keepsake::Greeting;

fn fixture() -> Greeting {
    let s = include_str!("data/greeting.json");
    serde_json::from_str(s).unwrap()
}

#[test]
fn json_fixture_validates() {
    let greeting = fixture();
    greeting.validate().unwrap();

    assert_eq!(greeting.memories.len(), 8);
    assert_eq!(greeting.love_notes.len(), 10);
    assert_eq!(greeting.promises.len(), 4);
    assert_eq!(greeting.important_dates.len(), 5);
    assert_eq!(greeting.journey.steps.len(), 8);
}

#[test]
fn fixture_round_trips() {
    let greeting = fixture();
    let json = serde_json::to_string(&greeting).unwrap();
    let back: Greeting = serde_json::from_str(&json).unwrap();
    back.validate().unwrap();
    assert_eq!(back.started_at, greeting.started_at);
    assert_eq!(back.journey.decline_captions, greeting.journey.decline_captions);
}

#[test]
fn broken_fixture_is_rejected() {
    let mut greeting = fixture();
    greeting.journey.steps.pop(); // drop the finale
    let err = greeting.validate().unwrap_err();
    assert!(err.to_string().starts_with("content error:"));
}
