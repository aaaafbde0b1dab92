use keepsake::content::InteractionKind;
use keepsake::{Greeting, Journey};

fn fixture() -> Greeting {
    let s = include_str!("data/greeting.json");
    let greeting: Greeting = serde_json::from_str(s).unwrap();
    greeting.validate().unwrap();
    greeting
}

#[test]
fn full_week_walkthrough() {
    let greeting = fixture();
    let mut journey = Journey::new(&greeting.journey, greeting.promises.len());

    // Six tap-gated days plus the checklist, in configured order.
    while journey.current_step().interaction != InteractionKind::Finale {
        match journey.current_step().interaction {
            InteractionKind::Tap => {
                assert!(!journey.can_advance(), "step {} should start gated", journey.current_step().id);
                journey.interact();
            }
            InteractionKind::Checklist => {
                for i in 0..greeting.promises.len() {
                    assert!(!journey.can_advance());
                    journey.toggle_promise(i).unwrap();
                }
            }
            InteractionKind::Finale => unreachable!(),
        }
        assert!(journey.advance());
    }

    assert_eq!(journey.current_step().id, "valentine");
    assert_eq!(journey.current_index(), journey.step_count() - 1);

    // The no-button runs away; the caption ring follows the evasion count.
    assert_eq!(journey.decline_caption(), "No");
    for _ in 0..5 {
        journey.decline();
    }
    assert_eq!(journey.decline_caption(), greeting.journey.decline_captions[5]);
    assert!(!journey.accepted());

    assert!(journey.accept());
    assert!(journey.accepted());
    assert!(!journey.accept());
}

#[test]
fn journey_cannot_skip_gates() {
    let greeting = fixture();
    let mut journey = Journey::new(&greeting.journey, greeting.promises.len());

    for _ in 0..10 {
        assert!(!journey.advance());
    }
    assert_eq!(journey.current_index(), 0);
}
