use breakout::sim::{Autopilot, InputEvent, Script, ScriptedEvent, Snapshot, replay, tick};
use breakout::{GameConfig, GamePhase, Session, TickInput};

fn at(tick: u64, event: InputEvent) -> ScriptedEvent {
    ScriptedEvent { tick, event }
}

/// Drive a session by hand through `handle_input`, the way an interactive
/// host would, instead of going through `replay`.
fn drive_by_hand(script: &Script, ticks: u64) -> Snapshot {
    let mut session = Session::new();
    let mut events = script.events.iter().peekable();
    while session.time_ticks() < ticks && session.is_in_play() {
        while let Some(scripted) = events.next_if(|e| e.tick <= session.time_ticks()) {
            session.handle_input(scripted.event);
        }
        session.tick();
    }
    session.snapshot()
}

#[test]
fn replay_matches_interactive_driving() {
    let script = Script::new(vec![
        at(5, InputEvent::MoveLeftStart),
        at(40, InputEvent::MoveLeftStop),
        at(120, InputEvent::MoveRightStart),
        at(121, InputEvent::MoveLeftStart),
        at(150, InputEvent::MoveRightStop),
        at(300, InputEvent::MoveRightStart),
        at(330, InputEvent::MoveRightStop),
    ])
    .expect("script is ordered");

    for ticks in [1, 50, 400, 1_500] {
        let replayed = replay(&GameConfig::default(), &script, ticks).expect("replay");
        let driven = drive_by_hand(&script, ticks);
        assert_eq!(replayed, driven, "diverged after {ticks} ticks");
        assert_eq!(replayed.fingerprint(), driven.fingerprint());
    }
}

#[test]
fn replay_from_json_script() {
    let script = Script::from_json(
        r#"{
            "events": [
                { "tick": 0, "event": "move_right_start" },
                { "tick": 30, "event": "move_right_stop" }
            ]
        }"#,
    )
    .expect("valid script");

    let snapshot = replay(&GameConfig::default(), &script, 30).expect("replay");
    assert_eq!(snapshot.tick, 30);
    // 30 ticks at 2px per tick
    assert_eq!(snapshot.paddle_x, 260);
    assert_eq!(snapshot.phase, GamePhase::Playing);
    // Brick 27 is always the first one hit from the start position
    assert!(snapshot.destroyed[27]);
}

#[test]
fn replay_stops_at_game_over() {
    // No input: the paddle never moves and the ball eventually falls out
    let snapshot = replay(&GameConfig::default(), &Script::default(), 100_000).expect("replay");
    assert_eq!(snapshot.phase, GamePhase::GameOver);
    assert!(snapshot.tick < 100_000);

    let again = replay(&GameConfig::default(), &Script::default(), 100_000).expect("replay");
    assert_eq!(snapshot, again);
}

#[test]
fn replay_rejects_invalid_config() {
    let config = GameConfig {
        paddle_width: 0,
        ..Default::default()
    };
    assert!(replay(&config, &Script::default(), 10).is_err());
}

#[test]
fn autopilot_runs_are_reproducible() {
    fn run() -> Snapshot {
        let mut session = Session::new();
        let mut pilot = Autopilot::new();
        for _ in 0..3_000 {
            let input: TickInput = pilot.next_input(&session);
            tick(&mut session, &input);
        }
        session.snapshot()
    }

    let first = run();
    assert_eq!(first.phase, GamePhase::Playing);
    assert_eq!(first, run());
}
