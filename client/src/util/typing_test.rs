use super::*;

fn script(lines: &[&str]) -> TypingScript {
    TypingScript::new(
        lines.iter().map(|l| (*l).to_owned()).collect(),
        Duration::from_millis(10),
        Duration::from_millis(100),
    )
}

fn run_to_end(script: &TypingScript) -> (Vec<TypingCursor>, Duration) {
    let mut cursor = TypingCursor::default();
    let mut seen = vec![cursor];
    let mut total = Duration::ZERO;
    while let Some((delay, next)) = script.next_step(cursor) {
        total += delay;
        cursor = next;
        seen.push(cursor);
    }
    (seen, total)
}

#[test]
fn greeting_interpolates_user_name() {
    let script = TypingScript::greeting("Itay");
    assert_eq!(script.lines(), ["Hello, Itay !", "It's great to see you again!"]);
}

#[test]
fn with_delays_overrides_timing() {
    let s = TypingScript::greeting("Itay").with_delays(Duration::from_millis(1), Duration::from_millis(2));
    let (delay, _) = s.next_step(TypingCursor::default()).expect("first char");
    assert_eq!(delay, Duration::from_millis(1));
    let end_of_first = TypingCursor { line: 0, typed: s.lines()[0].chars().count() };
    let (delay, _) = s.next_step(end_of_first).expect("line break");
    assert_eq!(delay, Duration::from_millis(2));
}

#[test]
fn reveals_one_character_per_step_then_breaks() {
    let s = script(&["ab"]);
    let start = TypingCursor::default();
    let (d1, c1) = s.next_step(start).expect("first char");
    assert_eq!(d1, Duration::from_millis(10));
    assert_eq!(c1, TypingCursor { line: 0, typed: 1 });

    let (_, c2) = s.next_step(c1).expect("second char");
    let (d3, c3) = s.next_step(c2).expect("line break");
    assert_eq!(d3, Duration::from_millis(100));
    assert_eq!(c3, TypingCursor { line: 1, typed: 0 });
    assert_eq!(s.next_step(c3), None);
}

#[test]
fn total_duration_counts_chars_and_breaks() {
    let s = script(&["abc", "de"]);
    let (steps, total) = run_to_end(&s);
    // 5 characters + 2 line breaks, plus the starting cursor.
    assert_eq!(steps.len(), 8);
    assert_eq!(total, Duration::from_millis(5 * 10 + 2 * 100));
}

#[test]
fn visible_shows_prefix_then_full_lines() {
    let s = script(&["abc", "de"]);
    assert!(s.visible(TypingCursor::default()).is_empty());

    assert_eq!(
        s.visible(TypingCursor { line: 0, typed: 2 }),
        vec![TypedLine { text: "ab".to_owned(), broken: false }]
    );
    assert_eq!(
        s.visible(TypingCursor { line: 1, typed: 1 }),
        vec![
            TypedLine { text: "abc".to_owned(), broken: true },
            TypedLine { text: "d".to_owned(), broken: false },
        ]
    );
}

#[test]
fn finished_script_shows_every_line_broken() {
    let s = script(&["abc", "de"]);
    let (steps, _) = run_to_end(&s);
    let last = *steps.last().expect("at least one step");
    let lines = s.visible(last);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.broken));
}

#[test]
fn multibyte_characters_reveal_whole() {
    let s = script(&["hé!"]);
    assert_eq!(s.visible(TypingCursor { line: 0, typed: 2 })[0].text, "hé");
}

#[test]
fn empty_script_has_no_steps() {
    let s = script(&[]);
    assert_eq!(s.next_step(TypingCursor::default()), None);
}
