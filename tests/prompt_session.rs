use std::io::{Cursor, Read};

use fresheye::prompt::render_prompt;
use fresheye::{DecisionKey, KeyRead, KeyReader, KeySet, Prompter, StickyAnswer};

fn session(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn transcript(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> (String, String) {
    let (mut input, output) = prompter.into_parts();
    let mut unread = String::new();
    input.read_to_string(&mut unread).unwrap();
    (String::from_utf8(output).unwrap(), unread)
}

#[test]
fn strict_yes_no_prompt_consumes_exactly_one_line() {
    let mut reader = KeyReader::new(Cursor::new(b"n\nnext question\n".to_vec()));

    assert_eq!(reader.read_key(KeySet::YES_NO).unwrap(), KeyRead::Key(DecisionKey::No));

    let mut rest = String::new();
    reader.into_inner().read_to_string(&mut rest).unwrap();
    assert_eq!(rest, "next question\n");
}

#[test]
fn localized_answers_on_russian_layout() {
    let mut prompter = session("Д\nнет\nу\nИ\n");
    let mut sticky = StickyAnswer::new();

    let answers: Vec<_> = (0..4)
        .map(|_| prompter.ask(&mut sticky, Some("Заменить"), KeySet::YES_NO).unwrap())
        .collect();

    assert_eq!(
        answers,
        vec![
            Some(DecisionKey::Yes),
            Some(DecisionKey::No),
            Some(DecisionKey::Yes),
            Some(DecisionKey::No),
        ]
    );
}

#[test]
fn navigable_prompt_with_sticky_default() {
    let mut prompter = session("c\n\nx y\n\n");
    let mut sticky = StickyAnswer::new();
    let ask = |p: &mut Prompter<_, _>, s: &mut StickyAnswer| {
        p.ask(s, Some("Pair found"), KeySet::ALL).unwrap()
    };

    assert_eq!(ask(&mut prompter, &mut sticky), Some(DecisionKey::Context));
    assert_eq!(ask(&mut prompter, &mut sticky), Some(DecisionKey::Context));
    assert_eq!(ask(&mut prompter, &mut sticky), Some(DecisionKey::Yes));
    assert_eq!(ask(&mut prompter, &mut sticky), Some(DecisionKey::Yes));
    assert_eq!(ask(&mut prompter, &mut sticky), None);
    assert_eq!(sticky.get(), Some(DecisionKey::Yes));

    let (output, unread) = transcript(prompter);
    assert!(unread.is_empty());
    let hints: Vec<_> = output
        .split("Pair found? (Yes/No/All/Stop/Context/Help) ")
        .skip(1)
        .collect();
    assert_eq!(hints, vec!["[Help] ", "[Context] ", "[Context] ", "[Yes] ", "[Yes] "]);
}

#[test]
fn immediate_end_of_input_returns_no_answer() {
    let mut prompter = session("");
    let mut sticky = StickyAnswer::new();

    assert_eq!(prompter.ask(&mut sticky, None, KeySet::ALL).unwrap(), None);
    assert_eq!(sticky, StickyAnswer::new());

    let (output, _) = transcript(prompter);
    assert_eq!(output, render_prompt(None, &StickyAnswer::new()));
}

#[test]
fn separate_sessions_do_not_share_sticky_state() {
    let mut first = StickyAnswer::new();
    let mut second = StickyAnswer::new();

    session("s\n").ask(&mut first, None, KeySet::ALL).unwrap();
    let answer = session("\n").ask(&mut second, None, KeySet::ALL).unwrap();

    assert_eq!(first.get(), Some(DecisionKey::Stop));
    assert_eq!(answer, None);
    assert_eq!(second.hint(), "Help");
}
