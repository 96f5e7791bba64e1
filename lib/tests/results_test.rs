#[macro_use]
extern crate assert_matches;

use wordle_autoplay::*;

fn feedback(objective: &str, guess: &str) -> Result<String, WordleError> {
    get_result_for_guess(objective, guess).map(|result| format_results(&result.results))
}

#[test]
fn oracle_feedback_decodes_and_reencodes() -> Result<(), WordleError> {
    let results = parse_results("g.Yy.")?;

    assert_eq!(
        results,
        vec![
            LetterResult::Exact,
            LetterResult::Absent,
            LetterResult::Present,
            LetterResult::Present,
            LetterResult::Absent,
        ]
    );
    assert_eq!(format_results(&results), "G.YY.");
    assert_eq!(parse_results(&format_results(&results))?, results);
    Ok(())
}

#[test]
fn oracle_feedback_with_unknown_symbol_is_rejected() {
    assert_matches!(parse_results("G-Y.."), Err(WordleError::InvalidSymbol('-')));
    assert_matches!(parse_results("GGGGg "), Err(WordleError::InvalidSymbol(' ')));
}

#[test]
fn repeated_guess_letter_marked_once_per_objective_copy() -> Result<(), WordleError> {
    // One 'e' in "abide": only the first extra 'e' of "speed" counts.
    assert_eq!(feedback("abide", "speed")?, "..Y.Y");
    // Two 'e's in "erase": both count.
    assert_eq!(feedback("erase", "speed")?, "Y.YY.");
    Ok(())
}

#[test]
fn exact_copy_absorbs_repeated_guess_letter() -> Result<(), WordleError> {
    // The middle 'b' of "bobby" matches the only 'b' of "cabin", so the others are absent.
    assert_eq!(feedback("cabin", "bobby")?, "..G..");
    Ok(())
}

#[test]
fn solved_feedback_is_all_exact() -> Result<(), WordleError> {
    let result = get_result_for_guess("spare", "spare")?;

    assert!(result.is_solved());
    assert_eq!(format_results(&result.results), "GGGGG");
    assert!(!get_result_for_guess("spare", "stare")?.is_solved());
    Ok(())
}

#[test]
fn length_mismatch_reports_guess_length_as_expected() {
    assert_matches!(
        get_result_for_guess("spare", "spares"),
        Err(WordleError::InvalidFeedback {
            expected: 6,
            actual: 5
        })
    );
    assert_matches!(
        get_result_for_guess("spares", "spare"),
        Err(WordleError::InvalidFeedback {
            expected: 5,
            actual: 6
        })
    );
}

#[test]
fn local_oracle_sends_feedback_until_solved() -> Result<(), WordleError> {
    let mut oracle = LocalOracle::new(vec!["abide"]);
    let game = oracle.start_game()?;

    let response = oracle.make_guess(&game.game_id, "speed")?;
    assert_eq!(format_results(&response.results), "..Y.Y");
    assert!(!response.solved);

    let response = oracle.make_guess(&game.game_id, "abide")?;
    assert_eq!(format_results(&response.results), "GGGGG");
    assert!(response.solved);
    assert_eq!(response.next_hint, None);
    Ok(())
}
