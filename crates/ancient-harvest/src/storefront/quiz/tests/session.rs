use crate::storefront::quiz::model::{AnswerValue, QuestionId};
use crate::storefront::quiz::session::{QuizPosition, QuizSession};

#[test]
fn single_select_records_and_auto_advances() {
    let mut session = QuizSession::standard();
    assert_eq!(session.position(), QuizPosition::Question(0));

    session.select_option("child");

    assert_eq!(session.position(), QuizPosition::Question(1));
    assert_eq!(
        session.answers().get(&QuestionId::Age),
        Some(&AnswerValue::Single("child".to_string()))
    );
}

#[test]
fn multi_select_toggles_in_place_until_explicit_advance() {
    let mut session = QuizSession::standard();
    session.select_option("child"); // -> goal
    session.select_option("diabetes"); // -> diet (index 2, multiple)
    assert_eq!(session.position(), QuizPosition::Question(2));

    session.select_option("glutenfree");
    session.select_option("vegan");
    assert_eq!(session.position(), QuizPosition::Question(2));

    session.advance();
    assert_eq!(session.position(), QuizPosition::Question(3));

    assert_eq!(
        session.answers().get(&QuestionId::Diet),
        Some(&AnswerValue::Multiple(vec![
            "glutenfree".to_string(),
            "vegan".to_string()
        ]))
    );
}

#[test]
fn toggling_a_selected_token_removes_it() {
    let mut session = QuizSession::standard();
    session.select_option("adult");
    session.select_option("general");

    session.select_option("glutenfree");
    session.select_option("glutenfree");

    assert_eq!(
        session.answers().get(&QuestionId::Diet),
        Some(&AnswerValue::Multiple(Vec::new()))
    );
}

#[test]
fn go_back_preserves_answers_ahead_of_the_cursor() {
    let mut session = QuizSession::standard();
    session.select_option("adult");
    session.select_option("general");
    session.select_option("glutenfree");
    session.select_option("vegan");
    session.advance(); // -> nutrients (index 3)
    assert_eq!(session.position(), QuizPosition::Question(3));

    session.go_back();
    assert_eq!(session.position(), QuizPosition::Question(2));

    // Both prior toggles survived the backward navigation.
    assert_eq!(
        session.answers().get(&QuestionId::Diet),
        Some(&AnswerValue::Multiple(vec![
            "glutenfree".to_string(),
            "vegan".to_string()
        ]))
    );
    // So did the single-select answers recorded before.
    assert!(session.answers().contains_key(&QuestionId::Age));
    assert!(session.answers().contains_key(&QuestionId::Goal));
}

#[test]
fn go_back_is_a_no_op_at_the_first_question() {
    let mut session = QuizSession::standard();
    session.go_back();
    assert_eq!(session.position(), QuizPosition::Question(0));
}

#[test]
fn last_single_select_finishes_the_quiz() {
    let mut session = QuizSession::standard();
    session.select_option("adult");
    session.select_option("general");
    session.advance(); // past diet
    session.advance(); // past nutrients
    assert_eq!(session.position(), QuizPosition::Question(4));

    session.select_option("mid");
    assert!(session.is_finished());
    assert!(session.current_question().is_none());

    let snapshot = session.finish();
    assert_eq!(
        snapshot.get(&QuestionId::Budget),
        Some(&AnswerValue::Single("mid".to_string()))
    );
}

#[test]
fn finished_is_terminal_until_retake() {
    let mut session = QuizSession::standard();
    for _ in 0..5 {
        session.advance();
    }
    assert!(session.is_finished());

    session.select_option("child");
    session.advance();
    assert!(session.is_finished());
    assert!(session.answers().is_empty());

    session.retake();
    assert_eq!(session.position(), QuizPosition::Question(0));
    assert!(session.answers().is_empty());
}

#[test]
fn empty_question_list_starts_finished() {
    let session = QuizSession::new(Vec::new());
    assert!(session.is_finished());
}

#[test]
fn standard_set_matches_the_production_quiz_shape() {
    let questions = crate::storefront::quiz::model::Question::standard_set();

    assert_eq!(questions.len(), 5);
    let modes: Vec<_> = questions.iter().map(|q| q.mode).collect();
    use crate::storefront::quiz::model::SelectionMode::{Multiple, Single};
    assert_eq!(modes, vec![Single, Single, Multiple, Multiple, Single]);
    assert_eq!(questions[1].options.len(), 7);
    assert!(questions[4]
        .options
        .iter()
        .any(|option| option.value == "premium"));
}
