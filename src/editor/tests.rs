use super::*;

fn pos(line: usize, column: usize) -> Position {
    Position::new(line, column)
}

fn create_editor(text: &str) -> Editor {
    Editor::new(TextBuffer::from(text))
}

fn cursors(editor: &Editor) -> Vec<Position> {
    editor.selections().iter().map(|s| s.active).collect()
}

#[test]
fn test_editor_initial_state() {
    let editor = create_editor("foo bar");
    assert_eq!(editor.selections(), &[Selection::cursor(pos(0, 0))]);
    assert_eq!(editor.text(), "foo bar");
    assert!(editor.settings().multi_cursor);
}

#[test]
fn test_cursor_next_word_end() {
    let mut editor = create_editor("foo bar");
    editor.cursor_next_word_end();
    assert_eq!(cursors(&editor), vec![pos(0, 3)]);
    editor.cursor_next_word_end();
    assert_eq!(cursors(&editor), vec![pos(0, 7)]);
    editor.cursor_next_word_end();
    assert_eq!(cursors(&editor), vec![pos(0, 7)]);
}

#[test]
fn test_cursor_prev_word_start() {
    let mut editor = create_editor("foo bar");
    editor.set_cursor(pos(0, 7)).unwrap();
    editor.cursor_prev_word_start();
    assert_eq!(cursors(&editor), vec![pos(0, 4)]);
    editor.cursor_prev_word_start();
    assert_eq!(cursors(&editor), vec![pos(0, 0)]);
}

#[test]
fn test_motion_collapses_selection() {
    let mut editor = create_editor("foo bar");
    editor
        .set_selections(vec![Selection::new(pos(0, 0), pos(0, 3))])
        .unwrap();
    editor.cursor_next_word_end();
    assert_eq!(editor.primary(), Selection::cursor(pos(0, 7)));
}

#[test]
fn test_select_keeps_anchor() {
    let mut editor = create_editor("foo bar");
    editor.cursor_next_word_end_select();
    editor.cursor_next_word_end_select();
    assert_eq!(editor.primary(), Selection::new(pos(0, 0), pos(0, 7)));

    editor.cursor_prev_word_start_select();
    assert_eq!(editor.primary(), Selection::new(pos(0, 0), pos(0, 4)));
}

#[test]
fn test_japanese_motion() {
    let mut editor = create_editor("かなカナ漢字");
    editor.cursor_next_word_end();
    assert_eq!(cursors(&editor), vec![pos(0, 2)]);
    editor.cursor_next_word_end();
    assert_eq!(cursors(&editor), vec![pos(0, 4)]);
    editor.cursor_next_word_end();
    assert_eq!(cursors(&editor), vec![pos(0, 6)]);
}

#[test]
fn test_multi_cursor_fan_out() {
    let mut editor = create_editor("foo bar\nあいアイ");
    editor.add_cursor(pos(1, 0)).unwrap();
    editor.cursor_next_word_end();
    assert_eq!(cursors(&editor), vec![pos(0, 3), pos(1, 2)]);
}

#[test]
fn test_multi_cursor_off_keeps_primary_only() {
    let mut editor = create_editor("foo bar\nあいアイ");
    editor.add_cursor(pos(1, 0)).unwrap();
    editor.set_option("mc=off").unwrap();
    editor.cursor_next_word_end();
    assert_eq!(cursors(&editor), vec![pos(0, 3)]);
}

#[test]
fn test_duplicate_selections_merge() {
    let mut editor = create_editor("foo bar");
    editor.add_cursor(pos(0, 1)).unwrap();
    assert_eq!(editor.selections().len(), 2);
    editor.cursor_next_word_end();
    assert_eq!(cursors(&editor), vec![pos(0, 3)]);

    editor.add_cursor(pos(0, 3)).unwrap();
    assert_eq!(editor.selections().len(), 1);
}

#[test]
fn test_delete_word_right() {
    let mut editor = create_editor("foo bar");
    editor.delete_word_right().unwrap();
    assert_eq!(editor.text(), " bar");
    assert_eq!(cursors(&editor), vec![pos(0, 0)]);
    assert_eq!(editor.buffer().revision, 1);
}

#[test]
fn test_delete_word_right_skips_whitespace() {
    let mut editor = create_editor("foo bar");
    editor.set_cursor(pos(0, 3)).unwrap();
    editor.delete_word_right().unwrap();
    assert_eq!(editor.text(), "foo");
    assert_eq!(cursors(&editor), vec![pos(0, 3)]);
}

#[test]
fn test_delete_word_left() {
    let mut editor = create_editor("foo bar");
    editor.set_cursor(pos(0, 7)).unwrap();
    editor.delete_word_left().unwrap();
    assert_eq!(editor.text(), "foo ");
    assert_eq!(cursors(&editor), vec![pos(0, 4)]);
}

#[test]
fn test_delete_selection_instead_of_word() {
    let mut editor = create_editor("foo bar");
    editor
        .set_selections(vec![Selection::new(pos(0, 5), pos(0, 1))])
        .unwrap();
    editor.delete_word_left().unwrap();
    assert_eq!(editor.text(), "far");
    assert_eq!(cursors(&editor), vec![pos(0, 1)]);
}

#[test]
fn test_delete_word_left_at_origin_is_noop() {
    let mut editor = create_editor("foo");
    editor.delete_word_left().unwrap();
    assert_eq!(editor.text(), "foo");
    assert_eq!(editor.buffer().revision, 0);
}

#[test]
fn test_delete_word_left_over_trailing_space_line_break() {
    // Only the line break goes; the trailing space stays.
    let mut editor = create_editor("a \nb");
    editor.set_cursor(pos(1, 0)).unwrap();
    editor.delete_word_left().unwrap();
    assert_eq!(editor.text(), "a b");
    assert_eq!(cursors(&editor), vec![pos(0, 2)]);
}

#[test]
fn test_delete_word_right_over_trailing_space_line_break() {
    // The trailing space and the line break go together.
    let mut editor = create_editor("a \nb");
    editor.set_cursor(pos(0, 1)).unwrap();
    editor.delete_word_right().unwrap();
    assert_eq!(editor.text(), "ab");
    assert_eq!(cursors(&editor), vec![pos(0, 1)]);
}

#[test]
fn test_trailing_whitespace_motion_reaches_next_content() {
    let mut editor = create_editor("a  \n\n\nb");
    editor.set_cursor(pos(0, 1)).unwrap();
    editor.cursor_next_word_end();
    assert_eq!(cursors(&editor), vec![pos(3, 0)]);
}

#[test]
fn test_delete_word_left_one_blank_line_at_a_time() {
    let mut editor = create_editor("a\n\n\nb");
    editor.set_cursor(pos(3, 0)).unwrap();
    editor.delete_word_left().unwrap();
    assert_eq!(editor.text(), "a\n\nb");
    assert_eq!(cursors(&editor), vec![pos(2, 0)]);
}

#[test]
fn test_delete_word_left_over_crlf() {
    let mut editor = create_editor("a\r\nb");
    editor.set_cursor(pos(1, 0)).unwrap();
    editor.delete_word_left().unwrap();
    assert_eq!(editor.text(), "ab");
    assert_eq!(cursors(&editor), vec![pos(0, 1)]);
}

#[test]
fn test_multi_cursor_delete_is_one_edit() {
    let mut editor = create_editor("foo bar\nbaz qux");
    editor.add_cursor(pos(1, 0)).unwrap();
    editor.delete_word_right().unwrap();
    assert_eq!(editor.text(), " bar\n qux");
    assert_eq!(editor.buffer().revision, 1);
    assert_eq!(cursors(&editor), vec![pos(0, 0), pos(1, 0)]);
}

#[test]
fn test_overlapping_deletions_merge() {
    let mut editor = create_editor("foo bar");
    editor.add_cursor(pos(0, 1)).unwrap();
    editor.delete_word_right().unwrap();
    assert_eq!(editor.text(), " bar");
    assert_eq!(cursors(&editor), vec![pos(0, 0)]);
}

#[test]
fn test_word_separators_setting() {
    let mut editor = create_editor("foo_bar");
    editor.cursor_next_word_end();
    assert_eq!(cursors(&editor), vec![pos(0, 7)]);

    editor.set_cursor(pos(0, 0)).unwrap();
    editor.set_option("wsep=_").unwrap();
    editor.cursor_next_word_end();
    assert_eq!(cursors(&editor), vec![pos(0, 3)]);
    editor.cursor_next_word_end();
    assert_eq!(cursors(&editor), vec![pos(0, 4)]);
}

#[test]
fn test_execute_dispatch() {
    let mut editor = create_editor("foo bar");
    editor.execute(Command::CursorNextWordEndSelect).unwrap();
    assert_eq!(editor.primary(), Selection::new(pos(0, 0), pos(0, 3)));
    editor.execute(Command::DeleteWordRight).unwrap();
    assert_eq!(editor.text(), " bar");
}

#[test]
fn test_execute_named() {
    let mut editor = create_editor("foo bar");
    let cmd = editor.execute_named("wordend").unwrap();
    assert_eq!(cmd, Command::CursorNextWordEnd);
    assert_eq!(cursors(&editor), vec![pos(0, 3)]);

    let cmd = editor.execute_named("deleteWordLeftJa").unwrap();
    assert_eq!(cmd, Command::DeleteWordLeft);
    assert_eq!(editor.text(), " bar");

    let err = editor.execute_named("paste").unwrap_err();
    assert_eq!(err.code, errors::UNKNOWN_COMMAND);
}

#[test]
fn test_set_selections_validation() {
    let mut editor = create_editor("foo\nbar");
    let err = editor.set_selections(Vec::new()).unwrap_err();
    assert_eq!(err.code, errors::NO_SELECTION);

    let err = editor.set_cursor(pos(0, 4)).unwrap_err();
    assert_eq!(err.code, errors::INVALID_POSITION);
    let err = editor.add_cursor(pos(2, 0)).unwrap_err();
    assert_eq!(err.code, errors::INVALID_POSITION);

    assert_eq!(editor.selections(), &[Selection::cursor(pos(0, 0))]);
}

#[test]
fn test_set_option_errors() {
    let mut editor = create_editor("");
    let err = editor.set_option("multicursor=sometimes").unwrap_err();
    assert_eq!(err.code, errors::SETTING_PARSE_ERROR);
    let err = editor.set_option("nosuch=1").unwrap_err();
    assert_eq!(err.code, errors::UNKNOWN_SETTING);
}
