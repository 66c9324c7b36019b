use pretty_assertions::assert_eq;

use super::*;

/// Captured stdout and stderr of one command.
struct Captured {
    ok: bool,
    out: String,
    err: String,
}

fn capture(
    source: &str,
    command: impl FnOnce(&mut Vec<u8>, &mut TerminalEmitter<Vec<u8>>) -> Result<bool, DriverError>,
) -> Captured {
    let mut out = Vec::new();
    let mut emitter =
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false).with_source(source);
    let ok = match command(&mut out, &mut emitter) {
        Ok(ok) => ok,
        Err(err) => panic!("command failed: {err}"),
    };
    Captured {
        ok,
        out: String::from_utf8_lossy(&out).into_owned(),
        err: String::from_utf8_lossy(&emitter.into_inner()).into_owned(),
    }
}

#[test]
fn lex_lists_tokens_with_positions() {
    let source = "x := 1";
    let run = capture(source, |out, em| lex_source(source, out, em));
    assert!(run.ok);
    let lines: Vec<&str> = run.out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "1:1     identifier `x`",
            "1:3     `:=`",
            "1:6     number `1`",
            "1:7     end of input `#`",
        ]
    );
    assert!(run.err.is_empty());
}

#[test]
fn lex_reports_recovered_errors() {
    let source = "a ? b";
    let run = capture(source, |out, em| lex_source(source, out, em));
    assert!(!run.ok);
    assert_eq!(run.out.lines().count(), 3);
    assert!(run.err.contains("warning[E0001]: unrecognized character `?`"));
    assert!(run.err.contains("1 warning emitted"));
}

#[test]
fn parse_accepts() {
    let source = "id + id * id #";
    let run = capture(source, |out, em| {
        parse_source(source, ParseMode::Strict, out, em)
    });
    assert!(run.ok);
    assert_eq!(run.out, "accepted\n");
    assert!(run.err.is_empty());
}

#[test]
fn parse_rejects_with_diagnostic() {
    let source = "id +++ id #";
    let run = capture(source, |out, em| {
        parse_source(source, ParseMode::Strict, out, em)
    });
    assert!(!run.ok);
    assert_eq!(run.out, "rejected\n");
    assert!(run.err.contains("error[E1002]: no production for `T` on `+`"));
    assert!(run.err.contains("--> 1:5"));
    assert!(run.err.contains("aborting due to previous error"));
}

#[test]
fn lenient_parse_reports_every_error() {
    let source = "id +++ id #";
    let run = capture(source, |out, em| {
        parse_source(source, ParseMode::Recover, out, em)
    });
    assert!(!run.ok);
    assert_eq!(run.err.matches("error[E1002]").count(), 2);
}

#[test]
fn symtab_prints_table() {
    let source = "id1:real; id2:ptr integer; id3:integer;";
    let run = capture(source, |out, em| symtab_source(source, out, em));
    assert!(run.ok);
    assert!(run.out.contains("id2   pointer(integer)  8"));
    assert!(run.out.ends_with("width 16\n"));
}

#[test]
fn symtab_reports_semantic_error() {
    let source = "a: real; b real";
    let run = capture(source, |out, em| symtab_source(source, out, em));
    assert!(!run.ok);
    assert!(run.out.is_empty());
    assert!(run.err.contains("error[E2002]: expected `:` after `b`"));
}

#[test]
fn table_prints_grammar_and_grid() {
    let run = capture("", |out, _| print_table(out));
    assert!(run.ok);
    assert!(run.out.starts_with("E -> T E2\n"));
    assert!(run.out.contains("F -> ( E )"));
    assert!(run.out.lines().any(|l| l.starts_with("T2 |")));
}

#[test]
fn inline_input_is_returned_verbatim() {
    let input = Input::Inline("id #".into());
    assert_eq!(read_input(&input).ok(), Some("id #".to_string()));
}

#[test]
fn missing_file_is_a_read_error() {
    let input = Input::File("/nonexistent/tabula/input.tb".into());
    assert!(matches!(read_input(&input), Err(DriverError::Read { .. })));
}
