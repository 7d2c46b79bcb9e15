// Integration tests for the MiniC scanner

use minic::parser::{tokenize, LexWarning, Scanner, SourcePos, Token, TokenKind};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn test_spaced_spellings_round_trip_kinds() {
    let table = [
        ("void", TokenKind::Void),
        ("int", TokenKind::Int),
        ("bool", TokenKind::Bool),
        ("float", TokenKind::Float),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("while", TokenKind::While),
        ("for", TokenKind::For),
        ("return", TokenKind::Return),
        ("42", TokenKind::IntLiteral),
        ("4.25", TokenKind::FloatLiteral),
        (".5e-3", TokenKind::FloatLiteral),
        ("7.", TokenKind::FloatLiteral),
        ("true", TokenKind::BoolLiteral),
        ("false", TokenKind::BoolLiteral),
        ("\"text\"", TokenKind::StringLiteral),
        ("count_1", TokenKind::Id),
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Times),
        ("/", TokenKind::Div),
        ("=", TokenKind::Assign),
        ("==", TokenKind::Eq),
        ("!=", TokenKind::NotEq),
        ("<", TokenKind::Less),
        ("<=", TokenKind::LessEq),
        (">", TokenKind::Greater),
        (">=", TokenKind::GreaterEq),
        ("&&", TokenKind::And),
        ("||", TokenKind::Or),
        ("!", TokenKind::Not),
        ("{", TokenKind::LeftBrace),
        ("}", TokenKind::RightBrace),
        ("[", TokenKind::LeftBracket),
        ("]", TokenKind::RightBracket),
        ("(", TokenKind::LeftParen),
        (")", TokenKind::RightParen),
        (",", TokenKind::Comma),
        (";", TokenKind::Semicolon),
    ];

    let source = table.iter().map(|(s, _)| *s).collect::<Vec<_>>().join(" ");
    let mut expected: Vec<TokenKind> = table.iter().map(|(_, k)| *k).collect();
    expected.push(TokenKind::Eof);

    let (tokens, warnings) = tokenize(&source);
    assert_eq!(kinds(&tokens), expected);
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[test]
fn test_numeric_literals() {
    let (tokens, _) = tokenize("123 123.45 123e5 1.5E+2");
    assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[1].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[1].lexeme, "123.45");
    assert_eq!(tokens[2].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[2].lexeme, "123e5");
    assert_eq!(tokens[3].lexeme, "1.5E+2");
}

#[test]
fn test_dangling_exponent_rolls_back() {
    let (tokens, warnings) = tokenize("123e");
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::FloatLiteral, TokenKind::Id, TokenKind::Eof]
    );
    assert_eq!(tokens[0].lexeme, "123");
    assert_eq!(tokens[0].pos, SourcePos::new(1, 1, 1, 4));
    assert_eq!(tokens[1].lexeme, "e");
    assert_eq!(tokens[1].pos, SourcePos::new(1, 4, 1, 5));
    assert!(warnings.is_empty());

    let (tokens, warnings) = tokenize("123e+");
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::FloatLiteral, TokenKind::Id, TokenKind::Plus, TokenKind::Eof]
    );
    assert_eq!(tokens[0].lexeme, "123");
    assert!(warnings.is_empty());
}

#[test]
fn test_comments_are_elided() {
    let (with_comment, _) = tokenize("1/*c*/+2");
    let (plain, _) = tokenize("1+2");
    assert_eq!(kinds(&with_comment), kinds(&plain));
    assert_eq!(with_comment[2].lexeme, "2");

    let (tokens, _) = tokenize("1/*\n\n*/+2");
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[1].pos.start_line, 3);

    let (tokens, _) = tokenize("x // trailing comment");
    assert_eq!(kinds(&tokens), vec![TokenKind::Id, TokenKind::Eof]);
}

#[test]
fn test_comment_needs_its_own_closing_star() {
    let (tokens, warnings) = tokenize("/*/ still comment */ y");
    assert_eq!(kinds(&tokens), vec![TokenKind::Id, TokenKind::Eof]);
    assert_eq!(tokens[0].lexeme, "y");
    assert!(warnings.is_empty());
}

#[test]
fn test_unterminated_comment_warns() {
    let (tokens, warnings) = tokenize("int /* never closed");
    assert_eq!(kinds(&tokens), vec![TokenKind::Int, TokenKind::Eof]);
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], LexWarning::UnterminatedComment { .. }));
}

#[test]
fn test_string_literals() {
    let (tokens, warnings) = tokenize("\"a\\nb\"");
    assert_eq!(kinds(&tokens), vec![TokenKind::StringLiteral, TokenKind::Eof]);
    assert_eq!(tokens[0].lexeme, "a\\nb");
    assert!(warnings.is_empty());

    let (tokens, warnings) = tokenize("\"a\nb");
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].lexeme, "a");
    assert_eq!(tokens[1].kind, TokenKind::Id);
    assert_eq!(tokens[1].pos, SourcePos::new(2, 1, 2, 2));
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], LexWarning::UnterminatedString { .. }));
}

#[test]
fn test_illegal_escape_is_kept_and_warned() {
    let (tokens, warnings) = tokenize("\"\\q\"");
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].lexeme, "\\q");
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], LexWarning::IllegalEscape { ch: 'q', .. }));
}

#[test]
fn test_backslash_newline_continues_string() {
    let (tokens, warnings) = tokenize("\"a\\\nb\" x");
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::StringLiteral, TokenKind::Id, TokenKind::Eof]
    );
    assert_eq!(tokens[0].lexeme, "a\\\nb");
    assert_eq!(tokens[1].lexeme, "x");
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], LexWarning::IllegalEscape { ch: '\n', .. }));
}

#[test]
fn test_error_tokens() {
    let (tokens, _) = tokenize("a & b @ .");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Id,
            TokenKind::Error,
            TokenKind::Id,
            TokenKind::Error,
            TokenKind::Error,
            TokenKind::Eof
        ]
    );
    assert_eq!(tokens[1].lexeme, "&");
    assert_eq!(tokens[3].lexeme, "@");
}

#[test]
fn test_maximal_munch() {
    let (tokens, _) = tokenize("<= < = !x ||");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::LessEq,
            TokenKind::Less,
            TokenKind::Assign,
            TokenKind::Not,
            TokenKind::Id,
            TokenKind::Or,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_positions_track_lines_and_columns() {
    let (tokens, _) = tokenize("int\n  x;");
    assert_eq!(tokens[0].pos, SourcePos::new(1, 1, 1, 4));
    assert_eq!(tokens[1].pos, SourcePos::new(2, 3, 2, 4));
    assert_eq!(tokens[2].pos, SourcePos::new(2, 4, 2, 5));
}

#[test]
fn test_eof_repeats() {
    let mut scanner = Scanner::from_text("x");
    assert_eq!(scanner.scan().kind, TokenKind::Id);
    assert_eq!(scanner.scan().kind, TokenKind::Eof);
    assert_eq!(scanner.scan().kind, TokenKind::Eof);
}
