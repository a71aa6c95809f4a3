//! Shared PGN fixtures for the integration tests.

#![allow(dead_code)]

pub const LITERAL_SCENARIO: &str = "[Event \"Test Game\"]\n[White \"Player1\"]\n[Black \"Player2\"]\n[Result \"1-0\"]\n\n1. e4 e5 2. Nf3 Nc6 3. Bb5 a6 1-0";

pub const HEADERS_ONLY: &str = "[Event \"Test\"]\n[White \"P1\"]\n[Black \"P2\"]";

/// Opera game, Morphy vs. Duke of Brunswick and Count Isouard, Paris 1858.
pub const OPERA_GAME: &str = r#"[Event "Paris Opera"]
[Site "Paris FRA"]
[Date "1858.??.??"]
[White "Paul Morphy"]
[Black "Duke Karl / Count Isouard"]
[Result "1-0"]
[ECO "C41"]

1. e4 e5 2. Nf3 d6 3. d4 Bg4 {This is a weak move already.} 4. dxe5 Bxf3
5. Qxf3 dxe5 6. Bc4 Nf6 7. Qb3 Qe7 8. Nc3 c6 9. Bg5 b5 10. Nxb5 cxb5
11. Bxb5+ Nbd7 12. O-O-O Rd8 13. Rxd7 Rxd7 14. Rd1 Qe6 15. Bxd7+ Nxd7
16. Qb8+ Nxb8 17. Rd8# 1-0
"#;

/// Annotated game with comments, a semicolon comment, NAG and side lines.
pub const ANNOTATED: &str = "[Event \"Annotated\"]\r\n[White \"W\"]\r\n[Black \"B\"]\r\n\r\n1. e4 $1 {king pawn} c5 (1... e5 2. Nf3) 2. Nf3 ; Open Sicilian next\r\n2... d6 3. d4 cxd4 4. Nxd4 Nf6 5. Nc3 a6 *\r\n";

/// Fool's mate with an over-disambiguated queen move.
pub const SLOPPY_SAN: &str = "[Event \"Sloppy\"]\n\n1. f3 e5 2. g4 Qd8h4 0-1";

/// An unterminated tag ahead of the movetext; only the movetext-only strategy
/// gets past it.
pub const BROKEN_TAGS: &str = "[Event \"Broken\n[White \"W\"]\n1. d4 d5 2. c4 e6 *";

/// Inputs used for the invariant checks: every entry must either parse or
/// fail with a classified error.
pub fn corpus() -> Vec<&'static str> {
    vec![
        LITERAL_SCENARIO,
        HEADERS_ONLY,
        OPERA_GAME,
        ANNOTATED,
        SLOPPY_SAN,
        BROKEN_TAGS,
        "",
        "   \n\t ",
        "1. e4 e5 2. Nf3 1-0",
        "[Event \"Test\"]\n1. e4 {good move} e5 2. Nf3 1-0",
        "1. e4 e5 2. Ke3 *",
        "this is not a chess game",
        "{only a comment}",
        "1. e4 (1. d4 (1. c4) d5) e5 *",
        "1. f3 e5 2. g4 Qh4# 0-1",
        "1. e4 d5 2. exd5 Qxd5 3. Nc3 Qa5 4. d4 c6 5. Nf3 Bf5 6. Bc4 e6 7. Bd2 Qc7 8. Qe2 Nf6 9. O-O-O *",
        "1. e4 a6 2. e5 d5 3. exd6 cxd6 *",
        "1. h4 g5 2. hxg5 h6 3. gxh6 Nf6 4. h7 Ng8 5. hxg8=Q *",
    ]
}
