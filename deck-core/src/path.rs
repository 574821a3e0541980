//! Suit glyph paths — a constrained path grammar and its flattener.
//!
//! Grammar (absolute coordinates only, commas or whitespace between
//! tokens):
//!
//! ```text
//! M x y                     start a subpath
//! L x y                     straight segment
//! C x1 y1 x2 y2 x3 y3       cubic Bezier from the current point
//! Z                         close the subpath
//! ```
//!
//! Parsing produces an immutable [`Path`]. [`Path::flatten`] turns it into
//! closed [`Polygon`] rings, sampling every cubic at a fixed count so the
//! output is identical for identical input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Point, Rect};

/// Line segments emitted per cubic when the session does not override it.
pub const DEFAULT_CURVE_SAMPLES: usize = 20;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unsupported path command {token:?} at byte {position}")]
    UnsupportedCommand { token: String, position: usize },
    #[error("unexpected character {found:?} at byte {position}")]
    UnexpectedCharacter { found: char, position: usize },
    #[error("malformed number {token:?} at byte {position}")]
    InvalidNumber { token: String, position: usize },
    #[error("expected a command letter, found {token:?} at byte {position}")]
    ExpectedCommand { token: String, position: usize },
    #[error("command {command} at byte {position} takes {expected} numbers, found {found}")]
    MissingArguments {
        command: char,
        position: usize,
        expected: usize,
        found: usize,
    },
}

// ── Data model ──────────────────────────────────────────────────────

/// Dimensions of the coordinate space a path was authored in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub width: f32,
    pub height: f32,
}

impl ViewBox {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The longer side; the rasterizer scales against it.
    pub fn max_side(&self) -> f32 {
        self.width.max(self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, end: Point },
    ClosePath,
}

/// A parsed path plus the viewbox it was authored against.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
    viewbox: ViewBox,
}

/// A closed ring of points in viewbox space. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounds of the ring.
    pub fn bounds(&self) -> Rect {
        let mut min = Point::new(f32::INFINITY, f32::INFINITY);
        let mut max = Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        for p in &self.points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

// ── Parsing ─────────────────────────────────────────────────────────

impl Path {
    /// Parse path text. Fails on the first malformed token; no recovery.
    pub fn parse(text: &str, viewbox: ViewBox) -> Result<Self, ParseError> {
        let tokens = tokenize(text)?;
        let mut commands = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];
            i += 1;

            let letter = match token.kind {
                TokenKind::Command(c) => c,
                TokenKind::Number(_) => {
                    return Err(ParseError::ExpectedCommand {
                        token: token.text.to_string(),
                        position: token.position,
                    })
                }
            };

            let arity = match letter {
                'M' | 'L' => 2,
                'C' => 6,
                'Z' => 0,
                _ => {
                    return Err(ParseError::UnsupportedCommand {
                        token: token.text.to_string(),
                        position: token.position,
                    })
                }
            };

            let args = take_numbers(&tokens, &mut i, letter, token.position, arity)?;
            commands.push(match letter {
                'M' => PathCommand::MoveTo(Point::new(args[0], args[1])),
                'L' => PathCommand::LineTo(Point::new(args[0], args[1])),
                'C' => PathCommand::CubicTo {
                    c1: Point::new(args[0], args[1]),
                    c2: Point::new(args[2], args[3]),
                    end: Point::new(args[4], args[5]),
                },
                _ => PathCommand::ClosePath,
            });
        }

        Ok(Self { commands, viewbox })
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn viewbox(&self) -> ViewBox {
        self.viewbox
    }

    /// Flatten into closed rings.
    ///
    /// Every `C` contributes exactly `samples_per_curve` points, the
    /// curve evaluated at t = 1/N … N/N (clamped to N ≥ 1). Before the
    /// first `M` the pen sits at the origin; `Z` leaves it where it was.
    pub fn flatten(&self, samples_per_curve: usize) -> Vec<Polygon> {
        let samples = samples_per_curve.max(1);
        let mut rings = Vec::new();
        let mut ring: Vec<Point> = Vec::new();
        let mut pen = Point::ORIGIN;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    finish_ring(&mut rings, &mut ring);
                    ring.push(p);
                    pen = p;
                }
                PathCommand::LineTo(p) => {
                    ring.push(p);
                    pen = p;
                }
                PathCommand::CubicTo { c1, c2, end } => {
                    for step in 1..=samples {
                        let t = step as f32 / samples as f32;
                        ring.push(cubic_point(pen, c1, c2, end, t));
                    }
                    pen = end;
                }
                PathCommand::ClosePath => finish_ring(&mut rings, &mut ring),
            }
        }
        finish_ring(&mut rings, &mut ring);

        rings
    }
}

/// `B(t) = (1-t)^3 P0 + 3(1-t)^2 t P1 + 3(1-t) t^2 P2 + t^3 P3`
#[inline]
pub fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

fn finish_ring(rings: &mut Vec<Polygon>, ring: &mut Vec<Point>) {
    if !ring.is_empty() {
        rings.push(Polygon {
            points: std::mem::take(ring),
        });
    }
}

fn take_numbers(
    tokens: &[Token<'_>],
    i: &mut usize,
    command: char,
    position: usize,
    expected: usize,
) -> Result<Vec<f32>, ParseError> {
    let mut args = Vec::with_capacity(expected);
    while args.len() < expected {
        match tokens.get(*i).map(|t| t.kind) {
            Some(TokenKind::Number(v)) => {
                args.push(v);
                *i += 1;
            }
            _ => {
                return Err(ParseError::MissingArguments {
                    command,
                    position,
                    expected,
                    found: args.len(),
                })
            }
        }
    }
    Ok(args)
}

// ── Tokenizer ───────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
enum TokenKind {
    Command(char),
    Number(f32),
}

#[derive(Clone, Copy, Debug)]
struct Token<'a> {
    kind: TokenKind,
    text: &'a str,
    /// Byte offset in the source text.
    position: usize,
}

fn tokenize(text: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_whitespace() || b == b',' {
            i += 1;
        } else if b.is_ascii_alphabetic() {
            tokens.push(Token {
                kind: TokenKind::Command(b as char),
                text: &text[i..i + 1],
                position: i,
            });
            i += 1;
        } else if b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.') {
            let start = i;
            if matches!(b, b'-' | b'+') {
                i += 1;
            }
            let mut digits = 0;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
                digits += 1;
            }
            if i < bytes.len() && bytes[i] == b'.' {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                    digits += 1;
                }
            }
            let slice = &text[start..i];
            let value = if digits == 0 { None } else { slice.parse::<f32>().ok() };
            match value {
                Some(v) => tokens.push(Token {
                    kind: TokenKind::Number(v),
                    text: slice,
                    position: start,
                }),
                None => {
                    return Err(ParseError::InvalidNumber {
                        token: slice.to_string(),
                        position: start,
                    })
                }
            }
        } else {
            // Report the full char, not the leading UTF-8 byte.
            let found = text[i..].chars().next().unwrap_or('\u{fffd}');
            return Err(ParseError::UnexpectedCharacter { found, position: i });
        }
    }

    Ok(tokens)
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWBOX: ViewBox = ViewBox::new(100.0, 130.0);

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn test_parse_commands() {
        let path = Path::parse("M50,10 L90,65 C1 2 3 4 5 6 Z", VIEWBOX).unwrap();
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(50.0, 10.0)),
                PathCommand::LineTo(Point::new(90.0, 65.0)),
                PathCommand::CubicTo {
                    c1: Point::new(1.0, 2.0),
                    c2: Point::new(3.0, 4.0),
                    end: Point::new(5.0, 6.0),
                },
                PathCommand::ClosePath,
            ]
        );
        assert_eq!(path.viewbox(), VIEWBOX);
    }

    #[test]
    fn test_parse_negative_and_decimal() {
        let path = Path::parse("M-1.5,2.25 L3-4", VIEWBOX).unwrap();
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(-1.5, 2.25)));
        assert_eq!(path.commands()[1], PathCommand::LineTo(Point::new(3.0, -4.0)));
    }

    #[test]
    fn test_line_polygon() {
        let path = Path::parse("M50,10 L90,65 L50,120 L10,65 Z", VIEWBOX).unwrap();
        let rings = path.flatten(DEFAULT_CURVE_SAMPLES);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 4);
        assert_eq!(rings[0].points()[2], Point::new(50.0, 120.0));
    }

    #[test]
    fn test_cubic_contributes_sample_count_points() {
        let path = Path::parse("M0,0 C10,0 20,10 30,30", VIEWBOX).unwrap();
        for samples in [1, 7, 20] {
            let rings = path.flatten(samples);
            assert_eq!(rings.len(), 1);
            // Start point plus one point per sample.
            assert_eq!(rings[0].len(), 1 + samples);
        }
    }

    #[test]
    fn test_first_sample_is_bezier_at_one_over_n() {
        let p0 = Point::new(5.0, 75.0);
        let c1 = Point::new(5.0, 40.0);
        let c2 = Point::new(50.0, 10.0);
        let end = Point::new(50.0, 10.0);
        let path = Path::parse("M5,75 C5,40 50,10 50,10", VIEWBOX).unwrap();
        let rings = path.flatten(20);
        let pts = rings[0].points();
        assert_eq!(pts[0], p0);
        assert!(approx(pts[1], cubic_point(p0, c1, c2, end, 1.0 / 20.0)));
        assert!(!approx(pts[1], p0));
        assert!(approx(*pts.last().unwrap(), end));
    }

    #[test]
    fn test_move_closes_open_subpath() {
        let path = Path::parse("M0,0 L10,0 L10,10 M20,20 L30,20 L30,30 Z", VIEWBOX).unwrap();
        let rings = path.flatten(DEFAULT_CURVE_SAMPLES);
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0].len(), 3);
        assert_eq!(rings[1].points()[0], Point::new(20.0, 20.0));
    }

    #[test]
    fn test_trailing_open_subpath_is_emitted() {
        let path = Path::parse("M0,0 L10,0 L10,10", VIEWBOX).unwrap();
        assert_eq!(path.flatten(DEFAULT_CURVE_SAMPLES).len(), 1);
    }

    #[test]
    fn test_close_without_points_emits_nothing() {
        let path = Path::parse("Z Z", VIEWBOX).unwrap();
        assert!(path.flatten(DEFAULT_CURVE_SAMPLES).is_empty());
    }

    #[test]
    fn test_cubic_before_move_starts_at_origin() {
        let path = Path::parse("C0,0 0,0 0,0", VIEWBOX).unwrap();
        let rings = path.flatten(4);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 4);
        assert!(rings[0].points().iter().all(|p| *p == Point::ORIGIN));
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let text = "M50,30 C50,30 90,0 95,35 C98,55 50,95 50,95 Z";
        let a = Path::parse(text, VIEWBOX).unwrap().flatten(20);
        let b = Path::parse(text, VIEWBOX).unwrap().flatten(20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unsupported_command() {
        let err = Path::parse("M0,0 Q1,1 2,2", VIEWBOX).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnsupportedCommand {
                token: "Q".into(),
                position: 5
            }
        );
        assert!(err.to_string().contains("\"Q\""));
    }

    #[test]
    fn test_lowercase_is_unsupported() {
        let err = Path::parse("m0,0", VIEWBOX).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedCommand { position: 0, .. }));
    }

    #[test]
    fn test_missing_arguments() {
        let err = Path::parse("M0,0 C1,1 2,2 Z", VIEWBOX).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingArguments {
                command: 'C',
                position: 5,
                expected: 6,
                found: 4
            }
        );
    }

    #[test]
    fn test_stray_number() {
        let err = Path::parse("M0,0 5", VIEWBOX).unwrap_err();
        assert_eq!(
            err,
            ParseError::ExpectedCommand {
                token: "5".into(),
                position: 5
            }
        );
    }

    #[test]
    fn test_bad_number_and_character() {
        assert!(matches!(
            Path::parse("M-,0", VIEWBOX),
            Err(ParseError::InvalidNumber { position: 1, .. })
        ));
        assert!(matches!(
            Path::parse("M0;0", VIEWBOX),
            Err(ParseError::UnexpectedCharacter { found: ';', position: 2 })
        ));
    }

    #[test]
    fn test_polygon_bounds() {
        let path = Path::parse("M50,10 L90,65 L50,120 L10,65 Z", VIEWBOX).unwrap();
        let bounds = path.flatten(DEFAULT_CURVE_SAMPLES)[0].bounds();
        assert_eq!(bounds, Rect::new(10.0, 10.0, 80.0, 110.0));
    }
}
