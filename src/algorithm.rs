//! Named algorithms and the commutator notation parser.
//!
//! Blindfold methods write corner and edge cycles as commutators with an
//! optional setup, `[S: [A, B]]`, meaning `S A B A' B' S'`. A plain
//! algorithm is just a move string.

use std::fmt;

use log::debug;

use crate::error::{NotationError, Result};
use crate::inverse::reverse_sequence;
use crate::moves::{tokenize_part, Move};

/// The role a run of moves plays inside an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Setup,
    Insert,
    Interchange,
    Normal,
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PartKind::Setup => "setup",
            PartKind::Insert => "insert",
            PartKind::Interchange => "interchange",
            PartKind::Normal => "Normal",
        })
    }
}

/// A labelled run of notation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmPart {
    pub kind: PartKind,
    pub moves: String,
}

impl AlgorithmPart {
    fn new(kind: PartKind, moves: &str) -> Self {
        Self {
            kind,
            moves: moves.to_string(),
        }
    }
}

/// A parsed algorithm. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Algorithm {
    name: String,
    notation: String,
    commutator: bool,
    parts: Vec<AlgorithmPart>,
    moves: Vec<Move>,
}

impl Algorithm {
    /// Parses `notation` and expands it into moves.
    ///
    /// Every token is validated here, so a constructed algorithm always
    /// yields a well-formed move sequence.
    pub fn new(name: &str, notation: &str, commutator: bool) -> Result<Self> {
        let parts = if commutator {
            parse_commutator(notation)?
        } else {
            vec![AlgorithmPart::new(PartKind::Normal, notation)]
        };
        let moves = expand(&parts, commutator)?;

        debug!(
            "parsed algorithm {name:?}: {} part(s), {} move(s)",
            parts.len(),
            moves.len()
        );

        Ok(Self {
            name: name.to_string(),
            notation: notation.to_string(),
            commutator,
            parts,
            moves,
        })
    }

    /// Treats notation starting with `[` as a commutator.
    pub fn detect(name: &str, notation: &str) -> Result<Self> {
        let commutator = notation.trim_start().starts_with('[');
        Self::new(name, notation, commutator)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notation(&self) -> &str {
        &self.notation
    }

    pub fn is_commutator(&self) -> bool {
        self.commutator
    }

    pub fn parts(&self) -> &[AlgorithmPart] {
        &self.parts
    }

    /// Returns a fresh copy of the realized move sequence.
    pub fn get_moves(&self) -> Vec<Move> {
        self.moves.clone()
    }
}

/// Parses `[setup: [A, B]]`, `[setup: A, B]` or `[A, B]`.
///
/// The shorter of A and B (by raw text length) is the interchange and the
/// other the insert; ties go to insert.
pub fn parse_commutator(notation: &str) -> Result<Vec<AlgorithmPart>> {
    let trimmed = notation.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| NotationError::malformed(notation, "expected `[...]`"))?;

    let mut sections = inner.split(':');
    let first = sections.next().unwrap_or_default();
    let (setup, body) = match (sections.next(), sections.next()) {
        (None, _) => (None, first),
        (Some(body), None) => (Some(first.trim()), body),
        (Some(_), Some(_)) => {
            return Err(NotationError::malformed(notation, "more than one `:`"));
        }
    };

    let body = body.trim();
    let body = body
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(body);
    let (first_half, second_half) = body
        .split_once(',')
        .ok_or_else(|| NotationError::malformed(notation, "missing `,` between parts"))?;
    let (first_half, second_half) = (first_half.trim(), second_half.trim());

    if first_half.is_empty() || second_half.is_empty() {
        return Err(NotationError::malformed(notation, "empty commutator part"));
    }
    if body.contains(['[', ']']) {
        return Err(NotationError::malformed(notation, "nested brackets"));
    }

    let mut parts = Vec::with_capacity(3);
    if let Some(setup) = setup {
        if setup.is_empty() {
            return Err(NotationError::malformed(notation, "empty setup"));
        }
        parts.push(AlgorithmPart::new(PartKind::Setup, setup));
    }

    let (first_kind, second_kind) = if first_half.len() < second_half.len() {
        (PartKind::Interchange, PartKind::Insert)
    } else {
        (PartKind::Insert, PartKind::Interchange)
    };
    parts.push(AlgorithmPart::new(first_kind, first_half));
    parts.push(AlgorithmPart::new(second_kind, second_half));

    Ok(parts)
}

/// Realizes parts into moves: `S A B A' B' S'` for commutators, the single
/// part verbatim otherwise.
fn expand(parts: &[AlgorithmPart], commutator: bool) -> Result<Vec<Move>> {
    if !commutator {
        let mut moves = Vec::new();
        for part in parts {
            moves.extend(tokenize_part(&part.moves, part.kind)?);
        }
        return Ok(moves);
    }

    let setup = parts.iter().find(|part| part.kind == PartKind::Setup);
    let mut halves = parts.iter().filter(|part| part.kind != PartKind::Setup);
    let (Some(a), Some(b)) = (halves.next(), halves.next()) else {
        return Err(NotationError::malformed("", "commutator needs two parts"));
    };

    let mut sequence: Vec<(String, PartKind)> = Vec::with_capacity(6);
    if let Some(setup) = setup {
        sequence.push((setup.moves.clone(), setup.kind));
    }
    sequence.push((a.moves.clone(), a.kind));
    sequence.push((b.moves.clone(), b.kind));
    sequence.push((reverse_sequence(&a.moves), a.kind));
    sequence.push((reverse_sequence(&b.moves), b.kind));
    if let Some(setup) = setup {
        sequence.push((reverse_sequence(&setup.moves), setup.kind));
    }

    let mut moves = Vec::new();
    for (text, kind) in &sequence {
        moves.extend(tokenize_part(text, *kind)?);
    }
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::tokenize;

    fn notation(moves: &[Move]) -> String {
        moves
            .iter()
            .map(Move::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_parse_setup_commutator() {
        let alg = Algorithm::new("test", "[R U R' : [U, R2]]", true).unwrap();
        assert_eq!(
            alg.parts(),
            [
                AlgorithmPart::new(PartKind::Setup, "R U R'"),
                AlgorithmPart::new(PartKind::Interchange, "U"),
                AlgorithmPart::new(PartKind::Insert, "R2"),
            ]
        );
    }

    #[test]
    fn test_expand_setup_commutator() {
        let alg = Algorithm::new("test", "[R U R' : [U, R2]]", true).unwrap();
        assert_eq!(notation(&alg.get_moves()), "R U R' U R2 U' R2 R U' R'");
    }

    #[test]
    fn test_expand_without_setup() {
        let alg = Algorithm::new("test", "[R, U]", true).unwrap();
        assert_eq!(alg.parts().len(), 2);
        assert_eq!(notation(&alg.get_moves()), "R U R' U'");
    }

    #[test]
    fn test_setup_without_inner_brackets() {
        let bracketed = Algorithm::new("a", "[D: [R U R', D']]", true).unwrap();
        let bare = Algorithm::new("b", "[D: R U R', D']", true).unwrap();
        assert_eq!(bracketed.get_moves(), bare.get_moves());
    }

    #[test]
    fn test_commutator_identity() {
        let (s, a, b) = ("D", "R' U' R", "D'");
        let alg = Algorithm::new("test", &format!("[{s}: [{a}, {b}]]"), true).unwrap();

        let expected: Vec<Move> = [
            s.to_string(),
            a.to_string(),
            b.to_string(),
            reverse_sequence(a),
            reverse_sequence(b),
            reverse_sequence(s),
        ]
        .iter()
        .flat_map(|text| tokenize(text).unwrap())
        .collect();

        let realized: Vec<Move> = alg
            .get_moves()
            .into_iter()
            .map(|mut mv| {
                mv.part = None;
                mv
            })
            .collect();
        assert_eq!(realized, expected);
    }

    #[test]
    fn test_moves_carry_part_labels() {
        let alg = Algorithm::new("test", "[D: [R U R', D']]", true).unwrap();
        let kinds: Vec<PartKind> = alg.get_moves().iter().filter_map(|mv| mv.part).collect();
        use PartKind::*;
        assert_eq!(
            kinds,
            [
                Setup, Insert, Insert, Insert, Interchange, Insert, Insert, Insert, Interchange,
                Setup
            ]
        );
    }

    #[test]
    fn test_equal_lengths_go_to_insert_first() {
        let parts = parse_commutator("[R, U]").unwrap();
        assert_eq!(parts[0].kind, PartKind::Insert);
        assert_eq!(parts[1].kind, PartKind::Interchange);
    }

    #[test]
    fn test_plain_algorithm() {
        let alg = Algorithm::new("sexy", "R U R' U'", false).unwrap();
        assert!(!alg.is_commutator());
        assert_eq!(
            alg.parts(),
            [AlgorithmPart::new(PartKind::Normal, "R U R' U'")]
        );
        assert_eq!(notation(&alg.get_moves()), "R U R' U'");
        assert!(alg
            .get_moves()
            .iter()
            .all(|mv| mv.part == Some(PartKind::Normal)));
    }

    #[test]
    fn test_get_moves_is_repeatable() {
        let alg = Algorithm::new("test", "[R U R' : [U, R2]]", true).unwrap();
        assert_eq!(alg.get_moves(), alg.get_moves());
    }

    #[test]
    fn test_rejects_missing_brackets() {
        for text in ["R, U", "[R, U", "R, U]", ""] {
            assert!(
                matches!(
                    Algorithm::new("bad", text, true),
                    Err(NotationError::MalformedNotation { .. })
                ),
                "{text:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_rejects_malformed_bodies() {
        for text in ["[R U]", "[A: B: C, D]", "[R, ]", "[ : [R, U]]", "[R: [U, [D, F]]]"] {
            assert!(
                matches!(
                    parse_commutator(text),
                    Err(NotationError::MalformedNotation { .. })
                ),
                "{text:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_invalid_tokens_surface_at_construction() {
        assert!(matches!(
            Algorithm::new("bad", "[R, Q]", true),
            Err(NotationError::InvalidToken { face: 'Q', .. })
        ));
        assert!(matches!(
            Algorithm::new("bad", "R K", false),
            Err(NotationError::InvalidToken { face: 'K', .. })
        ));
    }

    #[test]
    fn test_detect() {
        assert!(Algorithm::detect("c", " [R, U]").unwrap().is_commutator());
        assert!(!Algorithm::detect("p", "R U").unwrap().is_commutator());
    }
}
