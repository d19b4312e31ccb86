//! Holding locator: consonant clusters marked for extended articulation.
//!
//! Runs over normalized IAST. A cluster is the run of consonant units
//! reachable from a consonant by skipping whitespace, tone marks and the
//! pause glyph; any vowel or other letter ends it. The holding kind follows
//! the vowel before the cluster.

use tracing::{debug, debug_span, trace};

use crate::classify::{
    classify_at, classify_consonant, classify_mark_before, classify_vowel_before, is_transparent,
    Unit,
};
use crate::settings::{settings, HoldingSettings};
use crate::span::{AnnotationSpan, SpanKind};

/// Locate holdings using the global settings.
pub fn find_all_holdings(text: &str) -> Vec<AnnotationSpan> {
    find_all_holdings_with(text, &settings().holding)
}

/// Locate holdings in `text`.
///
/// Spans come back in discovery order, which is ascending. Callers that
/// edit the text while applying them should first reorder with
/// [`crate::span::sort_for_application`].
pub fn find_all_holdings_with(text: &str, opts: &HoldingSettings) -> Vec<AnnotationSpan> {
    let _span = debug_span!("find_all_holdings", bytes = text.len()).entered();

    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if classify_consonant(&chars, i).is_none() {
            i += classify_at(&chars, i).map_or(1, |u| u.width);
            continue;
        }
        let cluster = Cluster::collect(&chars, i);
        if let Some(span) = cluster.holding(&chars, opts) {
            trace!(position = span.position, kind = span.kind.as_str(), "holding");
            spans.push(span);
        }
        i = cluster.end;
    }

    debug!(holding_count = spans.len());
    spans
}

#[derive(Debug, Clone, Copy)]
struct Member {
    pos: usize,
    unit: Unit,
    /// Whitespace separates this consonant from the previous member.
    after_space: bool,
}

impl Member {
    fn span(&self, kind: SpanKind) -> AnnotationSpan {
        AnnotationSpan::holding(self.pos, self.unit.width, kind)
    }
}

struct Cluster {
    members: Vec<Member>,
    /// One past the last consonant of the cluster.
    end: usize,
}

impl Cluster {
    fn collect(chars: &[char], start: usize) -> Self {
        let mut members = Vec::new();
        let mut end = start;
        let mut after_space = false;
        let mut i = start;
        while i < chars.len() {
            let c = chars[i];
            if is_transparent(c) {
                i += 1;
                continue;
            }
            if c.is_whitespace() {
                after_space = true;
                i += 1;
                continue;
            }
            let Some(unit) = classify_consonant(chars, i) else {
                break;
            };
            members.push(Member {
                pos: i,
                unit,
                after_space,
            });
            after_space = false;
            i += unit.width;
            end = i;
        }
        Self { members, end }
    }

    fn holding(&self, chars: &[char], opts: &HoldingSettings) -> Option<AnnotationSpan> {
        if self.members.len() < 2 {
            return None;
        }
        let first = &self.members[0];
        let kind = match look_back(chars, first.pos, opts) {
            Preceding::Boundary => return Some(first.span(SpanKind::Short)),
            Preceding::Vowel { long: true } => SpanKind::Long,
            Preceding::Vowel { long: false } | Preceding::Mark => SpanKind::Short,
        };
        self.placement().map(|m| m.span(kind))
    }

    fn placement(&self) -> Option<&Member> {
        if let Some(k) = self.members.iter().position(|m| m.after_space) {
            // Dvirvacana: a consonant doubled across the word boundary is
            // held on its first-word instance.
            let (last, next) = (&self.members[k - 1], &self.members[k]);
            return Some(if last.unit.text == next.unit.text {
                last
            } else {
                next
            });
        }
        self.members.iter().find(|m| !m.unit.is_skip_consonant())
    }
}

enum Preceding {
    Boundary,
    Vowel { long: bool },
    Mark,
}

fn look_back(chars: &[char], pos: usize, opts: &HoldingSettings) -> Preceding {
    let mut end = pos;
    while end > 0 {
        let c = chars[end - 1];
        if is_transparent(c) {
            end -= 1;
            continue;
        }
        if c.is_whitespace() {
            if opts.word_boundary_lookback {
                return Preceding::Boundary;
            }
            end -= 1;
            continue;
        }
        if let Some(v) = classify_vowel_before(chars, end) {
            return Preceding::Vowel {
                long: v.is_long_vowel(),
            };
        }
        if classify_mark_before(chars, end).is_some() {
            return Preceding::Mark;
        }
        return Preceding::Boundary;
    }
    Preceding::Boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holdings(text: &str) -> Vec<AnnotationSpan> {
        find_all_holdings_with(text, &HoldingSettings::default())
    }

    fn short(position: usize, length: usize) -> AnnotationSpan {
        AnnotationSpan::holding(position, length, SpanKind::Short)
    }

    fn long(position: usize, length: usize) -> AnnotationSpan {
        AnnotationSpan::holding(position, length, SpanKind::Long)
    }

    #[test]
    fn single_consonants_are_not_held() {
        assert!(holdings("rāma").is_empty());
        assert!(holdings("bhavati").is_empty());
        assert!(holdings("").is_empty());
    }

    #[test]
    fn kind_follows_preceding_vowel() {
        assert_eq!(holdings("ātmā"), vec![long(1, 1)]);
        assert_eq!(holdings("agni"), vec![short(1, 1)]);
        assert_eq!(holdings("putra"), vec![short(2, 1)]);
        assert_eq!(holdings("kautsa"), vec![long(3, 1)]);
    }

    #[test]
    fn aspirate_is_held_at_full_width() {
        assert_eq!(holdings("artha"), vec![short(2, 2)]);
        assert_eq!(holdings("buddha"), vec![short(2, 1)]);
    }

    #[test]
    fn skip_consonants_pass_the_holding_on() {
        assert_eq!(holdings("yajña"), vec![short(2, 1)]);
        assert_eq!(holdings("sarva"), Vec::new());
        assert_eq!(holdings("kṛṣṇa"), Vec::new());
        assert_eq!(holdings("dharma"), Vec::new());
    }

    #[test]
    fn vowel_bearing_mark_gives_short() {
        assert_eq!(holdings("saṁskṛta"), vec![short(4, 1)]);
        assert_eq!(holdings("niḥspṛha"), vec![short(4, 1)]);
    }

    #[test]
    fn word_initial_cluster_holds_first_consonant() {
        assert_eq!(holdings("tvam"), vec![short(0, 1)]);
        assert_eq!(holdings("svāmī"), vec![short(0, 1)]);
        assert_eq!(holdings("rāmā tvam"), vec![short(5, 1)]);
        assert_eq!(holdings("?kva"), vec![short(1, 1)]);
    }

    #[test]
    fn lookback_can_cross_words() {
        let opts = HoldingSettings {
            word_boundary_lookback: false,
        };
        assert_eq!(find_all_holdings_with("rāmā tvam", &opts), vec![long(5, 1)]);
        assert_eq!(find_all_holdings_with("tvam", &opts), vec![short(0, 1)]);
    }

    #[test]
    fn dvirvacana_holds_first_word_instance() {
        assert_eq!(holdings("tat tvam"), vec![short(2, 1)]);
        assert_eq!(holdings("vāk kathā"), vec![long(2, 1)]);
    }

    #[test]
    fn cross_word_cluster_holds_second_word() {
        assert_eq!(holdings("vāk ca"), vec![long(4, 1)]);
        assert_eq!(holdings("tat sat"), vec![short(4, 1)]);
    }

    #[test]
    fn cluster_over_three_words_uses_first_crossing() {
        assert_eq!(holdings("vāk t pa"), vec![long(4, 1)]);
        assert_eq!(holdings("vāk k pa"), vec![long(2, 1)]);
    }

    #[test]
    fn interior_consonants_are_not_reannotated() {
        assert_eq!(holdings("kārtsnya"), vec![long(3, 1)]);
        assert_eq!(holdings("tat tvam asi"), vec![short(2, 1)]);
    }

    #[test]
    fn cluster_ending_the_text() {
        assert_eq!(holdings("śakt"), vec![short(2, 1)]);
        assert_eq!(holdings("vāk"), Vec::new());
    }

    #[test]
    fn tone_marks_and_pause_glyph_are_transparent() {
        assert_eq!(holdings("a\u{0301}gni"), vec![short(2, 1)]);
        assert_eq!(holdings("ag\u{0300}ni"), vec![short(1, 1)]);
        assert_eq!(holdings("tat| tvam"), vec![short(2, 1)]);
        assert_eq!(holdings("ā|tmā"), vec![long(2, 1)]);
    }

    #[test]
    fn candrabindu_is_a_mark_not_a_consonant() {
        assert_eq!(holdings("ham\u{0310}sa"), Vec::new());
        assert_eq!(holdings("am\u{0310}kta"), vec![short(3, 1)]);
    }
}
