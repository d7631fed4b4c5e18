// Rhyme resolution: gives every rhyme group in a poem one concrete ending.
//
// Lines that share a group label must end with the same suffix. For each
// distinct label, in the order the labels first appear, a random word is
// drawn until one has an ending and its final syllable has the stress the
// group needs (the last flag of the first line using the label). Every line
// in the group then targets that word's ending.
//
// Failure here is fatal for the poem: the orchestrator reports
// `PoemError::RhymeExhausted` and launches no line tasks at all.

use stikh_lang::{Dictionary, Ending};
use stikh_prng::VerseRng;
use tracing::{debug, warn};

use crate::config::GenerationConfig;
use crate::error::PoemError;
use crate::template::{LinePlan, LineTarget};

/// Draw a rhyme ending whose final stress equals `polarity`.
///
/// `None` accepts either polarity (a zero-syllable line). Each draw counts
/// against `attempts`, including draws of words with no ending, so this
/// always terminates.
pub fn pick_ending(
    dictionary: &Dictionary,
    polarity: Option<bool>,
    attempts: u32,
    rng: &mut VerseRng,
) -> Option<String> {
    for _ in 0..attempts {
        let token = dictionary.sample(rng);
        if token.ending.is_empty() {
            continue;
        }
        if polarity.is_none_or(|p| token.final_stress() == Some(p)) {
            return Some(token.ending.clone());
        }
    }
    None
}

/// Turn plans into targets, resolving each rhyme group exactly once.
pub fn resolve_rhymes(
    plans: Vec<LinePlan>,
    dictionary: &Dictionary,
    config: &GenerationConfig,
    rng: &mut VerseRng,
) -> Result<Vec<LineTarget>, PoemError> {
    let mut resolved: Vec<(String, String)> = Vec::new();

    for plan in &plans {
        let Some(group) = plan.group.as_deref() else {
            continue;
        };
        if resolved.iter().any(|(g, _)| g == group) {
            continue;
        }
        let polarity = plan.stress.last().copied();
        let Some(suffix) = pick_ending(dictionary, polarity, config.rhyme_attempts, rng) else {
            warn!(group, attempts = config.rhyme_attempts, "no ending found for rhyme group");
            return Err(PoemError::RhymeExhausted {
                group: group.to_string(),
                attempts: config.rhyme_attempts,
            });
        };
        debug!(group, suffix = %suffix, "resolved rhyme group");
        resolved.push((group.to_string(), suffix));
    }

    let targets = plans
        .into_iter()
        .map(|plan| {
            let ending = plan
                .group
                .as_deref()
                .and_then(|group| resolved.iter().find(|(g, _)| g == group))
                .map(|(_, suffix)| Ending::from_suffix(suffix))
                .unwrap_or_default();
            plan.into_target(ending)
        })
        .collect();
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::PoemTemplate;

    fn plans(
        endings: &[&str],
        syllables: Vec<usize>,
        accents: Vec<bool>,
        lines: usize,
    ) -> Vec<LinePlan> {
        let endings = endings.iter().map(|s| s.to_string()).collect();
        PoemTemplate::new(lines, endings, syllables, accents).expand()
    }

    #[test]
    fn test_shared_group_gets_identical_ending() {
        let dict = stikh_lang::sample_dictionary();
        let config = GenerationConfig::default();
        for seed in 0..20 {
            let mut rng = VerseRng::new(seed);
            let targets = resolve_rhymes(
                plans(&["A", "B"], vec![4], vec![false, true], 4),
                &dict,
                &config,
                &mut rng,
            )
            .unwrap();
            assert_eq!(targets[0].ending, targets[2].ending);
            assert_eq!(targets[1].ending, targets[3].ending);
            assert_ne!(targets[0].ending, Ending::Any);
        }
    }

    #[test]
    fn test_ending_has_required_stress() {
        let dict = stikh_lang::sample_dictionary();
        let config = GenerationConfig::default();
        let mut rng = VerseRng::new(8);
        // Feminine group: pattern ends unstressed.
        let targets = resolve_rhymes(
            plans(&["A"], vec![2], vec![true, false], 2),
            &dict,
            &config,
            &mut rng,
        )
        .unwrap();
        let Ending::Exact(suffix) = &targets[0].ending else {
            panic!("expected a concrete ending");
        };
        let owner = dict.all().iter().find(|t| &t.ending == suffix).unwrap();
        assert_eq!(owner.final_stress(), Some(false));
    }

    #[test]
    fn test_wildcard_lines_stay_any() {
        let dict = stikh_lang::sample_dictionary();
        let mut rng = VerseRng::new(1);
        let targets = resolve_rhymes(
            plans(&["", "A"], vec![2], vec![true], 2),
            &dict,
            &GenerationConfig::default(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(targets[0].ending, Ending::Any);
        assert!(matches!(targets[1].ending, Ending::Exact(_)));
        assert_eq!(targets.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_no_matching_polarity_fails() {
        // Only unstressed endings, but the group needs a stressed one.
        let dict = Dictionary::from_words(["нет", "тут"]).unwrap();
        let mut rng = VerseRng::new(2);
        let err = resolve_rhymes(
            plans(&["A"], vec![1], vec![true], 2),
            &dict,
            &GenerationConfig::default(),
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(
            err,
            PoemError::RhymeExhausted {
                group: "A".to_string(),
                attempts: 100
            }
        );
    }

    #[test]
    fn test_syllable_less_dictionary_terminates() {
        let dict = Dictionary::from_words(["в", "к", "с"]).unwrap();
        let mut rng = VerseRng::new(4);
        assert_eq!(pick_ending(&dict, None, 50, &mut rng), None);
        assert_eq!(pick_ending(&dict, Some(true), 50, &mut rng), None);
    }

    #[test]
    fn test_zero_syllable_group_accepts_either_polarity() {
        let dict = Dictionary::from_words(["нет"]).unwrap();
        let mut rng = VerseRng::new(5);
        assert_eq!(pick_ending(&dict, None, 10, &mut rng), Some("ет".to_string()));
    }

    #[test]
    fn test_groups_resolved_in_first_seen_order() {
        // With a fixed seed the draw order is reproducible, so resolving the
        // same plans twice yields the same endings per group.
        let dict = stikh_lang::sample_dictionary();
        let config = GenerationConfig::default();
        let make = || plans(&["B", "A", "B", "A"], vec![2], vec![false, true], 4);
        let a = resolve_rhymes(make(), &dict, &config, &mut VerseRng::new(77)).unwrap();
        let b = resolve_rhymes(make(), &dict, &config, &mut VerseRng::new(77)).unwrap();
        assert_eq!(a, b);

        // The first-seen label draws first: resolving "B" alone with the same
        // seed gives the ending "B" got above.
        let only_b = resolve_rhymes(
            plans(&["B"], vec![2], vec![false, true], 1),
            &dict,
            &config,
            &mut VerseRng::new(77),
        )
        .unwrap();
        assert_eq!(only_b[0].ending, a[0].ending);
    }
}
