//! Court dilemmas. One may be pending at a time; the ruler picks one of two
//! options and the listed deltas are applied through the usual clamps.

/// A bounded delta one dilemma option applies. Two-field variants draw
/// uniformly between the bounds (inclusive); equal bounds mean a flat delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceEffect {
    Money(i64, i64),
    Happiness(i64, i64),
    People(i64, i64),
    Bread(i64, i64),
    Strength(i64, i64),
    Protests(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOptionDef {
    pub label: &'static str,
    pub effects: &'static [ChoiceEffect],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceDef {
    pub id: u16,
    pub prompt: &'static str,
    pub options: [ChoiceOptionDef; 2],
}

pub const CHOICES: [ChoiceDef; 5] = [
    ChoiceDef {
        id: 0,
        prompt: "A wandering tribe begs to settle at the gates.",
        options: [
            ChoiceOptionDef {
                label: "Welcome them",
                effects: &[ChoiceEffect::People(6, 6), ChoiceEffect::Money(-40, -40)],
            },
            ChoiceOptionDef {
                label: "Turn them away",
                effects: &[ChoiceEffect::Happiness(-4, -4)],
            },
        ],
    },
    ChoiceDef {
        id: 1,
        prompt: "Miners break into a sealed cavern under the hills.",
        options: [
            ChoiceOptionDef {
                label: "Explore it",
                effects: &[ChoiceEffect::Money(100, 400), ChoiceEffect::People(-3, 0)],
            },
            ChoiceOptionDef {
                label: "Seal it shut",
                effects: &[ChoiceEffect::Happiness(-2, -2)],
            },
        ],
    },
    ChoiceDef {
        id: 2,
        prompt: "A neighboring lord begs for grain.",
        options: [
            ChoiceOptionDef {
                label: "Send aid",
                effects: &[ChoiceEffect::Bread(-15, -15), ChoiceEffect::Happiness(6, 6)],
            },
            ChoiceOptionDef {
                label: "Refuse him",
                effects: &[ChoiceEffect::Happiness(-3, -3), ChoiceEffect::Protests(1)],
            },
        ],
    },
    ChoiceDef {
        id: 3,
        prompt: "A quarrel splits the court.",
        options: [
            ChoiceOptionDef {
                label: "Side with the elders",
                effects: &[ChoiceEffect::Happiness(3, 3), ChoiceEffect::Money(-100, -100)],
            },
            ChoiceOptionDef {
                label: "Side with the merchants",
                effects: &[ChoiceEffect::Money(150, 150), ChoiceEffect::Happiness(-5, -5)],
            },
        ],
    },
    ChoiceDef {
        id: 4,
        prompt: "A prophet cries doom in the square.",
        options: [
            ChoiceOptionDef {
                label: "Hold a vigil",
                effects: &[ChoiceEffect::Strength(-1, -1), ChoiceEffect::Happiness(4, 4)],
            },
            ChoiceOptionDef {
                label: "Banish the prophet",
                effects: &[ChoiceEffect::Happiness(-6, 2)],
            },
        ],
    },
];

/// Lookup by id. Stale ids from old saves miss and resolve to nothing.
pub fn choice(id: u16) -> Option<&'static ChoiceDef> {
    CHOICES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_resolvable() {
        for def in &CHOICES {
            assert_eq!(choice(def.id).map(|c| c.id), Some(def.id));
        }
        assert!(choice(999).is_none());
    }

    #[test]
    fn test_effect_ranges_are_well_formed() {
        for def in &CHOICES {
            for option in &def.options {
                assert!(!option.effects.is_empty(), "{} `{}`", def.id, option.label);
                for effect in option.effects {
                    let (lo, hi) = match *effect {
                        ChoiceEffect::Money(lo, hi)
                        | ChoiceEffect::Happiness(lo, hi)
                        | ChoiceEffect::People(lo, hi)
                        | ChoiceEffect::Bread(lo, hi)
                        | ChoiceEffect::Strength(lo, hi) => (lo, hi),
                        ChoiceEffect::Protests(n) => (n, n),
                    };
                    assert!(lo <= hi, "{} `{}`", def.id, option.label);
                }
            }
        }
    }
}
