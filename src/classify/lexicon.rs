//! Keyword tables for the rule-based classifiers
//!
//! The built-in tables target Norwegian journaling text. Matching is plain
//! substring containment on lowercased text, so entries with leading or
//! trailing spaces (`"må "`, `" men "`) are deliberate word-boundary hints.

/// Keyword lists for every semantic axis.
#[derive(Debug, Clone, Copy)]
pub struct SemanticLexicon {
    pub intensity_high: &'static [&'static str],
    pub intensity_low: &'static [&'static str],
    pub frequency_always: &'static [&'static str],
    pub frequency_often: &'static [&'static str],
    pub frequency_rare: &'static [&'static str],
    pub modality_obligation: &'static [&'static str],
    pub modality_possibility: &'static [&'static str],
    pub modality_obstruction: &'static [&'static str],
    pub time_now: &'static [&'static str],
    pub time_past: &'static [&'static str],
    pub time_future: &'static [&'static str],
    /// Whole-word first-person pronouns
    pub subject_self: &'static [&'static str],
    /// Whole-word references to other people
    pub subject_other: &'static [&'static str],
    pub valence_positive: &'static [&'static str],
    pub valence_negative: &'static [&'static str],
    pub tempo_sudden: &'static [&'static str],
    pub tempo_gradual: &'static [&'static str],
    pub tempo_slow: &'static [&'static str],
    pub meta: &'static [&'static str],
    pub meta_uncertain: &'static [&'static str],
    pub contrast: &'static [&'static str],
    pub absolute: &'static [&'static str],
}

/// Keyword lists for the dimension categories.
#[derive(Debug, Clone, Copy)]
pub struct DimensionLexicon {
    pub emotion: &'static [&'static str],
    pub behavior: &'static [&'static str],
    pub thought: &'static [&'static str],
    pub body: &'static [&'static str],
    pub relation: &'static [&'static str],
}

/// Built-in Norwegian semantic lexicon.
pub static NORWEGIAN_SEMANTICS: SemanticLexicon = SemanticLexicon {
    intensity_high: &["helt", "ekstremt", "kjempe", "totalt", "utrolig", "veldig"],
    intensity_low: &["litt", "noe", "ganske"],
    frequency_always: &["alltid", "hver gang", "hele tiden"],
    frequency_often: &["ofte", "stadig", "som regel", "vanligvis"],
    frequency_rare: &["sjelden", "aldri", "nesten aldri"],
    modality_obligation: &["må ", "måtte", "burde", "skulle"],
    modality_possibility: &["kan ", "har lyst", "vil ", "ønsker"],
    modality_obstruction: &[
        "klarer ikke",
        "får ikke til",
        "får det ikke til",
        "får ikke lov",
    ],
    time_now: &["nå", "for tiden", "i det siste", "hver dag"],
    time_past: &["før", "tidligere", "da jeg var liten", "en gang", "før i tiden"],
    time_future: &["skal", "kommer til", "neste gang", "fremover", "etterpå"],
    subject_self: &["jeg"],
    subject_other: &["de", "andre", "folk", "alle"],
    valence_positive: &[
        "godt",
        "bra",
        "lett",
        "digg",
        "gøy",
        "rolig",
        "fornøyd",
        "stolt",
        "trygg",
        "håpefull",
        "optimistisk",
    ],
    valence_negative: &[
        "vondt",
        "tungt",
        "stressa",
        "stresset",
        "urolig",
        "skam",
        "skamfull",
        "skyld",
        "redd",
        "engstelig",
        "bekymret",
        "lei meg",
        "trist",
        "sliten",
        "utmattet",
    ],
    tempo_sudden: &["plutselig", "brått", "med en gang"],
    tempo_gradual: &["gradvis", "etter hvert", "litt etter litt"],
    tempo_slow: &["sakte", "roligere"],
    meta: &["egentlig", "faktisk", "tydeligvis", "visstnok", "på en måte"],
    meta_uncertain: &["kanskje", "virker som", "føles som"],
    contrast: &[
        " men ",
        "men ",
        " samtidig",
        "likevel",
        "selv om",
        "på den ene siden",
        "på den andre siden",
    ],
    absolute: &["alltid", "aldri", "hver gang", "hele tiden", "ingen", "alle"],
};

/// Built-in Norwegian dimension lexicon.
pub static NORWEGIAN_DIMENSIONS: DimensionLexicon = DimensionLexicon {
    emotion: &[
        "redd",
        "engstelig",
        "bekymret",
        "stressa",
        "stresset",
        "urolig",
        "lei meg",
        "skam",
        "skamfull",
        "skyld",
        "flau",
        "trist",
        "glad",
        "fornøyd",
        "stolt",
        "rolig",
    ],
    behavior: &[
        "utsetter",
        "rømmer",
        "prokrastinerer",
        "scroller",
        "ligger på sofaen",
        "ser på",
        "åpner",
        "lukker",
        "gjør ingenting",
        "overjobber",
        "jobber masse",
        "skriver",
        "ringer",
        "sletter",
        "ignorerer",
    ],
    thought: &[
        "tenker",
        "tror",
        "føles som",
        "virker som",
        "jeg sier til meg selv",
        "overtenker",
        "grubler",
        "forestiller meg",
        "bekymrer meg",
        "vurderer",
        "planlegger",
    ],
    body: &[
        "i kroppen",
        "spenning",
        "spenninger",
        "stram",
        "hodepine",
        "smerte",
        "puste",
        "puster",
        "magesmerter",
        "klump i magen",
        "sliten",
        "utmattet",
        "kvalm",
        "svimmel",
        "hjertet banker",
    ],
    relation: &[
        "andre",
        "de",
        "folk",
        "venner",
        "familie",
        "sjefen",
        "kollega",
        "partner",
        "kjæreste",
        "barn",
        "foreldre",
        "læreren",
        "klassen",
    ],
};

/// True when any keyword is a substring of the already-lowercased `text`.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Number of keywords that occur as substrings of `text`.
pub fn count_hits(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(*k)).count()
}
