use lazy_static::lazy_static;

use crate::models::nominal_forms::{Answer, Case, Gender, Number, Question};
use crate::models::WordEntry;

/// The nine distinct surface forms of a masculine second-declension noun.
/// Nominative and vocative plural always coincide.
#[derive(Debug, Clone, Copy)]
pub struct Forms {
    pub nom_sg: &'static str,
    pub gen_sg: &'static str,
    pub dat_sg: &'static str,
    pub acc_sg: &'static str,
    pub voc_sg: &'static str,
    pub nom_voc_pl: &'static str,
    pub gen_pl: &'static str,
    pub dat_pl: &'static str,
    pub acc_pl: &'static str,
}

struct WordSource {
    nominative_singular: &'static str,
    meaning: &'static str,
    forms: Forms,
}

pub fn to_questions(forms: &Forms) -> Vec<Question> {
    use Case::{Accusative, Dative, Genitive, Nominative, Vocative};
    use Number::{Plural, Singular};

    let masculine = |prompt: &str, number: Number, cases: &[Case]| {
        Question::new(prompt, Answer::new(&[Gender::Masculine], number, cases))
    };

    vec![
        masculine(forms.nom_sg, Singular, &[Nominative]),
        masculine(forms.gen_sg, Singular, &[Genitive]),
        masculine(forms.dat_sg, Singular, &[Dative]),
        masculine(forms.acc_sg, Singular, &[Accusative]),
        masculine(forms.voc_sg, Singular, &[Vocative]),
        masculine(forms.nom_voc_pl, Plural, &[Nominative, Vocative]),
        masculine(forms.gen_pl, Plural, &[Genitive]),
        masculine(forms.dat_pl, Plural, &[Dative]),
        masculine(forms.acc_pl, Plural, &[Accusative]),
    ]
}

const SOURCES: &[WordSource] = &[
    WordSource {
        nominative_singular: "ἄνθρωπος",
        meaning: "human being, man",
        forms: Forms {
            nom_sg: "ἄνθρωπος",
            gen_sg: "ἀνθρώπου",
            dat_sg: "ἀνθρώπῳ",
            acc_sg: "ἄνθρωπον",
            voc_sg: "ἄνθρωπε",
            nom_voc_pl: "ἄνθρωποι",
            gen_pl: "ἀνθρώπων",
            dat_pl: "ἀνθρώποις",
            acc_pl: "ἀνθρώπους",
        },
    },
    WordSource {
        nominative_singular: "λόγος",
        meaning: "word, reason",
        forms: Forms {
            nom_sg: "λόγος",
            gen_sg: "λόγου",
            dat_sg: "λόγῳ",
            acc_sg: "λόγον",
            voc_sg: "λόγε",
            nom_voc_pl: "λόγοι",
            gen_pl: "λόγων",
            dat_pl: "λόγοις",
            acc_pl: "λόγους",
        },
    },
    WordSource {
        nominative_singular: "θεός",
        meaning: "God, god",
        forms: Forms {
            nom_sg: "θεός",
            gen_sg: "θεοῦ",
            dat_sg: "θεῷ",
            acc_sg: "θεόν",
            voc_sg: "θεέ",
            nom_voc_pl: "θεοί",
            gen_pl: "θεῶν",
            dat_pl: "θεοῖς",
            acc_pl: "θεούς",
        },
    },
    WordSource {
        nominative_singular: "κύριος",
        meaning: "lord, master",
        forms: Forms {
            nom_sg: "κύριος",
            gen_sg: "κυρίου",
            dat_sg: "κυρίῳ",
            acc_sg: "κύριον",
            voc_sg: "κύριε",
            nom_voc_pl: "κύριοι",
            gen_pl: "κυρίων",
            dat_pl: "κυρίοις",
            acc_pl: "κυρίους",
        },
    },
    WordSource {
        nominative_singular: "υἱός",
        meaning: "son",
        forms: Forms {
            nom_sg: "υἱός",
            gen_sg: "υἱοῦ",
            dat_sg: "υἱῷ",
            acc_sg: "υἱόν",
            voc_sg: "υἱέ",
            nom_voc_pl: "υἱοί",
            gen_pl: "υἱῶν",
            dat_pl: "υἱοῖς",
            acc_pl: "υἱούς",
        },
    },
    WordSource {
        nominative_singular: "ἀδελφός",
        meaning: "brother",
        forms: Forms {
            nom_sg: "ἀδελφός",
            gen_sg: "ἀδελφοῦ",
            dat_sg: "ἀδελφῷ",
            acc_sg: "ἀδελφόν",
            voc_sg: "ἀδελφέ",
            nom_voc_pl: "ἀδελφοί",
            gen_pl: "ἀδελφῶν",
            dat_pl: "ἀδελφοῖς",
            acc_pl: "ἀδελφούς",
        },
    },
    WordSource {
        nominative_singular: "δοῦλος",
        meaning: "slave, servant",
        forms: Forms {
            nom_sg: "δοῦλος",
            gen_sg: "δούλου",
            dat_sg: "δούλῳ",
            acc_sg: "δοῦλον",
            voc_sg: "δοῦλε",
            nom_voc_pl: "δοῦλοι",
            gen_pl: "δούλων",
            dat_pl: "δούλοις",
            acc_pl: "δούλους",
        },
    },
    WordSource {
        nominative_singular: "νόμος",
        meaning: "law",
        forms: Forms {
            nom_sg: "νόμος",
            gen_sg: "νόμου",
            dat_sg: "νόμῳ",
            acc_sg: "νόμον",
            voc_sg: "νόμε",
            nom_voc_pl: "νόμοι",
            gen_pl: "νόμων",
            dat_pl: "νόμοις",
            acc_pl: "νόμους",
        },
    },
    WordSource {
        nominative_singular: "κόσμος",
        meaning: "world, order",
        forms: Forms {
            nom_sg: "κόσμος",
            gen_sg: "κόσμου",
            dat_sg: "κόσμῳ",
            acc_sg: "κόσμον",
            voc_sg: "κόσμε",
            nom_voc_pl: "κόσμοι",
            gen_pl: "κόσμων",
            dat_pl: "κόσμοις",
            acc_pl: "κόσμους",
        },
    },
    WordSource {
        nominative_singular: "ἄγγελος",
        meaning: "messenger, angel",
        forms: Forms {
            nom_sg: "ἄγγελος",
            gen_sg: "ἀγγέλου",
            dat_sg: "ἀγγέλῳ",
            acc_sg: "ἄγγελον",
            voc_sg: "ἄγγελε",
            nom_voc_pl: "ἄγγελοι",
            gen_pl: "ἀγγέλων",
            dat_pl: "ἀγγέλοις",
            acc_pl: "ἀγγέλους",
        },
    },
    WordSource {
        nominative_singular: "ἀπόστολος",
        meaning: "apostle, messenger",
        forms: Forms {
            nom_sg: "ἀπόστολος",
            gen_sg: "ἀποστόλου",
            dat_sg: "ἀποστόλῳ",
            acc_sg: "ἀπόστολον",
            voc_sg: "ἀπόστολε",
            nom_voc_pl: "ἀπόστολοι",
            gen_pl: "ἀποστόλων",
            dat_pl: "ἀποστόλοις",
            acc_pl: "ἀποστόλους",
        },
    },
    WordSource {
        nominative_singular: "οὐρανός",
        meaning: "heaven, sky",
        forms: Forms {
            nom_sg: "οὐρανός",
            gen_sg: "οὐρανοῦ",
            dat_sg: "οὐρανῷ",
            acc_sg: "οὐρανόν",
            voc_sg: "οὐρανέ",
            nom_voc_pl: "οὐρανοί",
            gen_pl: "οὐρανῶν",
            dat_pl: "οὐρανοῖς",
            acc_pl: "οὐρανούς",
        },
    },
    WordSource {
        nominative_singular: "ὄχλος",
        meaning: "crowd, multitude",
        forms: Forms {
            nom_sg: "ὄχλος",
            gen_sg: "ὄχλου",
            dat_sg: "ὄχλῳ",
            acc_sg: "ὄχλον",
            voc_sg: "ὄχλε",
            nom_voc_pl: "ὄχλοι",
            gen_pl: "ὄχλων",
            dat_pl: "ὄχλοις",
            acc_pl: "ὄχλους",
        },
    },
];

lazy_static! {
    static ref SECOND_DECLENSION_WORDS: Vec<WordEntry> = SOURCES
        .iter()
        .map(|source| WordEntry {
            nominative_singular: source.nominative_singular.to_string(),
            meaning: source.meaning.to_string(),
            questions: to_questions(&source.forms),
        })
        .collect();
}

/// Masculine second-declension vocabulary, in teaching order.
pub fn second_declension_words() -> &'static [WordEntry] {
    &SECOND_DECLENSION_WORDS
}
