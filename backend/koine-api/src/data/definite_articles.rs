use lazy_static::lazy_static;

use crate::models::nominal_forms::{
    Answer, Case,
    Case::{Accusative, Dative, Genitive, Nominative},
    Gender,
    Gender::{Feminine, Masculine, Neuter},
    Number::{self, Plural, Singular},
    Question,
};

// (form, genders, number, cases). The article has no vocative.
const ARTICLE_FORMS: &[(&str, &[Gender], Number, &[Case])] = &[
    ("ὁ", &[Masculine], Singular, &[Nominative]),
    ("ἡ", &[Feminine], Singular, &[Nominative]),
    ("τό", &[Neuter], Singular, &[Nominative, Accusative]),
    ("τοῦ", &[Masculine, Neuter], Singular, &[Genitive]),
    ("τῆς", &[Feminine], Singular, &[Genitive]),
    ("τῷ", &[Masculine, Neuter], Singular, &[Dative]),
    ("τῇ", &[Feminine], Singular, &[Dative]),
    ("τόν", &[Masculine], Singular, &[Accusative]),
    ("τήν", &[Feminine], Singular, &[Accusative]),
    ("οἱ", &[Masculine], Plural, &[Nominative]),
    ("αἱ", &[Feminine], Plural, &[Nominative]),
    ("τά", &[Neuter], Plural, &[Nominative, Accusative]),
    ("τῶν", &[Masculine, Feminine, Neuter], Plural, &[Genitive]),
    ("τοῖς", &[Masculine, Neuter], Plural, &[Dative]),
    ("ταῖς", &[Feminine], Plural, &[Dative]),
    ("τούς", &[Masculine], Plural, &[Accusative]),
    ("τάς", &[Feminine], Plural, &[Accusative]),
];

lazy_static! {
    static ref DEFINITE_ARTICLE_QUESTIONS: Vec<Question> = ARTICLE_FORMS
        .iter()
        .map(|&(form, genders, number, cases)| {
            Question::new(form, Answer::new(genders, number, cases))
        })
        .collect();
}

pub fn definite_article_questions() -> &'static [Question] {
    &DEFINITE_ARTICLE_QUESTIONS
}
