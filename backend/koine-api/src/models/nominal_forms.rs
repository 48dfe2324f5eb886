use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Number {
    Singular,
    Plural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Vocative,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Masculine, Gender::Feminine, Gender::Neuter];
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];
}

impl Case {
    pub const ALL: [Case; 5] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Vocative,
    ];
}

/// One concrete reading of a surface form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Combination {
    pub gender: Gender,
    pub number: Number,
    #[serde(rename = "case")]
    pub case_: Case,
}

/// Expected answer for a prompt. A form may be ambiguous between several
/// genders or cases, but always carries a single number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub genders: Vec<Gender>,
    pub number: Number,
    pub cases: Vec<Case>,
}

impl Answer {
    pub fn new(genders: &[Gender], number: Number, cases: &[Case]) -> Self {
        Self {
            genders: genders.to_vec(),
            number,
            cases: cases.to_vec(),
        }
    }

    /// Every `(gender, number, case)` triple this answer stands for, sorted.
    pub fn combinations(&self) -> Vec<Combination> {
        let mut combos: Vec<Combination> = self
            .genders
            .iter()
            .flat_map(|&gender| {
                self.cases.iter().map(move |&case_| Combination {
                    gender,
                    number: self.number,
                    case_,
                })
            })
            .collect();
        combos.sort();
        combos.dedup();
        combos
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub q: String,
    pub a: Answer,
}

impl Question {
    pub fn new(prompt: &str, answer: Answer) -> Self {
        Self {
            q: prompt.to_string(),
            a: answer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedAnswer {
    pub question: String,
    pub combos: Vec<Combination>,
}
