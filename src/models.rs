use serde::{Deserialize, Serialize};

/// A generated dialog row. Insert-only; never updated by this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dialog {
    pub id: i64,
    pub lang: String,
    pub content: String,
}

/// Dialog fields prior to insertion (id is store-assigned).
#[derive(Debug, Clone)]
pub struct NewDialog {
    pub lang: String,
    pub content: String,
}

/// A vocabulary item with its translation.
///
/// (content, lang) acts as a natural key, enforced advisorily by a lookup
/// before insert rather than a database uniqueness constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub lang: String,
    pub content: String,
    pub translation: String,
}

#[derive(Debug, Clone)]
pub struct NewWord {
    pub lang: String,
    pub content: String,
    pub translation: String,
}

/// One source/translation pair as produced by the translation stage.
/// Field names match the model's wire shape (`vi` / `en`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedWord {
    pub vi: String,
    pub en: String,
}
