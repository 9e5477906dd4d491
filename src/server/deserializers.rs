use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{db::Question, pagination::Page};

// `?page=abc` behaves like no page at all
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<Page, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .map(Page::new)
        .unwrap_or_default())
}

// the quiz client expects `false` once there is nothing left to ask
pub fn serialize_question_or_false<S>(
    question: &Option<Question>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match question {
        Some(question) => question.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}
