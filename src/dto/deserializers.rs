use serde::{de, Deserialize, Deserializer};

// browser forms post select values as strings, so "3" and 3 must both work
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

pub fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(value) => i32::try_from(value)
            .map_err(|_| de::Error::custom(format!("{value} is out of range"))),
        IntOrString::Str(value) => value
            .trim()
            .parse::<i32>()
            .map_err(|_| de::Error::custom(format!("Wrong value {value}, can not parse to integer"))),
    }
}
