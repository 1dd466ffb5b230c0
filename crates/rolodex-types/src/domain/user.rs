use serde::{Deserialize, Deserializer, Serialize};

/// One profile as delivered by the remote directory API.
///
/// Records are immutable once fetched. Only the fields the gallery and the
/// detail view need are modelled; everything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: PersonName,
    pub email: String,
    /// Raw cell number as the API sends it, e.g. `(555)-013-4477`
    pub cell: String,
    pub location: Location,
    pub dob: DateOfBirth,
    pub picture: Picture,
}

impl UserRecord {
    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(deserialize_with = "string_or_number")]
    pub postcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    #[serde(deserialize_with = "string_or_number")]
    pub number: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOfBirth {
    /// ISO-8601 timestamp, e.g. `1990-05-03T08:12:44.112Z`
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
}

// The API sends US postcodes and street numbers as JSON numbers but other
// locales as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}
