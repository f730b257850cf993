use {
    chrono::{DateTime, NaiveDate, Utc},
    serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize},
    std::collections::BTreeMap,
};

/// Decodes a field, falling back to its default when the value is `null` or
/// has an unexpected shape, so one bad field never rejects a whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Response of the upstream `films/` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilmListing {
    #[serde(deserialize_with = "lenient")]
    pub count: usize,
    #[serde(deserialize_with = "lenient")]
    pub next: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub previous: Option<String>,
    pub results: Vec<Film>,
}

/// A single film record, as returned by `films/{id}/` and inside listings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Film {
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub episode_id: u32,
    #[serde(deserialize_with = "lenient")]
    pub opening_crawl: String,
    #[serde(deserialize_with = "lenient")]
    pub director: String,
    #[serde(deserialize_with = "lenient")]
    pub producer: String,
    #[serde(deserialize_with = "lenient")]
    pub release_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient")]
    pub characters: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub planets: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub starships: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub vehicles: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub species: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub created: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient")]
    pub edited: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient")]
    pub url: String,

    /// Fields the catalog sends that are not modelled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Film {
    /// Upstream identifier, taken from the last segment of `url`.
    pub fn id(&self) -> Option<u32> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}
