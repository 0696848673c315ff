use serde::{Deserialize, Deserializer, Serialize};

/// Accept an explicit JSON `null` wherever a section or list may appear and fall back to the
/// empty value, so a missing subtree and a nulled one read the same.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Numbers typed by hand arrive as `85`, `"85"` or `"85%"`. Anything that does not parse
/// reads as absent instead of failing the dossier.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text
            .trim()
            .trim_end_matches('%')
            .trim()
            .replace(',', "")
            .parse::<f64>()
            .ok(),
        _ => None,
    })
}

/// Returns the trimmed text when the field holds something other than whitespace.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

pub(crate) fn eq_ignore_case(value: &Option<String>, expected: &str) -> bool {
    present(value)
        .map(|text| text.eq_ignore_ascii_case(expected))
        .unwrap_or(false)
}

/// Subject dossier as captured by the profile editor. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileData {
    #[serde(deserialize_with = "nullable")]
    pub identity: Identity,
    #[serde(deserialize_with = "nullable")]
    pub professional: Professional,
    #[serde(deserialize_with = "nullable")]
    pub locations: Locations,
    #[serde(deserialize_with = "nullable")]
    pub contact: Contact,
    #[serde(deserialize_with = "nullable")]
    pub digital: Digital,
    #[serde(deserialize_with = "nullable")]
    pub breaches: Breaches,
    #[serde(deserialize_with = "nullable")]
    pub behavioral: Behavioral,
    #[serde(deserialize_with = "nullable")]
    pub network: Network,
    #[serde(deserialize_with = "nullable")]
    pub public_records: PublicRecords,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub full_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub aliases: Vec<String>,
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Professional {
    pub organization: Option<String>,
    pub title: Option<String>,
    pub industry: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locations {
    #[serde(deserialize_with = "nullable")]
    pub addresses: Vec<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub label: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    /// `confirmed`, `probable`, `unverified`, ...
    pub confidence: Option<String>,
}

impl Address {
    pub fn is_confirmed(&self) -> bool {
        eq_ignore_case(&self.confidence, "confirmed")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "nullable")]
    pub phone_numbers: Vec<PhoneNumber>,
    #[serde(deserialize_with = "nullable")]
    pub email_addresses: Vec<EmailAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneNumber {
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub confidence: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailAddress {
    pub address: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub confidence: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Digital {
    #[serde(deserialize_with = "nullable")]
    pub social_accounts: Vec<SocialAccount>,
    #[serde(deserialize_with = "nullable")]
    pub data_broker_listings: Vec<DataBrokerListing>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialAccount {
    pub platform: Option<String>,
    pub username: Option<String>,
    pub url: Option<String>,
    /// `public` or `private`.
    pub visibility: Option<String>,
    pub notes: Option<String>,
}

impl SocialAccount {
    pub fn is_public(&self) -> bool {
        eq_ignore_case(&self.visibility, "public")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataBrokerListing {
    pub broker: Option<String>,
    pub url: Option<String>,
    /// `active`, `removal_requested`, `removed`.
    pub status: Option<String>,
}

impl DataBrokerListing {
    pub fn is_active(&self) -> bool {
        eq_ignore_case(&self.status, "active")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breaches {
    #[serde(deserialize_with = "nullable")]
    pub records: Vec<BreachRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreachRecord {
    pub breach_name: Option<String>,
    pub date: Option<String>,
    pub severity: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub data_types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Behavioral {
    #[serde(deserialize_with = "nullable")]
    pub routines: Vec<Routine>,
    #[serde(deserialize_with = "nullable")]
    pub observations: Vec<Observation>,
    #[serde(deserialize_with = "nullable")]
    pub travel_patterns: Vec<TravelPattern>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Routine {
    pub name: Option<String>,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub location: Option<String>,
    /// Either a 0-1 fraction or a 0-100 percentage depending on the importer.
    #[serde(deserialize_with = "lenient_number")]
    pub consistency: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Observation {
    pub description: Option<String>,
    pub category: Option<String>,
    pub exploitability: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelPattern {
    pub destination: Option<String>,
    pub frequency: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    #[serde(deserialize_with = "nullable")]
    pub family_members: Vec<FamilyMember>,
    #[serde(deserialize_with = "nullable")]
    pub associates: Vec<Associate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyMember {
    pub name: Option<String>,
    pub relationship: Option<String>,
    /// `public` when the relative's own social media is openly visible.
    pub social_visibility: Option<String>,
    pub notes: Option<String>,
}

impl FamilyMember {
    pub fn has_public_social(&self) -> bool {
        eq_ignore_case(&self.social_visibility, "public")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Associate {
    pub name: Option<String>,
    pub relationship: Option<String>,
    pub organization: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicRecords {
    #[serde(deserialize_with = "nullable")]
    pub properties: Vec<PropertyRecord>,
    #[serde(deserialize_with = "nullable")]
    pub corporate_filings: Vec<CorporateFiling>,
    #[serde(deserialize_with = "nullable")]
    pub court_records: Vec<CourtRecord>,
    #[serde(deserialize_with = "nullable")]
    pub political_donations: Vec<PoliticalDonation>,
}

impl PublicRecords {
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
            && self.corporate_filings.is_empty()
            && self.court_records.is_empty()
            && self.political_donations.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyRecord {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub ownership: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorporateFiling {
    pub entity_name: Option<String>,
    pub role: Option<String>,
    pub jurisdiction: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtRecord {
    pub case_number: Option<String>,
    pub court: Option<String>,
    pub case_type: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoliticalDonation {
    pub recipient: Option<String>,
    pub date: Option<String>,
}
