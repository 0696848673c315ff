//! Subject dossier model and the completeness measure used to gate downstream features.

mod completeness;
pub mod domain;

pub use completeness::{calculate_completeness, CompletenessReport, ProfileSection};
pub use domain::{
    Address, Associate, Behavioral, BreachRecord, Breaches, Contact, CorporateFiling,
    CourtRecord, DataBrokerListing, Digital, EmailAddress, FamilyMember, Identity, Locations,
    Network, Observation, PhoneNumber, PoliticalDonation, Professional, ProfileData,
    PropertyRecord, PublicRecords, Routine, SocialAccount, TravelPattern,
};
