//! # Reference entities managed by the admin front-end
//!
//! Every record the remote API exposes is modelled here as a plain serde struct
//! using the API's camelCase field names. Foreign keys (`state_id`, `gender_id`, ...)
//! travel next to the resolved nested object the server fills in (`state`,
//! `gender`, ...). The client never derives one from the other; only the server
//! keeps them in sync.
//!
//! ## Types
//!
//! | Struct | REST path | Search filter |
//! |--------|-----------|---------------|
//! | [`Person`] | `/person` | none |
//! | [`Address`] | `/address` | [`AddressFilter`] (`personId`) |
//! | [`Country`] | `/country` | none |
//! | [`State`] | `/state` | [`StateFilter`] (`countryId`) |
//! | [`Gender`] | `/gender` | none |
//! | [`AddressType`] | `/addresstype` | none |
//!
//! All of them implement [`Entity`], which is what lets the `api` crate offer a
//! single generic service and the `ui` crate a single generic list hook.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::paging::{NoFilter, SearchFilter};

/// A record type served by one REST resource.
pub trait Entity:
    Clone + std::fmt::Debug + PartialEq + Serialize + DeserializeOwned + 'static
{
    /// Base path of the resource, e.g. `"/person"`.
    const PATH: &'static str;
    /// Singular display name, e.g. `"person"`.
    const LABEL: &'static str;
    /// Plural display name, e.g. `"persons"`.
    const PLURAL: &'static str;

    /// Entity-specific filter appended to search queries.
    type Filter: SearchFilter;

    /// Server-assigned identifier. `None` for records that were never saved.
    fn id(&self) -> Option<i64>;
}

/// A person.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// ISO timestamp or date string as sent by the server.
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub profile_picture_url: String,
}

impl Person {
    /// First and last name joined by a space, skipping empty parts.
    pub fn full_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Entity for Person {
    const PATH: &'static str = "/person";
    const LABEL: &'static str = "person";
    const PLURAL: &'static str = "persons";
    type Filter = NoFilter;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// A postal address belonging to a person.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub state_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(default)]
    pub address_type_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressType>,
    #[serde(default)]
    pub person_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
}

impl Address {
    /// Country this address is in, as far as the loaded record tells.
    ///
    /// Prefers the explicit `countryId` and falls back to the nested state.
    pub fn derived_country_id(&self) -> Option<i64> {
        self.country_id
            .filter(|id| *id != 0)
            .or_else(|| self.state.as_ref().map(|s| s.country_id))
            .filter(|id| *id != 0)
    }
}

impl Entity for Address {
    const PATH: &'static str = "/address";
    const LABEL: &'static str = "address";
    const PLURAL: &'static str = "addresses";
    type Filter = AddressFilter;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Restricts an address search to one person.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddressFilter {
    pub person_id: Option<i64>,
}

impl SearchFilter for AddressFilter {
    fn append_params(&self, params: &mut Vec<(&'static str, String)>) {
        if let Some(id) = self.person_id {
            params.push(("personId", id.to_string()));
        }
    }
}

/// A country and its states.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub states: Vec<State>,
}

impl Entity for Country {
    const PATH: &'static str = "/country";
    const LABEL: &'static str = "country";
    const PLURAL: &'static str = "countries";
    type Filter = NoFilter;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// A state (or province) inside a country.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Box<Country>>,
}

impl Entity for State {
    const PATH: &'static str = "/state";
    const LABEL: &'static str = "state";
    const PLURAL: &'static str = "states";
    type Filter = StateFilter;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Restricts a state search to one country.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StateFilter {
    pub country_id: Option<i64>,
}

impl SearchFilter for StateFilter {
    fn append_params(&self, params: &mut Vec<(&'static str, String)>) {
        if let Some(id) = self.country_id {
            params.push(("countryId", id.to_string()));
        }
    }
}

/// Gender reference value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gender {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub persons: Vec<Person>,
}

impl Entity for Gender {
    const PATH: &'static str = "/gender";
    const LABEL: &'static str = "gender";
    const PLURAL: &'static str = "genders";
    type Filter = NoFilter;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Address type reference value ("Home", "Work", ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
}

impl Entity for AddressType {
    const PATH: &'static str = "/addresstype";
    const LABEL: &'static str = "address type";
    const PLURAL: &'static str = "address types";
    type Filter = NoFilter;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_from_api_json() {
        let json = r#"{
            "id": 7,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "dateOfBirth": "1815-12-10T00:00:00",
            "genderId": 2,
            "gender": { "id": 2, "code": "F", "name": "Female", "persons": [] },
            "profilePictureUrl": ""
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.id, Some(7));
        assert_eq!(person.full_name(), "Ada Lovelace");
        assert_eq!(person.gender.as_ref().map(|g| g.name.as_str()), Some("Female"));
    }

    #[test]
    fn test_new_person_omits_id() {
        let person = Person {
            first_name: "Grace".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&person).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["firstName"], "Grace");
    }

    #[test]
    fn test_full_name_skips_empty_parts() {
        let person = Person {
            last_name: "Hopper".into(),
            ..Default::default()
        };
        assert_eq!(person.full_name(), "Hopper");
    }

    #[test]
    fn test_address_with_null_nested_objects() {
        let json = r#"{
            "id": 1, "street": "1 Main St", "city": "Springfield",
            "stateId": 4, "state": null, "postalCode": null,
            "addressTypeId": 1, "addressType": null,
            "personId": 9, "person": null
        }"#;
        let address: Address = serde_json::from_str(json).unwrap();
        assert_eq!(address.state_id, 4);
        assert!(address.state.is_none());
        assert_eq!(address.derived_country_id(), None);
    }

    #[test]
    fn test_derived_country_prefers_explicit_id() {
        let mut address = Address {
            state: Some(State {
                country_id: 3,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(address.derived_country_id(), Some(3));

        address.country_id = Some(5);
        assert_eq!(address.derived_country_id(), Some(5));
    }

    #[test]
    fn test_country_without_states_field() {
        let country: Country = serde_json::from_str(r#"{"id":1,"code":"US","name":"United States"}"#).unwrap();
        assert!(country.states.is_empty());
        assert_eq!(<Country as Entity>::PATH, "/country");
    }
}
