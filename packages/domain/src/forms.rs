//! # Form drafts
//!
//! A draft is the editable state behind one create/edit form. It holds what the
//! inputs show (strings and optional ids), knows how to start from an existing
//! record, validates required fields and turns itself back into the entity that
//! gets sent to the API.
//!
//! | Draft | Entity | Notes |
//! |-------|--------|-------|
//! | [`PersonDraft`] | [`Person`] | date of birth shown as `YYYY-MM-DD`, gender defaults to the first option |
//! | [`AddressDraft`] | [`Address`] | tracks the selected country that scopes the state dropdown |
//! | [`CodeNameDraft`] | [`Country`], [`Gender`] | |
//! | [`AddressTypeDraft`] | [`AddressType`] | |
//! | [`StateDraft`] | [`State`] | country fixed by the route |

use crate::models::{Address, AddressType, Country, Gender, Person, State};

/// Today's local date as `YYYY-MM-DD`.
pub fn today_string() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Date part of an ISO timestamp (`"1990-04-01T00:00:00"` → `"1990-04-01"`).
pub fn date_only(value: &str) -> &str {
    match value.char_indices().nth(10) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

fn required(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} is required."))
    } else {
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PersonDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender_id: Option<i64>,
    pub profile_picture_url: String,
}

impl PersonDraft {
    /// Blank form; date of birth starts at `today`.
    pub fn new(today: &str) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            date_of_birth: today.to_string(),
            gender_id: None,
            profile_picture_url: String::new(),
        }
    }

    pub fn from_person(person: &Person, today: &str) -> Self {
        let date_of_birth = if person.date_of_birth.is_empty() {
            today.to_string()
        } else {
            date_only(&person.date_of_birth).to_string()
        };
        Self {
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            date_of_birth,
            gender_id: person.gender_id.filter(|id| *id != 0),
            profile_picture_url: person.profile_picture_url.clone(),
        }
    }

    /// Pick the first gender when none is chosen yet.
    pub fn default_gender(&mut self, genders: &[Gender]) {
        if self.gender_id.is_none() {
            self.gender_id = genders.first().and_then(|g| g.id);
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        required(&self.first_name, "First name")?;
        required(&self.last_name, "Last name")?;
        if self.gender_id.is_none() {
            return Err("Gender is required.".to_string());
        }
        Ok(())
    }

    /// The record to submit. A missing gender is sent as `0`.
    pub fn to_person(&self, id: Option<i64>) -> Person {
        Person {
            id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            date_of_birth: self.date_of_birth.clone(),
            gender_id: Some(self.gender_id.unwrap_or(0)),
            gender: None,
            profile_picture_url: self.profile_picture_url.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddressDraft {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub state_id: Option<i64>,
    pub address_type_id: Option<i64>,
    pub person_id: i64,
    /// Country whose states populate the state dropdown.
    pub selected_country_id: Option<i64>,
}

impl AddressDraft {
    pub fn new(person_id: i64) -> Self {
        Self {
            person_id,
            ..Default::default()
        }
    }

    pub fn from_address(address: &Address) -> Self {
        Self {
            street: address.street.clone(),
            city: address.city.clone(),
            postal_code: address.postal_code.clone().unwrap_or_default(),
            state_id: Some(address.state_id).filter(|id| *id != 0),
            address_type_id: Some(address.address_type_id).filter(|id| *id != 0),
            person_id: address.person_id,
            selected_country_id: address.derived_country_id(),
        }
    }

    /// Choosing a country invalidates the chosen state.
    pub fn select_country(&mut self, country_id: Option<i64>) {
        self.selected_country_id = country_id;
        self.state_id = None;
    }

    /// Choosing a state also moves the country selection to that state's country.
    pub fn select_state(&mut self, state_id: Option<i64>, states: &[State]) {
        self.state_id = state_id;
        let country = state_id
            .and_then(|id| states.iter().find(|s| s.id == Some(id)))
            .map(|s| s.country_id)
            .filter(|id| *id != 0);
        if let Some(country_id) = country {
            self.selected_country_id = Some(country_id);
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        required(&self.street, "Street")?;
        required(&self.city, "City")?;
        if self.selected_country_id.is_none() {
            return Err("Country is required.".to_string());
        }
        if self.state_id.is_none() {
            return Err("State is required.".to_string());
        }
        if self.address_type_id.is_none() {
            return Err("Address type is required.".to_string());
        }
        Ok(())
    }

    pub fn to_address(&self, id: Option<i64>) -> Address {
        let postal_code = self.postal_code.trim();
        Address {
            id,
            street: self.street.trim().to_string(),
            city: self.city.trim().to_string(),
            postal_code: (!postal_code.is_empty()).then(|| postal_code.to_string()),
            state_id: self.state_id.unwrap_or(0),
            address_type_id: self.address_type_id.unwrap_or(0),
            person_id: self.person_id,
            country_id: self.selected_country_id,
            ..Default::default()
        }
    }
}

/// Draft for entities that are just a code and a name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CodeNameDraft {
    pub code: String,
    pub name: String,
}

impl CodeNameDraft {
    pub fn from_country(country: &Country) -> Self {
        Self {
            code: country.code.clone(),
            name: country.name.clone(),
        }
    }

    pub fn from_gender(gender: &Gender) -> Self {
        Self {
            code: gender.code.clone(),
            name: gender.name.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        required(&self.code, "Code")?;
        required(&self.name, "Name")
    }

    pub fn to_country(&self, id: Option<i64>) -> Country {
        Country {
            id,
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            states: Vec::new(),
        }
    }

    pub fn to_gender(&self, id: Option<i64>) -> Gender {
        Gender {
            id,
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            persons: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddressTypeDraft {
    pub name: String,
}

impl AddressTypeDraft {
    pub fn from_address_type(address_type: &AddressType) -> Self {
        Self {
            name: address_type.name.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        required(&self.name, "Name")
    }

    pub fn to_address_type(&self, id: Option<i64>) -> AddressType {
        AddressType {
            id,
            name: self.name.trim().to_string(),
            addresses: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateDraft {
    pub code: String,
    pub name: String,
    pub country_id: i64,
}

impl StateDraft {
    pub fn new(country_id: i64) -> Self {
        Self {
            country_id,
            ..Default::default()
        }
    }

    pub fn from_state(state: &State) -> Self {
        Self {
            code: state.code.clone(),
            name: state.name.clone(),
            country_id: state.country_id,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        required(&self.code, "Code")?;
        required(&self.name, "Name")
    }

    pub fn to_state(&self, id: Option<i64>) -> State {
        State {
            id,
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            country_id: self.country_id,
            country: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_only_trims_timestamp() {
        assert_eq!(date_only("1990-04-01T00:00:00"), "1990-04-01");
        assert_eq!(date_only("1990-04-01"), "1990-04-01");
        assert_eq!(date_only(""), "");
    }

    #[test]
    fn test_today_string_shape() {
        let today = today_string();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
        assert_eq!(&today[7..8], "-");
    }

    #[test]
    fn test_person_draft_from_existing() {
        let person = Person {
            id: Some(3),
            first_name: "Alan".into(),
            last_name: "Turing".into(),
            date_of_birth: "1912-06-23T00:00:00".into(),
            gender_id: Some(1),
            profile_picture_url: "/img/alan.png".into(),
            ..Default::default()
        };
        let draft = PersonDraft::from_person(&person, "2024-01-01");
        assert_eq!(draft.date_of_birth, "1912-06-23");
        assert_eq!(draft.gender_id, Some(1));

        let submitted = draft.to_person(Some(3));
        assert_eq!(submitted.id, Some(3));
        assert_eq!(submitted.date_of_birth, "1912-06-23");
        assert!(submitted.gender.is_none());
    }

    #[test]
    fn test_person_draft_missing_date_uses_today() {
        let draft = PersonDraft::from_person(&Person::default(), "2024-05-06");
        assert_eq!(draft.date_of_birth, "2024-05-06");
    }

    #[test]
    fn test_person_draft_default_gender() {
        let genders = vec![
            Gender {
                id: Some(4),
                name: "Female".into(),
                ..Default::default()
            },
            Gender {
                id: Some(5),
                name: "Male".into(),
                ..Default::default()
            },
        ];
        let mut draft = PersonDraft::new("2024-01-01");
        draft.default_gender(&genders);
        assert_eq!(draft.gender_id, Some(4));

        draft.gender_id = Some(5);
        draft.default_gender(&genders);
        assert_eq!(draft.gender_id, Some(5));
    }

    #[test]
    fn test_person_draft_validation_and_zero_gender() {
        let mut draft = PersonDraft::new("2024-01-01");
        assert_eq!(draft.validate(), Err("First name is required.".to_string()));
        draft.first_name = "Ada".into();
        draft.last_name = "Byron".into();
        assert_eq!(draft.validate(), Err("Gender is required.".to_string()));
        assert_eq!(draft.to_person(None).gender_id, Some(0));
        draft.gender_id = Some(2);
        assert!(draft.validate().is_ok());
    }

    fn states() -> Vec<State> {
        vec![
            State {
                id: Some(10),
                code: "CA".into(),
                name: "California".into(),
                country_id: 1,
                country: None,
            },
            State {
                id: Some(20),
                code: "ON".into(),
                name: "Ontario".into(),
                country_id: 2,
                country: None,
            },
        ]
    }

    #[test]
    fn test_address_country_change_clears_state() {
        let mut draft = AddressDraft::new(7);
        draft.select_country(Some(1));
        draft.select_state(Some(10), &states());
        assert_eq!(draft.state_id, Some(10));

        draft.select_country(Some(2));
        assert_eq!(draft.selected_country_id, Some(2));
        assert_eq!(draft.state_id, None);
    }

    #[test]
    fn test_address_state_selects_its_country() {
        let mut draft = AddressDraft::new(7);
        draft.select_state(Some(20), &states());
        assert_eq!(draft.selected_country_id, Some(2));
    }

    #[test]
    fn test_address_draft_from_loaded_record() {
        let address = Address {
            id: Some(5),
            street: "10 Downing St".into(),
            city: "London".into(),
            postal_code: Some("SW1A 2AA".into()),
            state_id: 20,
            state: Some(states().remove(1)),
            address_type_id: 1,
            person_id: 7,
            ..Default::default()
        };
        let draft = AddressDraft::from_address(&address);
        assert_eq!(draft.selected_country_id, Some(2));
        assert_eq!(draft.state_id, Some(20));
        assert!(draft.validate().is_ok());

        let submitted = draft.to_address(Some(5));
        assert_eq!(submitted.person_id, 7);
        assert_eq!(submitted.postal_code.as_deref(), Some("SW1A 2AA"));
        assert!(submitted.state.is_none());
    }

    #[test]
    fn test_address_validation_order() {
        let mut draft = AddressDraft::new(1);
        draft.street = "Main".into();
        draft.city = "Town".into();
        assert_eq!(draft.validate(), Err("Country is required.".to_string()));
        draft.select_country(Some(1));
        assert_eq!(draft.validate(), Err("State is required.".to_string()));
        draft.select_state(Some(10), &states());
        assert_eq!(draft.validate(), Err("Address type is required.".to_string()));
    }

    #[test]
    fn test_blank_postal_code_is_omitted() {
        let draft = AddressDraft {
            postal_code: "   ".into(),
            ..AddressDraft::new(1)
        };
        assert!(draft.to_address(None).postal_code.is_none());
    }

    #[test]
    fn test_code_name_draft() {
        let draft = CodeNameDraft {
            code: " DE ".into(),
            name: "Germany".into(),
        };
        assert!(draft.validate().is_ok());
        let country = draft.to_country(None);
        assert_eq!(country.code, "DE");
        assert!(country.id.is_none());

        let empty = CodeNameDraft::default();
        assert_eq!(empty.validate(), Err("Code is required.".to_string()));
    }

    #[test]
    fn test_state_draft_keeps_country() {
        let mut draft = StateDraft::new(4);
        draft.code = "BY".into();
        draft.name = "Bavaria".into();
        let state = draft.to_state(Some(8));
        assert_eq!(state.country_id, 4);
        assert_eq!(state.id, Some(8));
    }

    #[test]
    fn test_address_type_draft() {
        let draft = AddressTypeDraft::from_address_type(&AddressType {
            id: Some(1),
            name: "Home".into(),
            addresses: Vec::new(),
        });
        assert_eq!(draft.to_address_type(Some(1)).name, "Home");
        assert!(AddressTypeDraft::default().validate().is_err());
    }
}
