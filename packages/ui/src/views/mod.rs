mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod persons;
pub use persons::PersonsView;

mod person_form;
pub use person_form::PersonFormView;

mod addresses;
pub use addresses::AddressesView;

mod address_form;
pub use address_form::AddressFormView;

mod countries;
pub use countries::CountriesView;

mod country_form;
pub use country_form::CountryFormView;

mod states;
pub use states::StatesView;

mod state_form;
pub use state_form::StateFormView;

mod genders;
pub use genders::GendersView;

mod gender_form;
pub use gender_form::GenderFormView;

mod address_types;
pub use address_types::AddressTypesView;

mod address_type_form;
pub use address_type_form::AddressTypeFormView;

mod about;
pub use about::AboutView;
