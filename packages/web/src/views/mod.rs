mod layout;
pub use layout::{AppShell, NotFound, SettingsHome, SettingsLayout};

mod persons;
pub use persons::{AddressCreate, AddressEdit, Addresses, PersonCreate, PersonEdit, Persons};

mod reference;
pub use reference::{
    AddressTypeCreate, AddressTypeEdit, AddressTypes, Countries, CountryCreate, CountryEdit,
    GenderCreate, GenderEdit, Genders, StateCreate, StateEdit, States,
};

mod about;
pub use about::About;
