pub use super::collection::Entity as Collection;
pub use super::economy::Entity as Economy;
pub use super::objekt::Entity as Objekt;
pub use super::pity::Entity as Pity;
