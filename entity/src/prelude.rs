pub use super::account::Entity as Account;
pub use super::client::Entity as Client;
pub use super::commission::Entity as Commission;
pub use super::image::Entity as Image;
pub use super::operator::Entity as Operator;
pub use super::role::Entity as Role;
pub use super::statistics::Entity as Statistics;
