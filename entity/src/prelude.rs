pub use super::bank_account::Entity as BankAccount;
pub use super::product::Entity as Product;
pub use super::user::Entity as User;
