//! Domain value objects shared across the form.

mod country;
mod phone;

pub use country::Country;
pub use phone::{only_digits, ParsedPhone};
