pub mod grade;
pub mod record;
pub mod traits;

pub use grade::{SteelGrade, catalog, lookup};
pub use record::{MaterialRecord, STEEL_S235, STEEL_S355};
pub use traits::{HasDensity, HasStrengthGrade, Material};
