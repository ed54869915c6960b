//! Capabilities shared by every material, for callers that work with
//! "any material" rather than a concrete grade.

pub trait HasDensity {
    /// Mass per unit volume, in kg/m3.
    fn density(&self) -> f64;
}

pub trait HasStrengthGrade {
    /// Standard designation such as `"S355"`.
    fn strength_grade(&self) -> &str;
}

pub trait Material: HasDensity + HasStrengthGrade {
    /// Tag the interchange format uses to tell variants apart.
    fn type_identifier(&self) -> &str;
}
