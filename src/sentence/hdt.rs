use super::decimal;

/// HDT: true heading
#[derive(Debug, Clone, PartialEq)]
pub struct Hdt {
    pub heading_deg: f64,
}

impl Hdt {
    pub const ID: &'static str = "GPHDT";

    pub fn body(&self) -> String {
        format!("{},{},T", Self::ID, decimal(self.heading_deg))
    }
}
