use crate::sentence::UtcTime;

/// ZDA: time and date. Local zone is not described.
#[derive(Debug, Clone, PartialEq)]
pub struct Zda {
    pub utc: UtcTime,
}

impl Zda {
    pub const ID: &'static str = "GPZDA";

    pub fn body(&self) -> String {
        format!(
            "{},{}.000,{:02},{:02},{:04},0,0",
            Self::ID,
            self.utc.time,
            self.utc.day,
            self.utc.month,
            self.utc.year,
        )
    }
}
